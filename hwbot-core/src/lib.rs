//! # hwbot-core
//!
//! Core pieces for the homework status bot: error taxonomy, the [`Notifier`]
//! trait and its Telegram implementation, payload types, and tracing
//! initialization. Application logic (polling, validation) lives in `hwbot`.

pub mod error;
pub mod logger;
pub mod notify;
pub mod types;

pub use error::{ApiError, HwbotError, ResponseError, Result};
pub use logger::init_tracing;
pub use notify::{Notifier, TelegramNotifier};
pub use types::{Homework, StatusResponse};
