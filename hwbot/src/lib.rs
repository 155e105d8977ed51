//! # Homework status bot
//!
//! Polls the homework review API on a fixed interval and forwards status
//! changes for the most recent submission to a Telegram chat. Loads config
//! from env, then runs the poll loop forever: fetch, validate, parse, diff,
//! notify, sleep. Core (errors, Notifier, payload types, tracing setup) comes
//! from hwbot-core.

pub mod cli;
pub mod client;
pub mod config;
pub mod poller;
pub mod response;
pub mod status;

// Re-export CLI
pub use cli::{load_config, Cli, Commands};

// Re-export core (from hwbot-core)
pub use hwbot_core::{
    init_tracing, ApiError, Homework, HwbotError, Notifier, ResponseError, Result, StatusResponse,
    TelegramNotifier,
};

pub use client::HomeworkClient;
pub use config::{BotConfig, WindowMode};
pub use poller::{run_bot, PollOutcome, PollState, Poller};
pub use response::check_response;
pub use status::{parse_status, verdict_for, HOMEWORK_VERDICTS};
