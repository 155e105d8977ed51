//! Notification delivery.
//!
//! [`Notifier`] trait is transport-agnostic; [`TelegramNotifier`] implements
//! it via teloxide, addressed to one fixed chat.

use crate::error::{HwbotError, Result};
use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId};
use tracing::debug;

/// Abstraction for delivering one text notification. Implementations map to a
/// transport (e.g. Telegram); tests substitute a recording implementation.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a text message to the configured destination.
    async fn send(&self, text: &str) -> Result<()>;
}

/// Teloxide-based implementation of [`Notifier`].
pub struct TelegramNotifier {
    bot: teloxide::Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    /// Creates a notifier using the given bot token and destination chat id.
    pub fn new(token: String, chat_id: i64) -> Self {
        Self {
            bot: teloxide::Bot::new(token),
            chat_id: ChatId(chat_id),
        }
    }

    /// Same, but with the Bot API base URL overridden (used by tests to point
    /// at a mock server).
    pub fn with_api_url(token: String, chat_id: i64, api_url: reqwest::Url) -> Self {
        Self {
            bot: teloxide::Bot::new(token).set_api_url(api_url),
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        self.bot
            .send_message(self.chat_id, text)
            .await
            .map_err(|e| HwbotError::Notify(e.to_string()))?;
        debug!(message = %text, "Sent notification");
        Ok(())
    }
}
