//! Poll loop: fetch, validate, parse, diff against the last notification,
//! send, sleep. Runs forever; per-iteration errors are logged and skipped.

use anyhow::Result;
use chrono::Utc;
use hwbot_core::{init_tracing, Notifier, ResponseError, TelegramNotifier};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::client::HomeworkClient;
use crate::config::{BotConfig, WindowMode};
use crate::response::check_response;
use crate::status::parse_status;

/// State threaded through iterations: the poll window and the last message
/// text queued for sending. Reset only by process restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    pub window: i64,
    pub last_notified: String,
}

impl PollState {
    pub fn new(window: i64) -> Self {
        Self {
            window,
            last_notified: String::new(),
        }
    }
}

/// What one iteration did; the loop logs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// A status change was picked up and a notification queued.
    Notified(String),
    /// Feed unchanged since the last notification; nothing sent.
    Unchanged,
}

/// Poll loop over the homework API. The notifier is injected so tests can
/// substitute a recording implementation.
pub struct Poller {
    client: HomeworkClient,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    window_mode: WindowMode,
}

impl Poller {
    pub fn new(
        client: HomeworkClient,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        window_mode: WindowMode,
    ) -> Self {
        Self {
            client,
            notifier,
            interval,
            window_mode,
        }
    }

    /// One fetch-validate-parse-notify cycle.
    ///
    /// Change detection is substring containment, not equality: a message
    /// already contained in the last-notified text is not re-sent. Delivery
    /// failures are logged and do not fail the iteration; the message still
    /// counts as queued.
    pub async fn poll_once(&self, state: &mut PollState) -> hwbot_core::Result<PollOutcome> {
        let payload = self.client.fetch(state.window).await?;
        let response = check_response(&payload)?;

        if self.window_mode == WindowMode::Advancing {
            state.window = response.current_date;
        }

        let homework = response
            .homeworks
            .first()
            .ok_or(ResponseError::EmptyHomeworks)?;
        let message = parse_status(homework)?;

        if state.last_notified.contains(&message) {
            return Ok(PollOutcome::Unchanged);
        }

        if let Err(e) = self.notifier.send(&message).await {
            error!(error = %e, "Failed to deliver notification");
        }
        state.last_notified = message.clone();

        Ok(PollOutcome::Notified(message))
    }

    /// Runs the loop forever. Every iteration ends in a fixed sleep, whether
    /// it notified, found nothing new, or failed; only process termination
    /// stops it.
    pub async fn run(&self, mut state: PollState) {
        loop {
            match self.poll_once(&mut state).await {
                Ok(PollOutcome::Notified(message)) => {
                    info!(message = %message, "Notification queued");
                }
                Ok(PollOutcome::Unchanged) => {
                    debug!("No status change");
                }
                Err(e) => {
                    error!(error = %e, "Poll iteration failed");
                }
            }

            tokio::time::sleep(self.interval).await;
        }
    }
}

/// Main entry: validate config, init logging, build the client and notifier,
/// then poll forever.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    if let Some(dir) = Path::new(&config.log_file).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    init_tracing(&config.log_file)?;

    info!(
        endpoint = %config.endpoint,
        interval_secs = config.poll_interval_secs,
        window_mode = ?config.window_mode,
        "Starting homework status bot"
    );

    let client = HomeworkClient::new(config.endpoint.clone(), config.practicum_token.clone());
    let notifier: Arc<dyn Notifier> = match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str)?;
            Arc::new(TelegramNotifier::with_api_url(
                config.telegram_token.clone(),
                config.telegram_chat_id,
                url,
            ))
        }
        None => Arc::new(TelegramNotifier::new(
            config.telegram_token.clone(),
            config.telegram_chat_id,
        )),
    };

    let poller = Poller::new(
        client,
        notifier,
        Duration::from_secs(config.poll_interval_secs),
        config.window_mode,
    );
    let state = PollState::new(Utc::now().timestamp());

    info!("Bot started successfully");

    poller.run(state).await;

    Ok(())
}
