//! Bot config: credentials, endpoint, poll interval, window mode. Loaded from env.

use anyhow::{bail, Context, Result};
use std::env;

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// How the `from_date` window parameter behaves across iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    /// Captured once at startup and reused for every poll.
    Fixed,
    /// Moved to the server's `current_date` after each validated response.
    Advancing,
}

impl std::str::FromStr for WindowMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fixed" => Ok(WindowMode::Fixed),
            "advancing" => Ok(WindowMode::Advancing),
            other => bail!(
                "POLL_WINDOW_MODE must be `fixed` or `advancing`, got `{}`",
                other
            ),
        }
    }
}

/// Homework bot configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// PRACTICUM_TOKEN: OAuth token for the homework status endpoint.
    pub practicum_token: String,
    /// TELEGRAM_TOKEN: Telegram bot token.
    pub telegram_token: String,
    /// TELEGRAM_CHAT_ID: destination chat for notifications.
    pub telegram_chat_id: i64,
    /// HOMEWORK_API_URL override, or the production endpoint.
    pub endpoint: String,
    /// Optional Telegram Bot API base URL (tests point this at a mock server).
    pub telegram_api_url: Option<String>,
    /// Seconds to sleep between poll iterations.
    pub poll_interval_secs: u64,
    /// POLL_WINDOW_MODE: `fixed` (default) or `advancing`.
    pub window_mode: WindowMode,
    /// Log file path; log lines are mirrored to stdout.
    pub log_file: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_TOKEN if
    /// provided. Any missing credential is an error; the binary turns it into
    /// a non-zero exit before the loop starts.
    pub fn load(token: Option<String>) -> Result<Self> {
        let practicum_token = env::var("PRACTICUM_TOKEN").context("PRACTICUM_TOKEN is not set")?;
        let telegram_token = match token {
            Some(t) => t,
            None => env::var("TELEGRAM_TOKEN").context("TELEGRAM_TOKEN is not set")?,
        };
        let telegram_chat_id = env::var("TELEGRAM_CHAT_ID")
            .context("TELEGRAM_CHAT_ID is not set")?
            .parse()
            .context("TELEGRAM_CHAT_ID is not a valid chat id")?;
        let endpoint =
            env::var("HOMEWORK_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL").ok();
        let poll_interval_secs = env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
        let window_mode = env::var("POLL_WINDOW_MODE")
            .unwrap_or_else(|_| "fixed".to_string())
            .parse()?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/hwbot.log".to_string());

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            telegram_api_url,
            poll_interval_secs,
            window_mode,
            log_file,
        })
    }

    /// Validate config: credentials non-empty, URLs well-formed.
    pub fn validate(&self) -> Result<()> {
        if self.practicum_token.is_empty() {
            bail!("PRACTICUM_TOKEN is empty");
        }
        if self.telegram_token.is_empty() {
            bail!("TELEGRAM_TOKEN is empty");
        }
        if reqwest::Url::parse(&self.endpoint).is_err() {
            bail!("HOMEWORK_API_URL is not a valid URL: {}", self.endpoint);
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                bail!(
                    "TELEGRAM_API_URL is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required_vars() {
        env::set_var("PRACTICUM_TOKEN", "practicum_token");
        env::set_var("TELEGRAM_TOKEN", "telegram_token");
        env::set_var("TELEGRAM_CHAT_ID", "123456");
    }

    fn clear_optional_vars() {
        env::remove_var("HOMEWORK_API_URL");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("POLL_INTERVAL_SECS");
        env::remove_var("POLL_WINDOW_MODE");
        env::remove_var("LOG_FILE");
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        set_required_vars();
        clear_optional_vars();

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.practicum_token, "practicum_token");
        assert_eq!(config.telegram_token, "telegram_token");
        assert_eq!(config.telegram_chat_id, 123456);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.poll_interval_secs, 600);
        assert_eq!(config.window_mode, WindowMode::Fixed);
        assert_eq!(config.log_file, "logs/hwbot.log");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        set_required_vars();
        clear_optional_vars();
        env::set_var("HOMEWORK_API_URL", "http://127.0.0.1:8080/statuses");
        env::set_var("POLL_INTERVAL_SECS", "30");
        env::set_var("POLL_WINDOW_MODE", "advancing");
        env::set_var("LOG_FILE", "/tmp/hwbot-test.log");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.endpoint, "http://127.0.0.1:8080/statuses");
        assert_eq!(config.poll_interval_secs, 30);
        assert_eq!(config.window_mode, WindowMode::Advancing);
        assert_eq!(config.log_file, "/tmp/hwbot-test.log");

        clear_optional_vars();
    }

    #[test]
    #[serial]
    fn test_load_config_missing_practicum_token() {
        set_required_vars();
        clear_optional_vars();
        env::remove_var("PRACTICUM_TOKEN");

        let result = BotConfig::load(None);

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("PRACTICUM_TOKEN"));
    }

    #[test]
    #[serial]
    fn test_load_config_missing_chat_id() {
        set_required_vars();
        clear_optional_vars();
        env::remove_var("TELEGRAM_CHAT_ID");

        assert!(BotConfig::load(None).is_err());
    }

    #[test]
    #[serial]
    fn test_load_config_non_numeric_chat_id() {
        set_required_vars();
        clear_optional_vars();
        env::set_var("TELEGRAM_CHAT_ID", "not-a-number");

        assert!(BotConfig::load(None).is_err());

        env::set_var("TELEGRAM_CHAT_ID", "123456");
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        set_required_vars();
        clear_optional_vars();

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.telegram_token, "override_token");
    }

    #[test]
    #[serial]
    fn test_load_config_rejects_unknown_window_mode() {
        set_required_vars();
        clear_optional_vars();
        env::set_var("POLL_WINDOW_MODE", "sliding");

        assert!(BotConfig::load(None).is_err());

        env::remove_var("POLL_WINDOW_MODE");
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_telegram_api_url() {
        set_required_vars();
        clear_optional_vars();
        env::set_var("TELEGRAM_API_URL", "not a url");

        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_err());

        env::remove_var("TELEGRAM_API_URL");
    }
}
