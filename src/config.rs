use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use validator::Validate;

use crate::schemas::AppState;
use crate::session::SessionRegistry;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_REMINDER_MESSAGE: &str =
    "Don't forget to call customers every Tuesday and Friday at 11:00 AM!";

/// Environment variables with this prefix override file settings,
/// e.g. `DEBTDESK_MAX_SESSIONS=50`.
const ENV_PREFIX: &str = "DEBTDESK";

/// Effective application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Settings {
    /// Address the HTTP server binds to (IP:PORT)
    #[validate(length(min = 1))]
    pub bind_address: String,
    /// Upper bound on concurrently tracked sessions
    #[validate(range(min = 1))]
    pub max_sessions: u64,
    /// Seconds of inactivity after which a session is discarded
    #[validate(range(min = 1))]
    pub session_idle_secs: u64,
    /// Records older than this many days are flagged overdue
    #[validate(range(min = 0))]
    pub overdue_threshold_days: i64,
    /// ISO 4217 code used for amount display strings
    #[validate(length(equal = 3))]
    pub currency: String,
    pub reminder_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            max_sessions: 1000,
            session_idle_secs: 3600,
            overdue_threshold_days: 30,
            currency: common::DEFAULT_CURRENCY.to_string(),
            reminder_message: DEFAULT_REMINDER_MESSAGE.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from defaults, an optional config file and the
    /// environment, in that order of precedence.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("max_sessions", defaults.max_sessions)?
            .set_default("session_idle_secs", defaults.session_idle_secs)?
            .set_default("overdue_threshold_days", defaults.overdue_threshold_days)?
            .set_default("currency", defaults.currency)?
            .set_default("reminder_message", defaults.reminder_message)?;

        if let Some(path) = config_file {
            debug!("Reading configuration file {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        settings.validate()?;

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}

/// Initialize application state from settings
pub fn initialize_app_state(settings: Settings) -> AppState {
    info!(
        "Tracking up to {} session(s), idle timeout {}s",
        settings.max_sessions, settings.session_idle_secs
    );
    let sessions = SessionRegistry::new(settings.max_sessions, settings.session_idle());

    AppState::new(sessions, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bind_address, "0.0.0.0:3000");
        assert_eq!(settings.overdue_threshold_days, 30);
        assert_eq!(settings.currency, "USD");
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("debtdesk-test-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "overdue_threshold_days = 45").unwrap();
        writeln!(file, "currency = \"EUR\"").unwrap();
        drop(file);

        let settings = Settings::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.overdue_threshold_days, 45);
        assert_eq!(settings.currency, "EUR");
        assert_eq!(settings.max_sessions, 1000);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let path = Path::new("/nonexistent/debtdesk.toml");
        assert!(Settings::load(Some(path)).is_err());
    }

    #[test]
    fn test_invalid_settings_fail_validation() {
        let settings = Settings {
            max_sessions: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
