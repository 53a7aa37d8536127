use log::Level;
use web_sys::window;

const KEY_API_HOST: &str = "debtdesk_api_host";
const KEY_API_PORT: &str = "debtdesk_api_port";
const KEY_API_PATH: &str = "debtdesk_api_path";
const KEY_API_USE_HTTPS: &str = "debtdesk_api_use_https";
const KEY_LOG_LEVEL: &str = "debtdesk_log_level";
const KEY_TOAST_DURATION_MS: &str = "debtdesk_toast_duration_ms";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Backend API port (e.g., 3000)
    pub api_port: u16,

    /// API path prefix (e.g., "/api/v1")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 3000,
            api_path: "/api/v1".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Custom settings are read from localStorage
        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| storage.get_item(key).ok().flatten();

            if let Some(api_host) = read(KEY_API_HOST) {
                settings.api_host = api_host;
            }
            if let Some(port) = read(KEY_API_PORT).and_then(|p| p.parse::<u16>().ok()) {
                settings.api_port = port;
            }
            if let Some(api_path) = read(KEY_API_PATH) {
                settings.api_path = api_path;
            }
            if let Some(use_https) = read(KEY_API_USE_HTTPS) {
                settings.api_use_https = use_https.to_lowercase() == "true";
            }
            if let Some(log_level) = read(KEY_LOG_LEVEL) {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }
            if let Some(duration) = read(KEY_TOAST_DURATION_MS).and_then(|d| d.parse::<u32>().ok()) {
                settings.toast_duration_ms = duration;
            }
        }

        settings
    }

    /// Get the base API URL (protocol + host + port + path prefix)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
