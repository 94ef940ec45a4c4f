use std::path::PathBuf;

use shared::ThemeMode;
use tiffin_client::ClientConfig;
use tiffin_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Application configuration
///
/// # Environment variables
///
/// Every field can be set from the environment (a `.env` file is loaded
/// first when present):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | TIFFIN_API_URL | http://localhost:3000 | Backend base URL |
/// | TIFFIN_TIMEOUT_SECS | 30 | Request timeout (seconds) |
/// | TIFFIN_DATA_DIR | ./.tiffin | Session and settings directory |
/// | TIFFIN_THEME | light | Theme used until one is saved |
/// | LOG_LEVEL | info | Log level (`RUST_LOG` wins when set) |
/// | LOG_JSON | false | JSON log lines instead of pretty output |
/// | LOG_DIR | - | Directory for daily-rolling log files |
///
/// # Example
///
/// ```ignore
/// TIFFIN_API_URL=https://api.example.com LOG_LEVEL=debug tiffin menus
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend base URL
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Where `session.json` and `settings.json` live
    pub data_dir: PathBuf,
    pub default_theme: ThemeMode,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("TIFFIN_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            timeout_secs: std::env::var("TIFFIN_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            data_dir: std::env::var("TIFFIN_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./.tiffin")),
            default_theme: std::env::var("TIFFIN_THEME")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.trim().is_empty()),
        }
    }

    /// Client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone())
            .with_timeout(self.timeout_secs)
            .with_session_dir(self.data_dir.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: PathBuf::from("./.tiffin"),
            default_theme: ThemeMode::Light,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}
