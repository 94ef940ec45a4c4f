//! Application context handed to every screen
//!
//! Holds the signed-in [`Session`], the resolved [`Theme`] and the settings
//! file the theme choice is persisted to.

use serde::{Deserialize, Serialize};
use shared::models::User;
use shared::{Theme, ThemeMode};
use tiffin_client::{ClientResult, HttpClient, JsonFileStore, NetworkHttpClient, Session, TiffinClient};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::failure::{Failure, ScreenResult};

/// File name of the persisted settings
pub const SETTINGS_FILE: &str = "settings.json";

/// User preferences that survive a restart
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemeMode,
}

pub struct AppContext<H: HttpClient = NetworkHttpClient> {
    session: Session<H>,
    theme: RwLock<Theme>,
    settings: Option<JsonFileStore>,
}

impl AppContext<NetworkHttpClient> {
    /// Network-backed context with session and settings under the data dir
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let session = Session::from_config(&config.client_config())?;
        let settings = JsonFileStore::new(&config.data_dir, SETTINGS_FILE);
        Ok(Self::new(session, Some(settings), config.default_theme))
    }
}

impl<H: HttpClient> AppContext<H> {
    /// Resolve the theme once: saved setting first, then `default_mode`
    pub fn new(session: Session<H>, settings: Option<JsonFileStore>, default_mode: ThemeMode) -> Self {
        let mode = settings
            .as_ref()
            .and_then(|store| store.load::<Settings>())
            .map(|s| s.theme)
            .unwrap_or(default_mode);
        Self {
            session,
            theme: RwLock::new(Theme::resolve(mode)),
            settings,
        }
    }

    pub fn session(&self) -> &Session<H> {
        &self.session
    }

    pub fn api(&self) -> &TiffinClient<H> {
        self.session.client()
    }

    pub async fn theme(&self) -> Theme {
        *self.theme.read().await
    }

    /// Flip light/dark and persist the choice
    pub async fn toggle_theme(&self) -> ScreenResult<Theme> {
        let theme = {
            let mut guard = self.theme.write().await;
            *guard = guard.toggled();
            *guard
        };
        if let Some(store) = &self.settings {
            store
                .save(&Settings { theme: theme.mode })
                .map_err(|e| Failure::Alert(format!("Failed to save settings: {e}")))?;
        }
        tracing::info!(mode = theme.mode.as_str(), "theme changed");
        Ok(theme)
    }

    /// Signed-in user or a silent failure that sends the user to login
    pub async fn require_user(&self) -> ScreenResult<User> {
        self.session.current_user().await.ok_or(Failure::Silent)
    }

    /// Classify an error raised by a user action
    ///
    /// A not-authenticated answer signs the user out locally.
    pub async fn action_failure(&self, err: tiffin_client::ClientError, fallback: &str) -> Failure {
        self.sign_out_if_rejected(&err).await;
        Failure::from_action(&err, fallback)
    }

    /// Classify an error raised while loading a list
    pub async fn list_failure(&self, err: tiffin_client::ClientError, fallback: &str) -> Failure {
        self.sign_out_if_rejected(&err).await;
        Failure::from_list(&err, fallback)
    }

    async fn sign_out_if_rejected(&self, err: &tiffin_client::ClientError) {
        if err.is_not_authenticated() {
            if let Err(e) = self.session.logout().await {
                tracing::warn!(error = %e, "failed to clear rejected session");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiffin_client::ClientConfig;

    fn session() -> Session {
        let client = TiffinClient::connect(&ClientConfig::default()).unwrap();
        Session::new(client, None)
    }

    #[tokio::test]
    async fn test_default_theme_used_without_settings() {
        let ctx = AppContext::new(session(), None, ThemeMode::Dark);
        assert_eq!(ctx.theme().await.mode, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_toggle_theme_is_persisted() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path(), SETTINGS_FILE);

        let ctx = AppContext::new(session(), Some(store.clone()), ThemeMode::Light);
        let theme = ctx.toggle_theme().await.unwrap();
        assert_eq!(theme.mode, ThemeMode::Dark);

        let reopened = AppContext::new(session(), Some(store), ThemeMode::Light);
        assert_eq!(reopened.theme().await.mode, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_require_user_without_session_is_silent() {
        let ctx = AppContext::new(session(), None, ThemeMode::Light);
        assert_eq!(ctx.require_user().await.unwrap_err(), Failure::Silent);
    }
}
