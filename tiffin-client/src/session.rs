//! Signed-in user context
//!
//! A [`Session`] is created once at the application root and passed to every
//! screen. It caches the current user, persists it together with the login
//! cookie, and offers one authoritative refresh from the backend.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::client::VerifyOtpRequest;
use shared::models::User;
use tokio::sync::RwLock;

use crate::api::TiffinClient;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::store::JsonFileStore;
use crate::{ClientConfig, ClientError, ClientResult};

/// File name of the persisted session
pub const SESSION_FILE: &str = "session.json";

/// What survives a restart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    #[serde(default)]
    pub user: Option<User>,
    /// `Cookie` header value
    #[serde(default)]
    pub cookie: Option<String>,
    /// Unix millis of the last save
    #[serde(default)]
    pub saved_at: i64,
}

pub struct Session<H: HttpClient = NetworkHttpClient> {
    client: TiffinClient<H>,
    store: Option<JsonFileStore>,
    user: RwLock<Option<User>>,
}

impl Session<NetworkHttpClient> {
    /// Network session; persisted when the config names a session directory
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let client = TiffinClient::connect(config)?;
        let store = config
            .session_dir
            .as_ref()
            .map(|dir| JsonFileStore::new(dir, SESSION_FILE));
        Ok(Self::new(client, store))
    }
}

impl<H: HttpClient> Session<H> {
    pub fn new(client: TiffinClient<H>, store: Option<JsonFileStore>) -> Self {
        Self {
            client,
            store,
            user: RwLock::new(None),
        }
    }

    pub fn client(&self) -> &TiffinClient<H> {
        &self.client
    }

    /// Reload the persisted user and cookie
    pub async fn restore(&self) -> Option<User> {
        let stored: StoredSession = self.store.as_ref()?.load()?;
        if let Some(cookie) = stored.cookie.as_deref() {
            self.client.http().restore_session_cookie(cookie);
        }
        *self.user.write().await = stored.user.clone();
        tracing::debug!(restored = stored.user.is_some(), "session restored");
        stored.user
    }

    /// Cached user, without a round trip
    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    /// Cached user or a not-authenticated error
    pub async fn require_user(&self) -> ClientResult<User> {
        self.current_user()
            .await
            .ok_or_else(|| ClientError::NotAuthenticated("Not authenticated".to_string()))
    }

    /// Fetch the user from the backend and cache it
    ///
    /// A not-authenticated answer clears the session and yields `None`. Any
    /// other failure keeps the cached user.
    pub async fn refresh_user(&self) -> ClientResult<Option<User>> {
        match self.client.current_user().await {
            Ok(user) => {
                self.sign_in(user.clone()).await?;
                Ok(Some(user))
            }
            Err(e) if e.is_not_authenticated() => {
                self.clear().await?;
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not refresh user, keeping cached copy");
                Ok(self.current_user().await)
            }
        }
    }

    /// Cache and persist a user returned by the backend
    pub async fn sign_in(&self, user: User) -> ClientResult<()> {
        *self.user.write().await = Some(user);
        self.persist().await
    }

    async fn persist(&self) -> ClientResult<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        let stored = StoredSession {
            user: self.current_user().await,
            cookie: self.client.http().session_cookie(),
            saved_at: Utc::now().timestamp_millis(),
        };
        store.save(&stored)?;
        Ok(())
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<User> {
        let resp = self.client.login(email, password).await?;
        let user = resp
            .user
            .ok_or_else(|| ClientError::InvalidResponse("login response has no user".to_string()))?;
        self.sign_in(user.clone()).await?;
        tracing::info!(user_id = %user.id, role = ?user.role, "logged in");
        Ok(user)
    }

    /// Verify an OTP and sign in the returned (or freshly fetched) user
    pub async fn verify_otp(&self, req: &VerifyOtpRequest) -> ClientResult<Option<User>> {
        let resp = self.client.verify_otp(req).await?;
        match resp.user {
            Some(user) => {
                self.sign_in(user.clone()).await?;
                tracing::info!(user_id = %user.id, "otp verified");
                Ok(Some(user))
            }
            None => self.refresh_user().await,
        }
    }

    /// Forget the user locally; the backend is not contacted
    pub async fn logout(&self) -> ClientResult<()> {
        self.clear().await?;
        tracing::info!("logged out");
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        *self.user.write().await = None;
        self.client.http().clear_session_cookie();
        if let Some(store) = &self.store {
            store.delete()?;
        }
        Ok(())
    }
}
