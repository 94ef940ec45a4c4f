//! How a screen reacts to an error
//!
//! Not every failure reaches the user. A rejected session sends them back to
//! login without a message, and a broken list simply renders empty.

use shared::AppError;
use tiffin_client::{ClientError, ClientResult};
use thiserror::Error;

/// Outcome of a failed screen operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// Handled without a message
    #[error("silent failure")]
    Silent,
    /// Message to surface to the user
    #[error("{0}")]
    Alert(String),
}

pub type ScreenResult<T> = Result<T, Failure>;

impl Failure {
    /// Error raised by something the user did (submit, delete, toggle)
    pub fn from_action(err: &ClientError, fallback: &str) -> Self {
        if err.is_not_authenticated() {
            return Failure::Silent;
        }
        Failure::Alert(err.user_message(fallback))
    }

    /// Error raised while loading a list; server failures show an empty list
    pub fn from_list(err: &ClientError, fallback: &str) -> Self {
        if err.is_server_error() {
            tracing::warn!(error = %err, "list unavailable, showing empty state");
            return Failure::Silent;
        }
        Self::from_action(err, fallback)
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, Failure::Silent)
    }

    /// Message to show, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Failure::Silent => None,
            Failure::Alert(message) => Some(message),
        }
    }
}

impl From<AppError> for Failure {
    fn from(err: AppError) -> Self {
        Failure::Alert(err.message)
    }
}

/// One independently loaded value of a dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn from_result(result: ClientResult<T>, fallback: &str) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(e) => {
                tracing::warn!(error = %e, "{fallback}");
                Loadable::Failed(e.user_message(fallback))
            }
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            Loadable::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Loaded(_) => None,
            Loadable::Failed(message) => Some(message),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Loadable::Loaded(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Loadable::Loaded(value) => Loadable::Loaded(f(value)),
            Loadable::Failed(message) => Loadable::Failed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_not_authenticated_is_silent() {
        let err = ClientError::NotAuthenticated("Not authenticated".into());
        assert_eq!(Failure::from_action(&err, "Failed"), Failure::Silent);
        assert_eq!(Failure::from_list(&err, "Failed"), Failure::Silent);
    }

    #[test]
    fn test_server_error_silent_only_for_lists() {
        let err = ClientError::Api { status: 500, message: "Server error".into() };
        assert_eq!(Failure::from_list(&err, "Failed to load orders"), Failure::Silent);
        assert_eq!(
            Failure::from_action(&err, "Failed to place order"),
            Failure::Alert("Server error".into())
        );
    }

    #[test]
    fn test_empty_message_uses_fallback() {
        let err = ClientError::Validation(String::new());
        assert_eq!(
            Failure::from_action(&err, "Failed to update favorite").message(),
            Some("Failed to update favorite")
        );
    }

    #[test]
    fn test_app_error_becomes_alert() {
        let failure: Failure = AppError::new(ErrorCode::InvalidOtp).into();
        assert_eq!(failure.message(), Some("Please enter the complete OTP"));
    }

    #[test]
    fn test_loadable_keeps_error_message() {
        let failed: Loadable<u32> = Loadable::from_result(
            Err(ClientError::NotFound("No analytics yet".into())),
            "Failed to load summary",
        );
        assert!(!failed.is_loaded());
        assert_eq!(failed.error(), Some("No analytics yet"));

        let loaded = Loadable::from_result(Ok(3u32), "unused").map(|v| v * 2);
        assert_eq!(loaded.value(), Some(&6));
    }
}
