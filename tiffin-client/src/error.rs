//! Client error types

use shared::client::ErrorBody;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with an error status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Authentication required
    #[error("{0}")]
    NotAuthenticated(String),

    /// Permission denied
    #[error("{0}")]
    Forbidden(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Request rejected as invalid
    #[error("{0}")]
    Validation(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local session storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

const NOT_AUTHENTICATED: &str = "Not authenticated";

impl ClientError {
    /// Build the error for a non-success response
    ///
    /// Prefers the JSON `message` field, then the raw body, then the status
    /// reason phrase.
    pub fn from_response(status: http::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty() && !text.starts_with('{')).then(|| text.to_string())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        match status {
            http::StatusCode::UNAUTHORIZED => ClientError::NotAuthenticated(message),
            http::StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            http::StatusCode::NOT_FOUND => ClientError::NotFound(message),
            http::StatusCode::BAD_REQUEST | http::StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(message)
            }
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Expected failure: the user simply is not signed in
    pub fn is_not_authenticated(&self) -> bool {
        match self {
            ClientError::NotAuthenticated(_) => true,
            ClientError::Api { message, .. } => message.contains(NOT_AUTHENTICATED),
            _ => false,
        }
    }

    /// Backend-side failure (5xx or a "Server error" message)
    pub fn is_server_error(&self) -> bool {
        match self {
            ClientError::Api { status, message } => {
                *status >= 500 || message.contains("Server error")
            }
            _ => false,
        }
    }

    /// Transport-level failure (connect, timeout)
    pub fn is_network_error(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }

    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::NotAuthenticated(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Validation(_) => Some(400),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message worth showing to a user, or `fallback` when there is none
    pub fn user_message(&self, fallback: &str) -> String {
        let message = match self {
            ClientError::Api { message, .. }
            | ClientError::NotAuthenticated(message)
            | ClientError::Forbidden(message)
            | ClientError::NotFound(message)
            | ClientError::Validation(message) => message.clone(),
            ClientError::Http(e) if e.is_connect() || e.is_timeout() => {
                "Unable to reach the server. Check your connection.".to_string()
            }
            _ => String::new(),
        };
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_json_message_wins() {
        let err = ClientError::from_response(StatusCode::CONFLICT, r#"{"message":"Menu already exists for this date"}"#);
        assert_eq!(err.to_string(), "Menu already exists for this date");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_status_mapping() {
        let err = ClientError::from_response(StatusCode::UNAUTHORIZED, r#"{"message":"Not authenticated"}"#);
        assert!(err.is_not_authenticated());
        assert!(matches!(
            ClientError::from_response(StatusCode::NOT_FOUND, ""),
            ClientError::NotFound(m) if m == "Not Found"
        ));
        assert!(matches!(
            ClientError::from_response(StatusCode::BAD_REQUEST, "bad otp"),
            ClientError::Validation(m) if m == "bad otp"
        ));
    }

    #[test]
    fn test_not_authenticated_in_message() {
        let err = ClientError::Api {
            status: 500,
            message: "Not authenticated".into(),
        };
        assert!(err.is_not_authenticated());
        assert!(err.is_server_error());
    }

    #[test]
    fn test_server_error_classification() {
        let err = ClientError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "{}");
        assert!(err.is_server_error());
        assert_eq!(err.to_string(), "Internal Server Error");
        let err = ClientError::from_response(StatusCode::CONFLICT, "{}");
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ClientError::InvalidResponse("eof".into());
        assert_eq!(err.user_message("Failed to load menus"), "Failed to load menus");
        let err = ClientError::Validation("Invalid OTP".into());
        assert_eq!(err.user_message("Failed to verify OTP"), "Invalid OTP");
    }
}
