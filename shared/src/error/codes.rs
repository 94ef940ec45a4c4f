//! Error codes for the tiffin client
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Menu errors
//! - 4xxx: Order errors
//! - 5xxx: Provider and favorite errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum
///
/// Serialized as a plain u16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// OTP is malformed or rejected
    InvalidOtp = 1003,
    /// Password does not meet strength rules
    WeakPassword = 1004,
    /// Password confirmation does not match
    PasswordMismatch = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Provider role required
    ProviderRequired = 2002,

    // ==================== 3xxx: Menu ====================
    /// Menu not found
    MenuNotFound = 3001,
    /// Menu has no sabjis to choose from
    MenuHasNoSabjis = 3002,
    /// Menu price is missing or not positive
    InvalidPrice = 3003,
    /// Menu date is missing or malformed
    InvalidMenuDate = 3004,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no items
    OrderEmpty = 4002,
    /// Quantity must be at least one
    InvalidQuantity = 4003,
    /// Sabji selection missing or not offered by the menu
    InvalidSabji = 4004,
    /// Status change not allowed from the current status
    InvalidStatusTransition = 4005,
    /// Order can no longer be cancelled
    OrderNotCancellable = 4006,
    /// The last item of an order cannot be removed
    LastItem = 4007,

    // ==================== 5xxx: Provider ====================
    /// Provider not found
    ProviderNotFound = 5001,
    /// Provider already marked as favorite
    AlreadyFavorite = 5002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Request timed out
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Local storage failure
    StorageError = 9401,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            ErrorCode::NotAuthenticated => "Not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::InvalidOtp => "Please enter the complete OTP",
            ErrorCode::WeakPassword => "Password is too weak",
            ErrorCode::PasswordMismatch => "Passwords do not match",

            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::ProviderRequired => "Provider account required",

            ErrorCode::MenuNotFound => "Menu not found",
            ErrorCode::MenuHasNoSabjis => "This menu has no sabjis available",
            ErrorCode::InvalidPrice => "Prices must be greater than 0",
            ErrorCode::InvalidMenuDate => "Menu date is invalid",

            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Please add at least one item to your order",
            ErrorCode::InvalidQuantity => "Quantity must be at least 1",
            ErrorCode::InvalidSabji => "Please select a sabji for all items",
            ErrorCode::InvalidStatusTransition => "Status change not allowed",
            ErrorCode::OrderNotCancellable => "Only pending orders can be cancelled",
            ErrorCode::LastItem => "An order needs at least one item",

            ErrorCode::ProviderNotFound => "Provider not found",
            ErrorCode::AlreadyFavorite => "Provider is already a favorite",

            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Request timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageError => "Local storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::InvalidOtp),
            1004 => Ok(ErrorCode::WeakPassword),
            1005 => Ok(ErrorCode::PasswordMismatch),

            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::ProviderRequired),

            3001 => Ok(ErrorCode::MenuNotFound),
            3002 => Ok(ErrorCode::MenuHasNoSabjis),
            3003 => Ok(ErrorCode::InvalidPrice),
            3004 => Ok(ErrorCode::InvalidMenuDate),

            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),
            4003 => Ok(ErrorCode::InvalidQuantity),
            4004 => Ok(ErrorCode::InvalidSabji),
            4005 => Ok(ErrorCode::InvalidStatusTransition),
            4006 => Ok(ErrorCode::OrderNotCancellable),
            4007 => Ok(ErrorCode::LastItem),

            5001 => Ok(ErrorCode::ProviderNotFound),
            5002 => Ok(ErrorCode::AlreadyFavorite),

            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9401 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::NotAuthenticated));
        assert_eq!(ErrorCode::try_from(4005), Ok(ErrorCode::InvalidStatusTransition));
        assert_eq!(ErrorCode::try_from(9401), Ok(ErrorCode::StorageError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(3999), Err(InvalidErrorCode(3999)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::InvalidSabji).unwrap();
        assert_eq!(json, "4004");
        let code: ErrorCode = serde_json::from_str("3003").unwrap();
        assert_eq!(code, ErrorCode::InvalidPrice);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(ErrorCode::OrderNotCancellable.to_string(), "4006");
        assert_eq!(
            ErrorCode::OrderNotCancellable.message(),
            "Only pending orders can be cancelled"
        );
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
    }
}
