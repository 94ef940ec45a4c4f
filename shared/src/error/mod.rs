//! Error system shared by the tiffin crates
//!
//! - [`ErrorCode`]: numeric codes grouped by domain
//! - [`ErrorCategory`]: classification derived from the code range
//! - [`AppError`]: code + user-facing message + optional details
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::InvalidQuantity);
//! assert_eq!(err.to_string(), "Quantity must be at least 1");
//!
//! let err = AppError::validation("Mobile number must be at least 10 digits")
//!     .with_detail("field", "mobile");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::AppError;

/// Result alias used by the pure-logic modules
pub type AppResult<T> = Result<T, AppError>;
