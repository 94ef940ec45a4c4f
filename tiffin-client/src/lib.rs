//! Tiffin Client - HTTP client for the tiffin backend
//!
//! - [`HttpClient`]: transport trait, implemented over the network
//!   ([`NetworkHttpClient`]) and, with the `in-process` feature, directly
//!   against an axum `Router` ([`InProcessHttpClient`])
//! - [`TiffinClient`]: typed endpoint methods grouped by API area
//! - [`Session`]: the signed-in user, cached and persisted through a
//!   [`JsonFileStore`]

pub mod api;
pub mod config;
pub mod cookies;
pub mod error;
pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;
pub mod session;
pub mod store;

pub use api::TiffinClient;
pub use config::ClientConfig;
pub use cookies::SessionCookieJar;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::InProcessHttpClient;
pub use session::{Session, StoredSession};
pub use store::JsonFileStore;

// Re-export shared types for convenience
pub use shared::client::{AuthResponse, CurrentUserResponse, MessageResponse};
