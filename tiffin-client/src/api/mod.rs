//! Typed endpoints of the tiffin backend
//!
//! [`TiffinClient`] wraps any [`HttpClient`]; its methods are split by API
//! area across the submodules.

mod analytics;
mod auth;
mod favorites;
mod menus;
mod orders;

use reqwest::Url;

use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientError, ClientResult};

/// Backend API client
#[derive(Debug, Clone)]
pub struct TiffinClient<H = NetworkHttpClient> {
    http: H,
}

impl TiffinClient<NetworkHttpClient> {
    /// Network client for the configured backend
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(NetworkHttpClient::new(config)?))
    }
}

impl<H: HttpClient> TiffinClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &H {
        &self.http
    }
}

/// Append URL-encoded query parameters to a path
pub(crate) fn with_query(path: &str, params: &[(&str, &str)]) -> ClientResult<String> {
    if params.is_empty() {
        return Ok(path.to_string());
    }
    let url = Url::parse_with_params(&format!("http://backend{}", path), params)
        .map_err(|e| ClientError::Internal(format!("Invalid request path {}: {}", path, e)))?;
    Ok(format!("{}?{}", url.path(), url.query().unwrap_or_default()))
}
