// tiffin-client/src/http.rs
// HTTP client over the network

use crate::cookies::SessionCookieJar;
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// HTTP transport trait
///
/// Paths are relative to the backend root and may carry a query string.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn delete_with_body<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    /// Cookies carrying the login, as a `Cookie` header value
    fn session_cookie(&self) -> Option<String>;
    /// Re-install cookies saved by [`HttpClient::session_cookie`]
    fn restore_session_cookie(&self, cookie: &str);
    /// Forget the login cookies
    fn clear_session_cookie(&self);
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    jar: Arc<SessionCookieJar>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let jar = Arc::new(SessionCookieJar::new());
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .cookie_provider(jar.clone())
            .build()?;
        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
            jar,
        })
    }

    /// Base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let url = response.url().path().to_string();
        if !status.is_success() {
            let text = response.text().await?;
            let err = ClientError::from_response(status, &text);
            if err.is_not_authenticated() {
                tracing::debug!(path = %url, "request not authenticated");
            } else {
                tracing::warn!(path = %url, status = status.as_u16(), error = %err, "request failed");
            }
            return Err(err);
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(method = "GET", path, "request");
        self.send(self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(method = "POST", path, "request");
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(method = "PUT", path, "request");
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(method = "PATCH", path, "request");
        self.send(self.client.patch(self.url(path)).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(method = "DELETE", path, "request");
        self.send(self.client.delete(self.url(path))).await
    }

    async fn delete_with_body<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(method = "DELETE", path, "request");
        self.send(self.client.delete(self.url(path)).json(body)).await
    }

    fn session_cookie(&self) -> Option<String> {
        self.jar.header()
    }

    fn restore_session_cookie(&self, cookie: &str) {
        self.jar.restore(cookie);
    }

    fn clear_session_cookie(&self) {
        self.jar.clear();
    }
}
