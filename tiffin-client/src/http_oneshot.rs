// tiffin-client/src/http_oneshot.rs
// In-process HTTP client - calls an axum Router directly
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;

use crate::cookies::SessionCookieJar;
use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

/// In-process HTTP client
///
/// Sends each request through the `Router` with Tower's `oneshot`, keeping
/// cookies in a [`SessionCookieJar`] the same way the network client does.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use tiffin_client::{InProcessHttpClient, TiffinClient};
///
/// let router: Router = fake_backend();
/// let client = TiffinClient::new(InProcessHttpClient::new(router));
/// let menus = client.list_menus().await?;
/// ```
#[derive(Debug, Clone)]
pub struct InProcessHttpClient {
    router: Router,
    jar: Arc<SessionCookieJar>,
}

impl InProcessHttpClient {
    /// # Arguments
    /// * `router` - Router with its state already applied
    pub fn new(router: Router) -> Self {
        Self {
            router,
            jar: Arc::new(SessionCookieJar::new()),
        }
    }

    fn uri(path: &str) -> String {
        format!("/{}", path.trim_start_matches('/'))
    }

    fn build_request(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(Self::uri(path));
        if let Some(cookie) = self.jar.header() {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match body {
            Some(bytes) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn build_request_with_body<B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let bytes = serde_json::to_vec(body)?;
        self.build_request(method, path, Some(bytes))
    }

    /// Execute the request and decode the response
    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let path = request.uri().path().to_string();
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("In-process call failed: {}", e)))?;

        for value in response.headers().get_all(header::SET_COOKIE) {
            if let Ok(value) = value.to_str() {
                self.jar.store_set_cookie(value);
            }
        }

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes);
            let err = ClientError::from_response(status, &text);
            tracing::debug!(path = %path, status = status.as_u16(), error = %err, "in-process request failed");
            return Err(err);
        }

        serde_json::from_slice(&body_bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl HttpClient for InProcessHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, None)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::PATCH, path, body)?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, path, None)?;
        self.execute(request).await
    }

    async fn delete_with_body<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::DELETE, path, body)?;
        self.execute(request).await
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

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::http::HeaderMap;
    use axum::routing::get;
    use serde_json::{Value, json};

    fn router() -> Router {
        Router::new()
            .route(
                "/login",
                get(|| async {
                    (
                        [(header::SET_COOKIE, "token=t1; Path=/; HttpOnly")],
                        Json(json!({"ok": true})),
                    )
                }),
            )
            .route(
                "/echo-cookie",
                get(|headers: HeaderMap| async move {
                    let cookie = headers
                        .get(header::COOKIE)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    Json(json!({ "cookie": cookie }))
                }),
            )
    }

    #[tokio::test]
    async fn test_cookies_flow_between_requests() {
        let client = InProcessHttpClient::new(router());
        let _: Value = client.get("/login").await.unwrap();
        assert_eq!(client.session_cookie().as_deref(), Some("token=t1"));

        let echoed: Value = client.get("echo-cookie").await.unwrap();
        assert_eq!(echoed["cookie"], "token=t1");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let client = InProcessHttpClient::new(router());
        let err = client.get::<Value>("/missing").await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }
}
