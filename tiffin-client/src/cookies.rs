//! Session cookie jar
//!
//! The backend keeps the login in a cookie. This jar holds name/value pairs
//! for a single backend, can be serialized into a `Cookie` header for
//! persistence and restored from one, and is cleared on logout.

use cookie::Cookie;
use reqwest::Url;
use reqwest::cookie::CookieStore;
use reqwest::header::HeaderValue;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct SessionCookieJar {
    cookies: RwLock<BTreeMap<String, String>>,
}

impl SessionCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, String>> {
        self.cookies.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.cookies.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Apply one `Set-Cookie` header; empty or expired cookies are removed
    pub fn store_set_cookie(&self, header: &str) {
        let cookie = match Cookie::parse(header) {
            Ok(cookie) => cookie,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed Set-Cookie");
                return;
            }
        };

        let mut jar = self.write();
        if is_removal(&cookie) {
            jar.remove(cookie.name());
        } else {
            jar.insert(cookie.name().to_string(), cookie.value().to_string());
        }
    }

    /// `Cookie` header value for outgoing requests
    pub fn header(&self) -> Option<String> {
        let jar = self.read();
        if jar.is_empty() {
            return None;
        }
        Some(
            jar.iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Load cookies from a previously saved `Cookie` header
    pub fn restore(&self, header: &str) {
        let mut jar = self.write();
        for cookie in Cookie::split_parse(header).flatten() {
            jar.insert(cookie.name().to_string(), cookie.value().to_string());
        }
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

/// Empty value, non-positive `Max-Age`, or an `Expires` in the past
///
/// `Max-Age` wins over `Expires` when both are present.
fn is_removal(cookie: &Cookie<'_>) -> bool {
    if cookie.value().is_empty() {
        return true;
    }
    if let Some(max_age) = cookie.max_age() {
        return max_age.whole_seconds() <= 0;
    }
    cookie
        .expires_datetime()
        .is_some_and(|at| at.unix_timestamp() <= chrono::Utc::now().timestamp())
}

impl CookieStore for SessionCookieJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, _url: &Url) {
        for header in cookie_headers {
            if let Ok(value) = header.to_str() {
                self.store_set_cookie(value);
            }
        }
    }

    fn cookies(&self, _url: &Url) -> Option<HeaderValue> {
        self.header().and_then(|h| HeaderValue::from_str(&h).ok())
    }
}
