//! Outbound request and response shapes used by the API client.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

pub use http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
pub use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A single call issued by a view through the client.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    /// Origin-relative path (`/calendars`) or absolute `http(s)` URL.
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl OutboundRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), headers: HeaderMap::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Replace any existing value for `name`.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Parse and set a header from strings.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Interceptor` if `name` or `value` is not a valid
    /// header.
    pub fn try_header(self, name: &str, value: &str) -> Result<Self, ApiError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::Interceptor(format!("invalid header name {name:?}: {e}")))?;
        let value =
            HeaderValue::from_str(value).map_err(|e| ApiError::Interceptor(format!("invalid value for header {name}: {e}")))?;
        Ok(self.header(name, value))
    }

    /// Header value as text, if present and visible ASCII.
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Serialize` if `value` cannot be encoded.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(value).map_err(|e| ApiError::Serialize(e.to_string()))?;
        Ok(self.body(body))
    }
}

/// Raw backend reply. Status interpretation is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
