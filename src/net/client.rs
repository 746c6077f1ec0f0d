//! Shared, authenticated API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! One client is built at startup and handed to every view through Leptos
//! context. Each call runs the pre-send pipeline (default headers, stored
//! credential, extra hooks) and only then reaches the transport.
//!
//! ERROR HANDLING
//! ==============
//! Interceptor failures are returned before anything is sent. Responses are
//! passed through untouched; status handling belongs to the calling view.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::pipeline::{self, RequestHook};
use super::request::{ApiResponse, Method, OutboundRequest};
use super::transport::Transport;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::state::session::Session;

#[derive(Clone)]
struct Inner {
    config: ClientConfig,
    hooks: Vec<RequestHook>,
    transport: Arc<dyn Transport + Send + Sync>,
}

/// Cheap-to-clone handle; clones share configuration and transport.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.inner.config)
            .field("hooks", &self.inner.hooks.len())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Session, transport: Arc<dyn Transport + Send + Sync>) -> Self {
        let hooks = vec![pipeline::default_headers(), pipeline::attach_credential(session, config.auth_header.clone())];
        Self { inner: Arc::new(Inner { config, hooks, transport }) }
    }

    /// Append a hook that runs after the default headers and credential.
    #[must_use]
    pub fn with_hook(mut self, hook: RequestHook) -> Self {
        Arc::make_mut(&mut self.inner).hooks.push(hook);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Run the pre-send pipeline without dispatching.
    ///
    /// # Errors
    ///
    /// Returns the first hook failure, or `ApiError::Interceptor` for a
    /// malformed request.
    pub fn prepare(&self, mut request: OutboundRequest) -> Result<OutboundRequest, ApiError> {
        pipeline::run(&self.inner.hooks, &mut request)?;
        Ok(request)
    }

    /// Prepare and dispatch `request`.
    ///
    /// # Errors
    ///
    /// Returns interceptor errors before dispatch, or the transport's error.
    pub async fn send(&self, request: OutboundRequest) -> Result<ApiResponse, ApiError> {
        let request = self.prepare(request)?;
        let url = self.inner.config.url_for(&request.path);
        log::debug!("api: {} {}", request.method, request.path);
        self.inner.transport.dispatch(url, request).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(OutboundRequest::get(path)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(OutboundRequest::delete(path)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Serialize` if `body` cannot be encoded, otherwise
    /// see [`ApiClient::send`].
    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<ApiResponse, ApiError> {
        self.send(OutboundRequest::new(Method::POST, path).json(body)?).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Serialize` if `body` cannot be encoded, otherwise
    /// see [`ApiClient::send`].
    pub async fn put_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<ApiResponse, ApiError> {
        self.send(OutboundRequest::new(Method::PUT, path).json(body)?).await
    }
}
