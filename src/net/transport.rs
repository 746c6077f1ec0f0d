//! Network dispatch behind the API client.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Other builds: `OfflineTransport` fails every call, since the backend is
//! only reachable from the browser bundle.

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::request::{ApiResponse, OutboundRequest};
use crate::error::ApiError;

/// Sends a fully prepared request to `url`.
///
/// Futures are not required to be `Send`; the browser runs everything on one
/// thread.
pub trait Transport {
    fn dispatch(&self, url: String, request: OutboundRequest) -> LocalBoxFuture<'static, Result<ApiResponse, ApiError>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    fn dispatch(&self, url: String, _request: OutboundRequest) -> LocalBoxFuture<'static, Result<ApiResponse, ApiError>> {
        log::debug!("api: dropping request to {url}, no network in this build");
        futures::future::ready(Err(ApiError::Unavailable)).boxed_local()
    }
}

#[cfg(feature = "csr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
impl Transport for GlooTransport {
    fn dispatch(&self, url: String, request: OutboundRequest) -> LocalBoxFuture<'static, Result<ApiResponse, ApiError>> {
        use gloo_net::http::RequestBuilder;

        async move {
            let mut builder = RequestBuilder::new(&url).method(request.method);
            for (name, value) in &request.headers {
                let value = value.to_str().map_err(|e| ApiError::Network(format!("header {name}: {e}")))?;
                builder = builder.header(name.as_str(), value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        .boxed_local()
    }
}
