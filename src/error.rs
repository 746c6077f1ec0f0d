//! Error types shared by the routing, session, and network layers.
//!
//! ERROR HANDLING
//! ==============
//! `StorageError` never reaches the visitor: session reads recover it as
//! "no credential". `ApiError` is returned to the view that issued the call.
//! `RouteError` only surfaces while building a route table.

use thiserror::Error;

/// Failure reading or writing the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("credential storage is unavailable")]
    Unavailable,
    #[error("credential storage access failed: {0}")]
    Access(String),
}

/// Failure of a call issued through the API client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A pre-send hook rejected the request; nothing was dispatched.
    #[error("request interceptor failed: {0}")]
    Interceptor(String),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("failed to decode response body: {0}")]
    Decode(String),
    #[error("failed to serialize request body: {0}")]
    Serialize(String),
    #[error("network access is not available in this build")]
    Unavailable,
}

/// Invalid route table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
