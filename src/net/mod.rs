//! Networking modules for backend HTTP calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` is the single path views use to talk to the backend, `pipeline`
//! holds its pre-send hooks, `request` defines the request/response shapes,
//! and `transport` performs the actual dispatch.

pub mod client;
pub mod pipeline;
pub mod request;
pub mod transport;

pub use client::ApiClient;
pub use request::{ApiResponse, Method, OutboundRequest};
