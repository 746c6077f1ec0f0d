//! Pre-send hook pipeline run on every outbound request.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hooks run in order before dispatch: default headers first, then the stored
//! credential, then any caller-registered hooks. The finished request is
//! validated once more so a hook can never hand the transport a malformed
//! request.
//!
//! ERROR HANDLING
//! ==============
//! The first failing hook stops the pipeline. Its error is returned to the
//! caller as `ApiError::Interceptor` and nothing is sent.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::sync::Arc;

use http::Uri;

use super::request::{CONTENT_TYPE, HeaderName, HeaderValue, OutboundRequest};
use crate::error::ApiError;
use crate::state::session::Session;

pub const APPLICATION_JSON: &str = "application/json";

/// A transform applied to a request before it leaves the client.
pub type RequestHook = Arc<dyn Fn(&mut OutboundRequest) -> Result<(), ApiError> + Send + Sync>;

/// Preset `Content-Type: application/json` unless the caller chose one.
pub fn default_headers() -> RequestHook {
    Arc::new(|request: &mut OutboundRequest| -> Result<(), ApiError> {
        request.headers.entry(CONTENT_TYPE).or_insert(HeaderValue::from_static(APPLICATION_JSON));
        Ok(())
    })
}

/// Attach the stored credential as `header`, read at send time.
///
/// Without a stored credential the header is stripped, so a request never
/// claims a session that does not exist. The backend decides whether such a
/// call is allowed.
pub fn attach_credential(session: Session, header: HeaderName) -> RequestHook {
    Arc::new(move |request: &mut OutboundRequest| -> Result<(), ApiError> {
        let Some(credential) = session.credential() else {
            request.headers.remove(&header);
            return Ok(());
        };
        let mut value = HeaderValue::from_str(credential.as_str())
            .map_err(|e| ApiError::Interceptor(format!("stored credential is not a valid {header} value: {e}")))?;
        value.set_sensitive(true);
        request.headers.insert(header.clone(), value);
        Ok(())
    })
}

/// Run `hooks` in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the failing hook's error, or `ApiError::Interceptor` if the
/// resulting request is malformed.
pub fn run(hooks: &[RequestHook], request: &mut OutboundRequest) -> Result<(), ApiError> {
    for hook in hooks {
        hook(&mut *request)?;
    }
    validate(request)
}

/// Reject requests a browser `fetch` would refuse or misinterpret.
///
/// The target must be an origin-relative path or an absolute `http(s)` URL,
/// and every header value must be representable as a JS string.
///
/// # Errors
///
/// Returns `ApiError::Interceptor` describing the first problem found.
pub fn validate(request: &OutboundRequest) -> Result<(), ApiError> {
    let uri: Uri = request
        .path
        .parse()
        .map_err(|e| ApiError::Interceptor(format!("invalid request target {:?}: {e}", request.path)))?;
    let target_ok = match uri.scheme_str() {
        Some("http" | "https") => uri.authority().is_some(),
        Some(_) => false,
        None => request.path.starts_with('/'),
    };
    if !target_ok {
        return Err(ApiError::Interceptor(format!(
            "request target must be a '/' path or an http(s) URL: {:?}",
            request.path
        )));
    }
    for (name, value) in &request.headers {
        if value.to_str().is_err() {
            return Err(ApiError::Interceptor(format!("value for header {name} is not visible ASCII")));
        }
    }
    Ok(())
}
