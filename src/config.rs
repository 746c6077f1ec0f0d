//! Client configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so overrides are baked in by the
//! compiler through `option_env!` when the bundle is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use http::HeaderName;

pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_AUTH_HEADER: HeaderName = HeaderName::from_static("x-auth-token");
pub const SIGNIN_PATH: &str = "/signin";
pub const HOME_PATH: &str = "/home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined to every request path. Empty means the page origin.
    pub api_base_url: String,
    /// Storage key the credential lives under.
    pub token_key: String,
    /// Header the credential is attached as.
    pub auth_header: HeaderName,
    pub signin_path: String,
    pub home_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            auth_header: DEFAULT_AUTH_HEADER,
            signin_path: SIGNIN_PATH.to_owned(),
            home_path: HOME_PATH.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `CALENDAR_API_BASE_URL`: backend origin, default is the page origin
    pub fn from_build_env() -> Self {
        Self::from_base_url(option_env!("CALENDAR_API_BASE_URL"))
    }

    pub(crate) fn from_base_url(raw: Option<&str>) -> Self {
        Self { api_base_url: raw.map(normalize_base_url).unwrap_or_default(), ..Self::default() }
    }

    /// Join the configured base URL with an origin-relative path. Absolute
    /// URLs are used as given.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') { format!("{}{path}", self.api_base_url) } else { path.to_owned() }
    }
}

/// Trim whitespace and trailing slashes so paths can be appended directly.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
