//! Path pattern parsing and segment matching.
//!
//! Patterns are `/`-separated. A segment starting with `:` captures exactly
//! one URL segment under that name. Static segments compare ASCII
//! case-insensitively. Empty segments are ignored on both sides, so trailing
//! slashes never change the outcome.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use crate::error::RouteError;

/// Restriction on the values a parameter segment accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamRule {
    #[default]
    Any,
    /// One or more ASCII digits.
    Digits,
    /// A backend record id: either all digits, or a 24-character hex object
    /// id such as `5f8d0d55b54764421b7156c9`.
    RecordId,
}

/// Length of a hex-encoded 12-byte object id.
pub const OBJECT_ID_LEN: usize = 24;

impl ParamRule {
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Any => !value.is_empty(),
            Self::Digits => !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()),
            Self::RecordId => {
                Self::Digits.accepts(value)
                    || (value.len() == OBJECT_ID_LEN && value.bytes().all(|b| b.is_ascii_hexdigit()))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param { name: String, rule: ParamRule },
}

/// Parameters captured by a successful match, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Compiled form of a route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern such as `/home` or `/:calendarId`.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::InvalidPattern` when the pattern does not start
    /// with `/`, names a parameter twice, or has an empty parameter name.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern { pattern: raw.to_owned(), reason: reason.to_owned() };

        if !raw.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let mut segments = Vec::new();
        for part in raw.split('/').filter(|s| !s.is_empty()) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("empty parameter name"));
                }
                let duplicate = segments
                    .iter()
                    .any(|seg| matches!(seg, Segment::Param { name: existing, .. } if existing == name));
                if duplicate {
                    return Err(invalid("parameter named twice"));
                }
                segments.push(Segment::Param { name: name.to_owned(), rule: ParamRule::Any });
            } else {
                segments.push(Segment::Static(part.to_owned()));
            }
        }

        Ok(Self { raw: raw.to_owned(), segments })
    }

    /// Attach a value rule to the parameter called `name`.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::InvalidPattern` if the pattern has no such
    /// parameter.
    pub fn constrain(&mut self, name: &str, rule: ParamRule) -> Result<(), RouteError> {
        for seg in &mut self.segments {
            if let Segment::Param { name: existing, rule: slot } = seg {
                if existing == name {
                    *slot = rule;
                    return Ok(());
                }
            }
        }
        Err(RouteError::InvalidPattern { pattern: self.raw.clone(), reason: format!("no parameter named {name:?}") })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Normalized identity used for duplicate detection.
    pub(crate) fn key(&self) -> String {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|seg| match seg {
                Segment::Static(s) => s.to_ascii_lowercase(),
                Segment::Param { name, .. } => format!(":{name}"),
            })
            .collect();
        format!("/{}", parts.join("/"))
    }

    /// Match against URL segments produced by [`url_segments`].
    ///
    /// With `exact`, the URL must have exactly as many segments as the
    /// pattern; otherwise the pattern only needs to match a leading run of
    /// whole segments.
    pub fn match_segments(&self, url: &[&str], exact: bool) -> Option<Params> {
        if url.len() < self.segments.len() || (exact && url.len() != self.segments.len()) {
            return None;
        }

        let mut params = Vec::new();
        for (seg, value) in self.segments.iter().zip(url) {
            match seg {
                Segment::Static(expected) => {
                    if !expected.eq_ignore_ascii_case(value) {
                        return None;
                    }
                }
                Segment::Param { name, rule } => {
                    let decoded = urlencoding::decode(value).ok()?;
                    if !rule.accepts(&decoded) {
                        return None;
                    }
                    params.push((name.clone(), decoded.into_owned()));
                }
            }
        }
        Some(Params(params))
    }
}

/// Split a URL into non-empty path segments, dropping query and fragment.
pub fn url_segments(url: &str) -> Vec<&str> {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    url[..end].split('/').filter(|s| !s.is_empty()).collect()
}
