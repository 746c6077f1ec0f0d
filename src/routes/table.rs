//! Ordered route table mapping URL patterns to screens.
//!
//! DESIGN
//! ======
//! The table is generic over the bound view so matching stays pure data and
//! can be exercised without a browser. Lookup walks entries in construction
//! order and returns the first match.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::HashSet;

use super::pattern::{ParamRule, Params, PathPattern, url_segments};
use crate::error::RouteError;

/// One configured navigable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<V> {
    pub path: String,
    pub view: V,
    pub exact: bool,
    pub private: bool,
    pub constraints: Vec<(String, ParamRule)>,
}

impl<V> RouteEntry<V> {
    /// Public, prefix-matched entry.
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self { path: path.into(), view, exact: false, private: false, constraints: Vec::new() }
    }

    #[must_use]
    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    #[must_use]
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    #[must_use]
    pub fn constrain(mut self, param: impl Into<String>, rule: ParamRule) -> Self {
        self.constraints.push((param.into(), rule));
        self
    }
}

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, V> {
    pub entry: &'a RouteEntry<V>,
    pub params: Params,
}

impl<V> RouteMatch<'_, V> {
    pub fn is_private(&self) -> bool {
        self.entry.private
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

#[derive(Debug, Clone)]
struct Compiled<V> {
    entry: RouteEntry<V>,
    pattern: PathPattern,
}

/// Immutable, ordered route configuration.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Compiled<V>>,
}

impl<V> RouteTable<V> {
    /// Build a table from entries in match order.
    ///
    /// # Panics
    ///
    /// Panics if two entries share a path or a pattern is malformed. Route
    /// tables are static configuration, so this fails at startup.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Self {
        match Self::try_new(entries) {
            Ok(table) => table,
            Err(e) => panic!("invalid route table: {e}"),
        }
    }

    /// Fallible form of [`RouteTable::new`].
    ///
    /// # Errors
    ///
    /// Returns `RouteError::DuplicatePath` for repeated paths and
    /// `RouteError::InvalidPattern` for unparsable patterns or constraints.
    pub fn try_new(entries: Vec<RouteEntry<V>>) -> Result<Self, RouteError> {
        let mut seen = HashSet::new();
        let mut routes = Vec::with_capacity(entries.len());

        for entry in entries {
            let mut pattern = PathPattern::parse(&entry.path)?;
            for (param, rule) in &entry.constraints {
                pattern.constrain(param, *rule)?;
            }
            if !seen.insert(pattern.key()) {
                return Err(RouteError::DuplicatePath(entry.path));
            }
            routes.push(Compiled { entry, pattern });
        }

        Ok(Self { routes })
    }

    /// First entry matching `url`, or `None`.
    pub fn lookup(&self, url: &str) -> Option<RouteMatch<'_, V>> {
        let segments = url_segments(url);
        self.routes.iter().find_map(|route| {
            route
                .pattern
                .match_segments(&segments, route.entry.exact)
                .map(|params| RouteMatch { entry: &route.entry, params })
        })
    }

    /// Entries in match order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.routes.iter().map(|route| &route.entry)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
