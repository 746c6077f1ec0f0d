//! Gating decision for private routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell consults this after every route resolution. The only input is
//! whether a credential is stored at navigation time; its freshness is the
//! backend's concern.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::pattern::Params;
use super::table::RouteTable;
use crate::config::SIGNIN_PATH;

/// What the shell should do with a resolved route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Render,
    Redirect(&'static str),
}

/// Redirect to sign-in only for private routes without a credential.
pub fn decide(private: bool, authenticated: bool) -> Gate {
    if private && !authenticated { Gate::Redirect(SIGNIN_PATH) } else { Gate::Render }
}

/// Outcome of resolving a URL against a table and the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<V> {
    Render { view: V, params: Params },
    Redirect(&'static str),
    NotFound,
}

/// Look up `url` and apply the gate to the matching entry.
pub fn resolve<V: Clone>(table: &RouteTable<V>, url: &str, authenticated: bool) -> Resolution<V> {
    let Some(matched) = table.lookup(url) else {
        return Resolution::NotFound;
    };
    match decide(matched.is_private(), authenticated) {
        Gate::Render => Resolution::Render { view: matched.entry.view.clone(), params: matched.params },
        Gate::Redirect(target) => Resolution::Redirect(target),
    }
}
