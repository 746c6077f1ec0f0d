//! Entry-screen redirect for visitors who are already signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in and sign-up screens install this on mount. A stored
//! credential sends the visitor to the home screen; its freshness is not
//! checked here. The route outlet installs the guard redirect, which follows
//! the resolved route and bounces gated URLs to sign-in.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::Resolution;
use crate::state::session::Session;

/// Navigate to `home_path` once if a credential is stored.
///
/// Returns whether a navigation was issued. Storage failures count as "no
/// credential" so the entry screen stays usable.
pub fn redirect_if_authenticated<F>(session: &Session, home_path: &str, navigate: F) -> bool
where
    F: FnOnce(&str),
{
    if session.credential().is_none() {
        return false;
    }
    log::info!("redirect: credential present, leaving entry screen for {home_path}");
    navigate(home_path);
    true
}

/// Run [`redirect_if_authenticated`] once after the entry screen mounts.
///
/// The effect reads no signals, so it does not re-run; rendering is never
/// blocked on it.
pub fn install_entry_redirect<F>(session: Session, home_path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        redirect_if_authenticated(&session, &home_path, |path| navigate(path, NavigateOptions::default()));
    });
}

/// Navigate to the gate's target each time `resolution` becomes a redirect.
///
/// The gated URL is replaced in history so Back does not land on it again.
pub fn install_guard_redirect<V, F>(resolution: Memo<Resolution<V>>, navigate: F)
where
    V: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Resolution::Redirect(target) = resolution.get() {
            log::warn!("router: private route without credential, redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
