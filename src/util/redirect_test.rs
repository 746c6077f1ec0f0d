use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use any_spawner::Executor;
use tokio::task::LocalSet;

use super::*;
use crate::routes::Params;
use crate::state::session::{CredentialStore, MemoryStore};

fn run_check(store: MemoryStore) -> (bool, Vec<String>) {
    let session = Session::new(Arc::new(store));
    let calls = RefCell::new(Vec::new());
    let redirected = redirect_if_authenticated(&session, "/home", |path| calls.borrow_mut().push(path.to_owned()));
    (redirected, calls.into_inner())
}

type Navigations = Rc<RefCell<Vec<(String, bool)>>>;

fn recorder() -> (Navigations, impl Fn(&str, NavigateOptions) + Clone + 'static) {
    let calls: Navigations = Rc::default();
    let sink = calls.clone();
    (calls, move |path: &str, options: NavigateOptions| sink.borrow_mut().push((path.to_owned(), options.replace)))
}

/// Run `body` under a fresh reactive owner on a local tokio executor, the
/// way the browser runs effects on its single thread.
async fn with_reactive_owner<Fut: Future<Output = ()>>(body: Fut) {
    _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();
    LocalSet::new().run_until(body).await;
}

// =============================================================
// Entry check
// =============================================================

#[test]
fn stored_credential_navigates_home_exactly_once() {
    let (redirected, calls) = run_check(MemoryStore::with_value("token", "abc123"));
    assert!(redirected);
    assert_eq!(calls, vec!["/home".to_owned()]);
}

#[test]
fn missing_credential_does_not_navigate() {
    let (redirected, calls) = run_check(MemoryStore::new());
    assert!(!redirected);
    assert!(calls.is_empty());
}

#[test]
fn storage_failure_renders_entry_screen() {
    let store = MemoryStore::with_value("token", "abc123");
    store.set_failing(true);
    let (redirected, calls) = run_check(store);
    assert!(!redirected);
    assert!(calls.is_empty());
}

#[test]
fn stale_credential_is_not_validated() {
    let (redirected, calls) = run_check(MemoryStore::with_value("token", "expired-long-ago"));
    assert!(redirected);
    assert_eq!(calls.len(), 1);
}

// =============================================================
// Entry redirect effect
// =============================================================

#[tokio::test]
async fn entry_effect_navigates_home_once_after_mount() {
    with_reactive_owner(async {
        let store = Arc::new(MemoryStore::with_value("token", "abc123"));
        let (calls, navigate) = recorder();
        let unrelated = RwSignal::new(0);
        let seen = RwSignal::new(0);
        Effect::new(move || seen.set(unrelated.get()));

        install_entry_redirect(Session::new(store), "/home".to_owned(), navigate);
        Executor::tick().await;
        assert_eq!(*calls.borrow(), vec![("/home".to_owned(), false)]);

        unrelated.set(1);
        Executor::tick().await;
        assert_eq!(seen.get_untracked(), 1);
        assert_eq!(calls.borrow().len(), 1);
    })
    .await;
}

#[tokio::test]
async fn entry_effect_stays_put_without_credential() {
    with_reactive_owner(async {
        let store = Arc::new(MemoryStore::new());
        let (calls, navigate) = recorder();

        install_entry_redirect(Session::new(store.clone()), "/home".to_owned(), navigate);
        Executor::tick().await;
        assert!(calls.borrow().is_empty());

        store.write("token", "late").unwrap();
        Executor::tick().await;
        assert!(calls.borrow().is_empty());
    })
    .await;
}

// =============================================================
// Guard redirect effect
// =============================================================

#[tokio::test]
async fn guard_effect_redirects_only_on_gated_resolution() {
    with_reactive_owner(async {
        let state = RwSignal::new(Resolution::Render { view: "home", params: Params::default() });
        let resolution = Memo::new(move |_| state.get());
        let (calls, navigate) = recorder();

        install_guard_redirect(resolution, navigate);
        Executor::tick().await;
        assert!(calls.borrow().is_empty());

        state.set(Resolution::Redirect("/signin"));
        Executor::tick().await;
        assert_eq!(*calls.borrow(), vec![("/signin".to_owned(), true)]);

        state.set(Resolution::NotFound);
        Executor::tick().await;
        assert_eq!(calls.borrow().len(), 1);
    })
    .await;
}

#[tokio::test]
async fn guard_effect_ignores_unchanged_resolution() {
    with_reactive_owner(async {
        let state = RwSignal::new(Resolution::<&'static str>::Redirect("/signin"));
        let resolution = Memo::new(move |_| state.get());
        let (calls, navigate) = recorder();

        install_guard_redirect(resolution, navigate);
        Executor::tick().await;
        assert_eq!(calls.borrow().len(), 1);

        state.set(Resolution::Redirect("/signin"));
        Executor::tick().await;
        assert_eq!(calls.borrow().len(), 1);
    })
    .await;
}
