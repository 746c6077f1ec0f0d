//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ClientConfig;
use crate::net::ApiClient;
use crate::net::transport::Transport;
use crate::pages::{self, not_found::NotFoundPage};
use crate::routes::{Resolution, RouteTable, Screen, calendar_routes, resolve};
use crate::state::session::Session;
use crate::util::redirect::install_guard_redirect;

/// Root application component.
///
/// Builds the session, the shared API client, and the route table once and
/// provides them to every page as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = default_session(&config);
    let client = ApiClient::new(config.clone(), session.clone(), default_transport());

    provide_context(config);
    provide_context(session);
    provide_context(client);
    provide_context(Arc::new(calendar_routes()));

    view! {
        <Title text="Calendar"/>

        <Router>
            <RouteOutlet/>
        </Router>
    }
}

/// Resolve the current location through the route table and gate private
/// screens on the stored credential.
#[component]
fn RouteOutlet() -> impl IntoView {
    let routes = expect_context::<Arc<RouteTable<Screen>>>();
    let session = expect_context::<Session>();
    let location = use_location();
    let navigate = use_navigate();

    let resolution = Memo::new(move |_| {
        let path = location.pathname.get();
        let resolution = resolve(&routes, &path, session.is_authenticated());
        log::debug!("router: {path} -> {resolution:?}");
        resolution
    });

    install_guard_redirect(resolution, navigate);

    move || match resolution.get() {
        Resolution::Render { view, params } => pages::render(view, &params),
        Resolution::NotFound => view! { <NotFoundPage/> }.into_any(),
        Resolution::Redirect(_) => ().into_any(),
    }
}

#[cfg(feature = "csr")]
fn default_session(config: &ClientConfig) -> Session {
    Session::browser(config.token_key.clone())
}

#[cfg(not(feature = "csr"))]
fn default_session(config: &ClientConfig) -> Session {
    Session::with_key(Arc::new(crate::state::session::MemoryStore::new()), config.token_key.clone())
}

#[cfg(feature = "csr")]
fn default_transport() -> Arc<dyn Transport + Send + Sync> {
    Arc::new(crate::net::transport::GlooTransport)
}

#[cfg(not(feature = "csr"))]
fn default_transport() -> Arc<dyn Transport + Send + Sync> {
    Arc::new(crate::net::transport::OfflineTransport)
}
