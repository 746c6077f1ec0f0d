//! Main private screen reached after sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        if let Err(e) = session.forget() {
            log::warn!("home: failed to clear credential: {e}");
        }
        navigate(&config.signin_path, NavigateOptions::default());
    };

    view! {
        <section class="home-page">
            <header class="home-page__header">
                <h1>"Your calendars"</h1>
                <button class="home-page__sign-out" on:click=on_sign_out>"Sign out"</button>
            </header>
            <div class="home-page__calendar" id="calendar-root"></div>
        </section>
    }
}
