//! Sign-in and sign-up screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential-issuing forms belong to the sign-in flow; these screens
//! only host it and leave for the home screen when a credential is already
//! stored.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::session::Session;
use crate::util::redirect::install_entry_redirect;

fn install_redirect() {
    let session = expect_context::<Session>();
    let config = expect_context::<ClientConfig>();
    install_entry_redirect(session, config.home_path, use_navigate());
}

#[component]
pub fn SignInPage() -> impl IntoView {
    install_redirect();

    view! {
        <section class="entry-page">
            <h1>"Sign in"</h1>
            <div class="entry-page__form" id="signin-form"></div>
            <p class="entry-page__switch">
                "No account yet? "
                <A href="/signup">"Sign up"</A>
            </p>
        </section>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    install_redirect();

    view! {
        <section class="entry-page">
            <h1>"Create an account"</h1>
            <div class="entry-page__form" id="signup-form"></div>
            <p class="entry-page__switch">
                "Already registered? "
                <A href="/signin">"Sign in"</A>
            </p>
        </section>
    }
}
