//! Public entry route at `/`.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <section class="landing-page">
            <h1>"Calendar"</h1>
            <nav class="landing-page__actions">
                <A href="/signin">"Sign in"</A>
                <A href="/signup">"Sign up"</A>
            </nav>
        </section>
    }
}
