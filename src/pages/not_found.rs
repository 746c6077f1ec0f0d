use leptos::prelude::*;

/// Rendered when no route matches the current URL.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <p class="not-found">"Page not found."</p> }
}
