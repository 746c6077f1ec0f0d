//! Private calendar screen bound to `/:calendarId`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the calendar through the shared API client so the request carries
//! the stored credential. Rendering of the calendar itself is delegated.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "csr"))]
fn calendar_endpoint(calendar_id: &str) -> String {
    format!("/calendars/{}", urlencoding::encode(calendar_id))
}

#[cfg(any(test, feature = "csr"))]
fn calendar_failed_message(status: u16) -> String {
    format!("calendar request failed: {status}")
}

#[component]
pub fn CalendarPage(calendar_id: String) -> impl IntoView {
    let status = RwSignal::new("Loading calendar...".to_owned());

    #[cfg(feature = "csr")]
    {
        let client = expect_context::<crate::net::ApiClient>();
        let endpoint = calendar_endpoint(&calendar_id);
        leptos::task::spawn_local(async move {
            let message = match client.get(&endpoint).await {
                Ok(resp) if resp.is_success() => String::new(),
                Ok(resp) => calendar_failed_message(resp.status),
                Err(e) => e.to_string(),
            };
            status.set(message);
        });
    }

    view! {
        <section class="calendar-page">
            <h1>{format!("Calendar {calendar_id}")}</h1>
            <Show when=move || !status.get().is_empty()>
                <p class="calendar-page__status">{move || status.get()}</p>
            </Show>
            <div class="calendar-page__grid" id="calendar-grid"></div>
        </section>
    }
}
