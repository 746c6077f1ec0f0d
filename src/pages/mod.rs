//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Screens are opaque to the routing core: the table binds a `Screen` tag and
//! `render` builds the page only when the shell resolves a URL to it.

pub mod calendar;
pub mod entry;
pub mod home;
pub mod landing;
pub mod not_found;

use leptos::prelude::*;

use calendar::CalendarPage;
use entry::{SignInPage, SignUpPage};
use home::HomePage;
use landing::LandingPage;

use crate::routes::{CALENDAR_ID_PARAM, Params, Screen};

/// Build the view bound to `screen`.
pub fn render(screen: Screen, params: &Params) -> AnyView {
    match screen {
        Screen::Landing => view! { <LandingPage/> }.into_any(),
        Screen::SignIn => view! { <SignInPage/> }.into_any(),
        Screen::SignUp => view! { <SignUpPage/> }.into_any(),
        Screen::Home => view! { <HomePage/> }.into_any(),
        Screen::Calendar => {
            let calendar_id = params.get(CALENDAR_ID_PARAM).unwrap_or_default().to_owned();
            view! { <CalendarPage calendar_id=calendar_id/> }.into_any()
        }
    }
}
