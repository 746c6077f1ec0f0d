//! Route configuration for the calendar shell.
//!
//! ARCHITECTURE
//! ============
//! `pattern` compiles and matches paths, `table` holds the ordered entries,
//! and `guard` turns a match plus session state into a render/redirect
//! decision. Entries bind a [`Screen`] tag rather than a built view; the
//! shell constructs the view only when a match is rendered.


pub mod guard;
pub mod pattern;
pub mod table;

pub use guard::{Gate, Resolution, decide, resolve};
pub use pattern::{ParamRule, Params};
pub use table::{RouteEntry, RouteMatch, RouteTable};

/// Parameter name of the calendar route.
pub const CALENDAR_ID_PARAM: &str = "calendarId";

/// Screens reachable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Landing,
    SignIn,
    SignUp,
    Home,
    Calendar,
}

/// The application's route table, in match order.
pub fn calendar_routes() -> RouteTable<Screen> {
    RouteTable::new(vec![
        RouteEntry::new("/signin", Screen::SignIn),
        RouteEntry::new("/signup", Screen::SignUp),
        RouteEntry::new("/home", Screen::Home).private(),
        RouteEntry::new("/:calendarId", Screen::Calendar).private().constrain(CALENDAR_ID_PARAM, ParamRule::RecordId),
        RouteEntry::new("/", Screen::Landing).exact(),
    ])
}
