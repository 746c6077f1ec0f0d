//! Utility helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate navigation side effects from page rendering so the
//! decision logic stays testable without a browser.

pub mod redirect;
