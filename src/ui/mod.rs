//! Server-rendered pages for the intake desk and the mailroom.
//!
//! Everything here is pure presentation: functions from values to HTML
//! strings. Handlers in `infrastructure::axum_http::routers::pages` do the I/O.

pub mod intake_form;
pub mod label;
pub mod layout;
pub mod record;
