//! Screen state machines
//!
//! Each screen owns its state behind a `tokio::sync::Mutex` that is released
//! before any service call is awaited.

mod create_form;
mod detail;
mod list_screen;

pub use create_form::{CreateFlightPage, CreatePage};
pub use detail::DetailScreen;
pub use list_screen::{FetchTicket, ListScreen, ListState, Phase, ScreenOptions};
