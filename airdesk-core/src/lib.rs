//! Airdesk Core Library
//!
//! Client-side state for the airline back-office console:
//! - Page window of one server page with local create/update/delete patches
//! - List screen state machine (fetch, paginate, create, edit, delete)
//! - Create and edit form drafts with pluggable validation
//! - Localized notifications (en-US, pt-BR)
//!
//! Screens talk to the server only through
//! [`ResourceService`](airdesk_api::ResourceService), so they run against the
//! real REST services or any in-memory implementation.

pub mod error;
pub mod form;
pub mod i18n;
pub mod screens;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use form::FormDraft;
pub use i18n::Language;
pub use screens::{CreateFlightPage, CreatePage, DetailScreen, ListScreen, ListState, Phase, ScreenOptions};
pub use traits::{EditableFields, FlightField, UserField, Validator};
pub use types::{Notification, NotificationKind, Operation, PageWindow};
