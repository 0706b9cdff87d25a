//! Core layer type definitions

mod notification;
mod window;

pub use notification::{Notification, NotificationKind, Operation};
pub use window::PageWindow;

// Re-export library types
pub use airdesk_api::{
    Address, Flight, FlightDraft, PageRequest, PageResponse, Record, User, UserDraft,
};
