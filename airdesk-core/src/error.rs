//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use airdesk_api::ApiError;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The resource service call failed (transport or non-2xx)
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The draft did not pass validation; nothing was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// The form is marked invalid and must regain focus before resubmitting
    #[error("Form is marked invalid")]
    FormInvalid,

    /// A page fetch is already running on this screen
    #[error("A page fetch is already in flight")]
    FetchInFlight,

    /// Requested page lies outside `[0, total_pages)`
    #[error("Page {page} is out of range (total pages: {total_pages})")]
    PageOutOfRange { page: u32, total_pages: u32 },

    /// Edit submitted with no record selected
    #[error("No record is selected for edit")]
    NothingSelected,

    /// Record not present in the current page window
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Field name not known to the draft type
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Operation on a screen that is not mounted
    #[error("Screen is not mounted")]
    NotMounted,
}

impl CoreError {
    /// Whether it is expected behavior (user input, busy screen, 4xx), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Api(e) => e.is_expected(),
            Self::Validation(_)
            | Self::FormInvalid
            | Self::FetchInFlight
            | Self::PageOutOfRange { .. }
            | Self::NothingSelected
            | Self::RecordNotFound(_)
            | Self::UnknownField(_)
            | Self::NotMounted => true,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
