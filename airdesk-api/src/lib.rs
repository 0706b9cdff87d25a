//! # airdesk-api
//!
//! REST client and resource services for the airdesk back-office console.
//!
//! ## Layers
//!
//! | Layer | Type | Role |
//! |-------|------|------|
//! | Transport | [`ApiClient`] | base URL, bearer token, timeout, one request per call |
//! | Resource | [`FlightsService`], [`UsersService`] | paths and payload shapes per collection |
//!
//! Both services implement [`ResourceService`], which is the seam the list
//! screens in `airdesk-core` are written against.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use airdesk_api::{ApiClient, ApiConfig, FlightsService, PageRequest, ResourceService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(ApiClient::new(&ApiConfig::with_base_url(
//!         "https://ops.example.com/api",
//!     ))?);
//!     let flights = FlightsService::new(client);
//!
//!     let page = flights.list(&PageRequest::new(0, 10, "id")).await?;
//!     for flight in &page.content {
//!         println!("{} {} -> {}", flight.flight_number, flight.departure_airport, flight.arrival_airport);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ApiError>`](ApiError). Transport
//! failures and non-2xx answers are passed through unchanged; nothing is
//! retried.

mod client;
mod config;
mod error;
mod http_client;
mod resources;
mod traits;
mod types;
mod utils;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ApiError, Result};
pub use resources::{FLIGHTS, FlightsService, USERS, UpdateMethod, UsersService};
pub use traits::{Record, ResourceService};
pub use types::{
    Address, DEFAULT_PAGE_SIZE, Flight, FlightDraft, MAX_PAGE_SIZE, PageRequest, PageResponse,
    User, UserDraft,
};

pub use utils::log_sanitizer;
