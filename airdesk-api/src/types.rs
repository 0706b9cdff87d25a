use serde::{Deserialize, Serialize};

use crate::traits::Record;

// ============ Pagination ============

/// Default page size used by the back-office list screens.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page request for list operations.
///
/// Pages are 0-indexed, matching the server's `number` field.
///
/// # Default
///
/// The default is `page = 0, size = 10, sort = "id"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page index (0-indexed).
    pub page: u32,
    /// Number of items per page.
    pub size: u32,
    /// Field the server sorts by.
    pub sort: String,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: "id".to_string(),
        }
    }
}

impl PageRequest {
    /// Request `page` with the given size and sort field.
    pub fn new(page: u32, size: u32, sort: impl Into<String>) -> Self {
        Self {
            page,
            size,
            sort: sort.into(),
        }
    }

    /// Encoded query string, e.g. `page=0&size=10&sort=name`.
    pub fn query_string(&self) -> String {
        format!(
            "page={}&size={}&sort={}",
            self.page,
            self.size,
            urlencoding::encode(&self.sort)
        )
    }
}

/// One server-reported page of a resource collection.
///
/// Mirrors the `{ content, totalPages, number }` envelope of the list endpoints.
/// Extra envelope fields the server may add are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// Items in this page, in server order.
    pub content: Vec<T>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Index of this page (0-indexed).
    pub number: u32,
    /// Total number of items across all pages, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
}

impl<T> PageResponse<T> {
    /// Create a page without a total element count.
    pub fn new(content: Vec<T>, total_pages: u32, number: u32) -> Self {
        Self {
            content,
            total_pages,
            number,
            total_elements: None,
        }
    }
}

// ============ Flights ============

/// A scheduled flight as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    /// Server-assigned identifier.
    pub id: String,
    /// Carrier flight number, e.g. `AA1`.
    pub flight_number: String,
    /// Departure date as entered, e.g. `2024-01-01`.
    pub departure_date: String,
    /// Arrival date as entered.
    pub arrival_date: String,
    /// Departure airport code.
    pub departure_airport: String,
    /// Arrival airport code.
    pub arrival_airport: String,
}

impl Record for Flight {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Flight fields collected by the create form; the server assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDraft {
    pub flight_number: String,
    pub departure_date: String,
    pub arrival_date: String,
    pub departure_airport: String,
    pub arrival_airport: String,
}

// ============ Users ============

/// Postal address attached to a user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub neighborhood: String,
    pub zipcode: String,
    pub number: String,
    pub complement: String,
    pub city: String,
    pub state: String,
}

impl Address {
    /// Whether every field is blank.
    pub fn is_blank(&self) -> bool {
        [
            &self.street,
            &self.neighborhood,
            &self.zipcode,
            &self.number,
            &self.complement,
            &self.city,
            &self.state,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
    }
}

/// A back-office user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: String,
    #[serde(default)]
    pub address: Option<Address>,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// User fields collected by the create dialog; the server assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: String,
    #[serde(default)]
    pub address: Option<Address>,
}
