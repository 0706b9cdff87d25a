use std::fmt::Debug;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::types::{PageRequest, PageResponse};

/// A server-owned record with an opaque string identity.
///
/// The identifier is always assigned by the server; nothing in this crate or
/// its callers makes one up.
pub trait Record:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Server-assigned identifier.
    fn id(&self) -> &str;
}

/// REST resource service trait
///
/// One implementation per resource collection. Every method performs exactly
/// one network call and returns the underlying [`ApiError`](crate::ApiError)
/// unchanged on failure: no retry, no caching, no local persistence.
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Record type of the collection.
    type Record: Record;
    /// Payload accepted by [`create`](Self::create).
    type Draft: Clone + Debug + Serialize + Send + Sync + 'static;

    /// Collection name, also the first path segment (`flights`, `users`).
    fn resource(&self) -> &'static str;

    /// Fetch one page, sorted by `params.sort`.
    async fn list(&self, params: &PageRequest) -> Result<PageResponse<Self::Record>>;

    /// Fetch a single record.
    async fn get(&self, id: &str) -> Result<Self::Record>;

    /// Create a record.
    ///
    /// Returns `Some` when the server echoes the created record and `None`
    /// when it acknowledges with an empty body.
    async fn create(&self, draft: &Self::Draft) -> Result<Option<Self::Record>>;

    /// Replace a record with the submitted one.
    async fn update(&self, record: &Self::Record) -> Result<()>;

    /// Delete the record with `id`.
    async fn delete(&self, id: &str) -> Result<()>;
}
