//! Flights collection

use std::sync::Arc;

use async_trait::async_trait;

use super::{RestCollection, UpdateMethod};
use crate::client::ApiClient;
use crate::error::Result;
use crate::traits::ResourceService;
use crate::types::{Flight, FlightDraft, PageRequest, PageResponse};

/// Collection name and first path segment.
pub const FLIGHTS: &str = "flights";

/// Service for `/flights`.
#[derive(Debug, Clone)]
pub struct FlightsService {
    rest: RestCollection,
}

impl FlightsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            rest: RestCollection::new(client, FLIGHTS, UpdateMethod::Put),
        }
    }
}

#[async_trait]
impl ResourceService for FlightsService {
    type Record = Flight;
    type Draft = FlightDraft;

    fn resource(&self) -> &'static str {
        self.rest.name()
    }

    async fn list(&self, params: &PageRequest) -> Result<PageResponse<Flight>> {
        self.rest.list(params).await
    }

    async fn get(&self, id: &str) -> Result<Flight> {
        self.rest.get(id).await
    }

    async fn create(&self, draft: &FlightDraft) -> Result<Option<Flight>> {
        self.rest.create(draft).await
    }

    async fn update(&self, record: &Flight) -> Result<()> {
        self.rest.update(record).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.rest.delete(id).await
    }
}
