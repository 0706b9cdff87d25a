//! Users collection

use std::sync::Arc;

use async_trait::async_trait;

use super::{RestCollection, UpdateMethod};
use crate::client::ApiClient;
use crate::error::Result;
use crate::traits::ResourceService;
use crate::types::{PageRequest, PageResponse, User, UserDraft};

/// Collection name and first path segment.
pub const USERS: &str = "users";

/// Service for `/users`.
///
/// Delete always targets `/users/{id}`.
#[derive(Debug, Clone)]
pub struct UsersService {
    rest: RestCollection,
}

impl UsersService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            rest: RestCollection::new(client, USERS, UpdateMethod::Put),
        }
    }
}

#[async_trait]
impl ResourceService for UsersService {
    type Record = User;
    type Draft = UserDraft;

    fn resource(&self) -> &'static str {
        self.rest.name()
    }

    async fn list(&self, params: &PageRequest) -> Result<PageResponse<User>> {
        self.rest.list(params).await
    }

    async fn get(&self, id: &str) -> Result<User> {
        self.rest.get(id).await
    }

    async fn create(&self, draft: &UserDraft) -> Result<Option<User>> {
        self.rest.create(draft).await
    }

    async fn update(&self, record: &User) -> Result<()> {
        self.rest.update(record).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.rest.delete(id).await
    }
}
