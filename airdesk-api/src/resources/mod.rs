//! Resource services, one module per REST collection

mod flights;
mod users;

pub use flights::{FLIGHTS, FlightsService};
pub use users::{USERS, UsersService};

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{PageRequest, PageResponse};

/// HTTP verb a collection accepts for full-record updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    Put,
    Patch,
}

impl UpdateMethod {
    fn as_method(self) -> Method {
        match self {
            Self::Put => Method::PUT,
            Self::Patch => Method::PATCH,
        }
    }
}

/// Path layout shared by the back-office collections:
///
/// | Operation | Request |
/// |-----------|---------|
/// | list      | `GET /{name}?page=&size=&sort=` |
/// | get       | `GET /{name}/{id}` |
/// | create    | `POST /{name}/create` |
/// | update    | `PUT` or `PATCH /{name}` |
/// | delete    | `DELETE /{name}/{id}` |
#[derive(Debug, Clone)]
pub(crate) struct RestCollection {
    client: Arc<ApiClient>,
    name: &'static str,
    update_method: UpdateMethod,
}

impl RestCollection {
    pub(crate) fn new(client: Arc<ApiClient>, name: &'static str, update_method: UpdateMethod) -> Self {
        Self {
            client,
            name,
            update_method,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn collection_path(&self) -> String {
        format!("/{}", self.name)
    }

    pub(crate) fn item_path(&self, id: &str) -> String {
        format!("/{}/{}", self.name, urlencoding::encode(id))
    }

    pub(crate) fn list_path(&self, params: &PageRequest) -> String {
        format!("/{}?{}", self.name, params.query_string())
    }

    pub(crate) async fn list<T>(&self, params: &PageRequest) -> Result<PageResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.client.get_json(self.name, &self.list_path(params)).await
    }

    pub(crate) async fn get<T>(&self, id: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.client.get_json(self.name, &self.item_path(id)).await
    }

    pub(crate) async fn create<B, T>(&self, draft: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let path = format!("/{}/create", self.name);
        self.client.post_json(self.name, &path, draft).await
    }

    pub(crate) async fn update<B>(&self, record: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.client
            .send_json(
                self.name,
                self.update_method.as_method(),
                &self.collection_path(),
                record,
            )
            .await
    }

    pub(crate) async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(self.name, &self.item_path(id)).await
    }
}
