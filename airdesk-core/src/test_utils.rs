//! Test helper module
//!
//! In-memory resource service with scripted failures, a call log and gates
//! that hold a call in flight.

use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::{Notify, RwLock};

use airdesk_api::{
    ApiError, Flight, FlightDraft, PageRequest, PageResponse, Record, ResourceService,
    Result as ApiResult, User,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOp {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// One recorded service call. Payloads are kept as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    List(PageRequest),
    Get(String),
    Create(serde_json::Value),
    Update(serde_json::Value),
    Delete(String),
}

/// Held call: `entered` fires when the call starts, `release` lets it finish.
#[derive(Clone)]
pub struct CallGate {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

pub struct MockResourceService<R, D> {
    resource: &'static str,
    /// Server-side pages
    pages: RwLock<Vec<Vec<R>>>,
    failing: RwLock<HashSet<MockOp>>,
    calls: RwLock<Vec<MockCall>>,
    /// Record echoed by the next create; `None` acts like an empty body
    next_created: RwLock<Option<R>>,
    gates: RwLock<HashMap<MockOp, CallGate>>,
    _draft: PhantomData<fn(D)>,
}

impl<R: Record, D> MockResourceService<R, D> {
    pub fn new(resource: &'static str, pages: Vec<Vec<R>>) -> Self {
        Self {
            resource,
            pages: RwLock::new(pages),
            failing: RwLock::new(HashSet::new()),
            calls: RwLock::new(Vec::new()),
            next_created: RwLock::new(None),
            gates: RwLock::new(HashMap::new()),
            _draft: PhantomData,
        }
    }

    pub async fn fail(&self, op: MockOp) {
        self.failing.write().await.insert(op);
    }

    pub async fn recover(&self, op: MockOp) {
        self.failing.write().await.remove(&op);
    }

    pub async fn set_next_created(&self, record: Option<R>) {
        *self.next_created.write().await = record;
    }

    /// Hold the next `op` call until `release` is notified.
    pub async fn hold_next(&self, op: MockOp) -> CallGate {
        let gate = CallGate {
            entered: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        };
        self.gates.write().await.insert(op, gate.clone());
        gate
    }

    pub async fn calls(&self) -> Vec<MockCall> {
        self.calls.read().await.clone()
    }

    pub async fn count(&self, op: MockOp) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| {
                matches!(
                    (op, c),
                    (MockOp::List, MockCall::List(_))
                        | (MockOp::Get, MockCall::Get(_))
                        | (MockOp::Create, MockCall::Create(_))
                        | (MockOp::Update, MockCall::Update(_))
                        | (MockOp::Delete, MockCall::Delete(_))
                )
            })
            .count()
    }

    async fn record(&self, call: MockCall) {
        self.calls.write().await.push(call);
    }

    /// Wait on a pending gate for `op`, then report the scripted outcome.
    async fn outcome(&self, op: MockOp) -> ApiResult<()> {
        let gate = self.gates.write().await.remove(&op);
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        if self.failing.read().await.contains(&op) {
            return Err(ApiError::NetworkError {
                resource: self.resource.to_string(),
                detail: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

#[async_trait]
impl<R, D> ResourceService for MockResourceService<R, D>
where
    R: Record,
    D: Clone + std::fmt::Debug + Serialize + Send + Sync + 'static,
{
    type Record = R;
    type Draft = D;

    fn resource(&self) -> &'static str {
        self.resource
    }

    async fn list(&self, params: &PageRequest) -> ApiResult<PageResponse<R>> {
        self.record(MockCall::List(params.clone())).await;
        self.outcome(MockOp::List).await?;

        let pages = self.pages.read().await;
        let total_pages = u32::try_from(pages.len()).unwrap_or(u32::MAX);
        let content = pages
            .get(params.page as usize)
            .cloned()
            .unwrap_or_default();
        Ok(PageResponse::new(content, total_pages, params.page))
    }

    async fn get(&self, id: &str) -> ApiResult<R> {
        self.record(MockCall::Get(id.to_string())).await;
        self.outcome(MockOp::Get).await?;
        self.pages
            .read()
            .await
            .iter()
            .flatten()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| ApiError::HttpStatus {
                resource: self.resource.to_string(),
                status: 404,
                body: None,
            })
    }

    async fn create(&self, draft: &D) -> ApiResult<Option<R>> {
        self.record(MockCall::Create(to_json(draft))).await;
        self.outcome(MockOp::Create).await?;
        Ok(self.next_created.write().await.take())
    }

    async fn update(&self, record: &R) -> ApiResult<()> {
        self.record(MockCall::Update(to_json(record))).await;
        self.outcome(MockOp::Update).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.record(MockCall::Delete(id.to_string())).await;
        self.outcome(MockOp::Delete).await
    }
}

// ===== Factories =====

pub type MockFlights = MockResourceService<Flight, FlightDraft>;
pub type MockUsers = MockResourceService<User, airdesk_api::UserDraft>;

pub fn flight(id: &str, number: &str) -> Flight {
    Flight {
        id: id.to_string(),
        flight_number: number.to_string(),
        departure_date: "2024-01-01".to_string(),
        arrival_date: "2024-01-02".to_string(),
        departure_airport: "JFK".to_string(),
        arrival_airport: "GRU".to_string(),
    }
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        password: "secret".to_string(),
        phone: None,
        role: "USER".to_string(),
        address: None,
    }
}

pub fn flight_draft() -> FlightDraft {
    FlightDraft {
        flight_number: "AA1".to_string(),
        departure_date: "2024-01-01".to_string(),
        arrival_date: "2024-01-02".to_string(),
        departure_airport: "JFK".to_string(),
        arrival_airport: "GRU".to_string(),
    }
}

/// Three pages of flights: `[1 A, 2 B]`, `[3 C]`, `[4 D]`.
pub fn three_flight_pages() -> Arc<MockFlights> {
    Arc::new(MockResourceService::new(
        "flights",
        vec![
            vec![flight("1", "A"), flight("2", "B")],
            vec![flight("3", "C")],
            vec![flight("4", "D")],
        ],
    ))
}
