//! In-process back office for driving the CLI end to end

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use airdesk_cli::Config;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};

#[derive(Default)]
struct Store {
    flights: Vec<Value>,
    users: Vec<Value>,
    requests: Vec<String>,
}

#[derive(Clone)]
pub struct BackOffice {
    pub base_url: String,
    store: Arc<Mutex<Store>>,
    failing: Arc<AtomicBool>,
    next_id: Arc<AtomicU32>,
}

impl BackOffice {
    pub async fn spawn(flights: Vec<Value>, users: Vec<Value>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let office = Self {
            base_url: format!("http://{addr}"),
            store: Arc::new(Mutex::new(Store {
                flights,
                users,
                requests: Vec::new(),
            })),
            failing: Arc::new(AtomicBool::new(false)),
            next_id: Arc::new(AtomicU32::new(100)),
        };
        let app = Router::new().fallback(handle).with_state(office.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        office
    }

    /// Answer every request with 500 from now on.
    pub fn fail_everything(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// `METHOD /path?query` of every request, in order.
    pub fn requests(&self) -> Vec<String> {
        self.store.lock().unwrap().requests.clone()
    }

    pub fn flights(&self) -> Vec<Value> {
        self.store.lock().unwrap().flights.clone()
    }

    pub fn users(&self) -> Vec<Value> {
        self.store.lock().unwrap().users.clone()
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.api.base_url.clone_from(&self.base_url);
        config.screen.page_size = 2;
        config
    }
}

fn query_param(query: &str, key: &str) -> Option<u32> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| v.parse().ok())
}

fn reply(status: StatusCode, body: &Value) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body.to_string()).into_response()
}

async fn handle(State(office): State<BackOffice>, method: Method, uri: Uri, body: Bytes) -> Response {
    let query = uri.query().unwrap_or_default().to_string();
    let mut line = format!("{method} {}", uri.path());
    if !query.is_empty() {
        line = format!("{line}?{query}");
    }
    let mut store = office.store.lock().unwrap();
    store.requests.push(line);

    if office.failing.load(Ordering::SeqCst) {
        return reply(StatusCode::INTERNAL_SERVER_ERROR, &json!({"message": "down"}));
    }

    let segments: Vec<&str> = uri.path().trim_matches('/').split('/').collect();
    let collection = match segments.first() {
        Some(&"flights") => &mut store.flights,
        Some(&"users") => &mut store.users,
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    match (method.as_str(), segments.get(1).copied()) {
        ("GET", None) => {
            let page = query_param(&query, "page").unwrap_or(0);
            let size = query_param(&query, "size").unwrap_or(10).max(1);
            let total = u32::try_from(collection.len()).unwrap();
            let total_pages = total.div_ceil(size);
            let content: Vec<Value> = collection
                .iter()
                .skip((page * size) as usize)
                .take(size as usize)
                .cloned()
                .collect();
            reply(
                StatusCode::OK,
                &json!({ "content": content, "totalPages": total_pages, "number": page }),
            )
        }
        ("GET", Some(id)) => match collection.iter().find(|r| r["id"] == id) {
            Some(record) => reply(StatusCode::OK, record),
            None => StatusCode::NOT_FOUND.into_response(),
        },
        ("POST", Some("create")) => {
            let mut record: Value = serde_json::from_slice(&body).unwrap();
            let id = office.next_id.fetch_add(1, Ordering::SeqCst).to_string();
            record["id"] = json!(id);
            collection.push(record.clone());
            reply(StatusCode::CREATED, &record)
        }
        ("PUT", None) => {
            let record: Value = serde_json::from_slice(&body).unwrap();
            match collection.iter_mut().find(|r| r["id"] == record["id"]) {
                Some(slot) => {
                    *slot = record;
                    StatusCode::OK.into_response()
                }
                None => StatusCode::NOT_FOUND.into_response(),
            }
        }
        ("DELETE", Some(id)) => {
            let before = collection.len();
            collection.retain(|r| r["id"] != id);
            if collection.len() == before {
                StatusCode::NOT_FOUND.into_response()
            } else {
                StatusCode::NO_CONTENT.into_response()
            }
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

pub fn flight_json(id: &str, number: &str) -> Value {
    json!({
        "id": id,
        "flightNumber": number,
        "departureDate": "2024-01-01",
        "arrivalDate": "2024-01-02",
        "departureAirport": "JFK",
        "arrivalAirport": "GRU"
    })
}

pub fn user_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "password": "secret",
        "phone": null,
        "role": "USER",
        "address": null
    })
}
