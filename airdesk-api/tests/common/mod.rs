//! Shared test helpers: an in-process HTTP server that records requests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use airdesk_api::{ApiClient, ApiConfig};
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, extract::State};

/// One request as the fake server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: String,
    pub authorization: Option<String>,
}

impl RecordedRequest {
    /// Body parsed as JSON (`Null` when empty).
    pub fn json(&self) -> serde_json::Value {
        if self.body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&self.body).unwrap()
        }
    }
}

type Responder = dyn Fn(&RecordedRequest) -> (u16, String) + Send + Sync;

#[derive(Clone)]
pub struct FakeServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Arc<Responder>,
}

impl FakeServer {
    /// Start a server on an ephemeral port that answers every request via `responder`.
    pub async fn spawn<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = Self {
            base_url: format!("http://{addr}"),
            requests: Arc::new(Mutex::new(Vec::new())),
            responder: Arc::new(responder),
        };

        let app = Router::new().fallback(handle).with_state(server.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        server
    }

    /// Server that answers every request with the same status and body.
    pub async fn fixed(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::spawn(move |_| (status, body.clone())).await
    }

    pub fn client(&self) -> Arc<ApiClient> {
        Arc::new(ApiClient::new(&ApiConfig::with_base_url(&self.base_url)).unwrap())
    }

    pub fn client_with_token(&self, token: &str) -> Arc<ApiClient> {
        let config = ApiConfig {
            bearer_token: Some(token.to_string()),
            ..ApiConfig::with_base_url(&self.base_url)
        };
        Arc::new(ApiClient::new(&config).unwrap())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request the test expects; fails if there were more or fewer.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests[0].clone()
    }
}

async fn handle(
    State(server): State<FakeServer>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    let (status, body) = (server.responder)(&recorded);
    server.requests.lock().unwrap().push(recorded);

    let status = StatusCode::from_u16(status).unwrap();
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

pub fn flight_json(id: &str, number: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "flightNumber": number,
        "departureDate": "2024-01-01",
        "arrivalDate": "2024-01-02",
        "departureAirport": "JFK",
        "arrivalAirport": "GRU"
    })
}

pub fn user_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "password": "secret",
        "phone": null,
        "role": "USER",
        "address": null
    })
}
