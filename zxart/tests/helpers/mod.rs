//! In-process stand-in for the zxart API
//!
//! Serves one canned reply for every path and records the paths it was asked
//! for, so tests can assert on the exact request the client built.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use serde_json::{json, Value};
use zxart::{ClientConfig, ZxArtClient};

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<String>>>,
    status: StatusCode,
    body: Arc<String>,
}

pub struct MockApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    /// Start a server answering every request with `status` and `body`
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            status,
            body: Arc::new(body.into()),
        };
        let requests = state.requests.clone();

        let app = Router::new().fallback(reply).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api/"),
            requests,
        }
    }

    /// Serve a success envelope with `data` as `responseData`
    pub async fn success(data: Value) -> Self {
        Self::start(StatusCode::OK, envelope("success", data).to_string()).await
    }

    /// Request paths received so far, percent-encoded as sent
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::with_base_url(&self.base_url).unwrap()
    }

    pub fn client(&self) -> ZxArtClient {
        ZxArtClient::from_config(self.config()).unwrap()
    }
}

async fn reply(State(state): State<MockState>, uri: Uri) -> impl IntoResponse {
    state.requests.lock().unwrap().push(uri.path().to_string());
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.as_str().to_owned(),
    )
}

/// Install a test subscriber once so client logs show up with `--nocapture`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("zxart=debug")
        .with_test_writer()
        .try_init();
}

pub fn envelope(status: &str, data: Value) -> Value {
    json!({
        "responseStatus": status,
        "totalAmount": 1000,
        "start": 0,
        "limit": 60,
        "responseData": data
    })
}

pub fn entity_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "url": format!("https://zxart.ee/eng/item/{id}/"),
        "dateCreated": 1_500_000_000,
        "dateModified": 1_500_000_000
    })
}

fn with_fields(mut base: Value, extra: Value) -> Value {
    let map = base.as_object_mut().unwrap();
    for (key, value) in extra.as_object().unwrap() {
        map.insert(key.clone(), value.clone());
    }
    base
}

pub fn image_json(id: i64, title: &str) -> Value {
    with_fields(
        entity_json(id, title),
        json!({
            "authorIds": [5],
            "rating": "4.5",
            "year": 1995,
            "imageUrl": format!("https://zxart.ee/image/{id}.png"),
            "views": 300
        }),
    )
}

pub fn tune_json(id: i64, title: &str, time: &str) -> Value {
    with_fields(
        entity_json(id, title),
        json!({
            "authorIds": [5, 6],
            "tags": ["demo", "music"],
            "rating": 3.75,
            "time": time,
            "plays": 42,
            "originalFileName": "track%201.pt3"
        }),
    )
}
