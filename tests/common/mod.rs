#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use shortener_client::config::Config;
use shortener_client::infrastructure::clipboard::MemoryClipboard;
use shortener_client::infrastructure::http::HttpShortenerGateway;
use shortener_client::SubmissionController;

/// What the fake shortening service answers with.
#[derive(Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
    Empty(StatusCode),
}

#[derive(Clone)]
struct FakeState {
    reply: Reply,
    requests: Arc<Mutex<Vec<Value>>>,
    gate: Option<Arc<Notify>>,
}

/// In-process stand-in for the shortening service.
pub struct FakeService {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
    gate: Option<Arc<Notify>>,
}

impl FakeService {
    pub async fn start(reply: Reply) -> Self {
        Self::spawn(reply, None).await
    }

    /// Holds every request until [`FakeService::release`] is called.
    pub async fn start_gated(reply: Reply) -> Self {
        Self::spawn(reply, Some(Arc::new(Notify::new()))).await
    }

    async fn spawn(reply: Reply, gate: Option<Arc<Notify>>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            reply,
            requests: requests.clone(),
            gate: gate.clone(),
        };

        let app = Router::new()
            .route("/api/shorten/", post(shorten_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            gate,
        }
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn config(&self) -> Config {
        Config {
            api_base_url: self.base_url.clone(),
            ..Config::default()
        }
    }
}

async fn shorten_handler(State(state): State<FakeState>, Json(payload): Json<Value>) -> Response {
    state.requests.lock().unwrap().push(payload);

    if let Some(gate) = &state.gate {
        gate.notified().await;
    }

    match state.reply {
        Reply::Json(status, body) => (status, Json(body)).into_response(),
        Reply::Text(status, body) => (status, body).into_response(),
        Reply::Empty(status) => status.into_response(),
    }
}

/// Address on which nothing is listening.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn create_controller(config: &Config) -> (Arc<SubmissionController>, Arc<MemoryClipboard>) {
    let gateway = Arc::new(HttpShortenerGateway::new(config).unwrap());
    let clipboard = Arc::new(MemoryClipboard::new());
    let controller = Arc::new(SubmissionController::new(
        gateway,
        clipboard.clone(),
        config,
    ));
    (controller, clipboard)
}

pub async fn wait_until_pending(controller: &SubmissionController) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !controller.state().is_pending() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("submission never became pending");
}

pub async fn wait_for_requests(service: &FakeService, count: usize) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while service.requests().len() < count {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("service never received the request");
}
