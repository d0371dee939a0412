//! Axum-backed HTTP server serving a single playlist document.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tokio::net::TcpListener;
use url::Url;

/// Headers observed on one request, lower-cased names.
#[derive(Clone, Debug, Default)]
pub struct RecordedRequest {
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone)]
struct Served {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn serve_document(State(served): State<Served>, headers: HeaderMap) -> impl IntoResponse {
    let recorded = RecordedRequest {
        headers: headers
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect(),
    };
    served
        .requests
        .lock()
        .expect("request log poisoned")
        .push(recorded);

    (
        served.status,
        [(header::CONTENT_TYPE, "application/json")],
        served.body,
    )
}

/// Lightweight HTTP server answering `GET <path>` with a fixed status and body.
pub struct TestHttpServer {
    base_url: Url,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestHttpServer {
    /// Serve `body` with `200 OK` at `path` on a random localhost port.
    pub async fn json(path: &str, body: &str) -> Self {
        Self::with_status(path, StatusCode::OK, body).await
    }

    /// Serve `body` with `status` at `path` on a random localhost port.
    pub async fn with_status(path: &str, status: StatusCode, body: &str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route(path, get(serve_document))
            .with_state(Served {
                status,
                body: body.to_string(),
                requests: Arc::clone(&requests),
            });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test HTTP listener");
        let addr = listener
            .local_addr()
            .expect("read test listener local addr");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server = axum::serve(listener, router).with_graceful_shutdown(async {
            shutdown_rx.await.ok();
        });

        tokio::spawn(async move {
            server.await.expect("run test HTTP server");
        });

        Self {
            base_url: Url::parse(&format!("http://{addr}/")).expect("parse base URL"),
            requests,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Join path to server base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> Url {
        self.base_url.join(path).expect("join server URL path")
    }

    /// Base URL of this server, with a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Requests served so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

impl Drop for TestHttpServer {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
    }
}
