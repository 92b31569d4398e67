//! Shared helpers for router-level tests.

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;

use crate::config::KeyConfig;
use crate::services::auth::{AuthError, Authenticator};
use crate::state::AppState;

#[derive(Clone, Copy)]
enum Verdict {
    Accept,
    Reject,
    Fail,
}

struct RecordingInner {
    verdict: Verdict,
    sent: Mutex<Vec<(String, String)>>,
}

/// Test double that records every call and answers with a fixed verdict.
#[derive(Clone)]
pub struct Recording(Arc<RecordingInner>);

impl Recording {
    fn with(verdict: Verdict) -> Self {
        Self(Arc::new(RecordingInner {
            verdict,
            sent: Mutex::new(Vec::new()),
        }))
    }

    pub fn accepting() -> Self {
        Self::with(Verdict::Accept)
    }

    pub fn rejecting() -> Self {
        Self::with(Verdict::Reject)
    }

    pub fn failing() -> Self {
        Self::with(Verdict::Fail)
    }

    pub fn calls(&self) -> usize {
        self.0.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<(String, String)> {
        self.0.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Authenticator for Recording {
    fn backend_name(&self) -> &'static str {
        "recording"
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        self.0
            .sent
            .lock()
            .unwrap()
            .push((username.to_string(), password.to_string()));

        match self.0.verdict {
            Verdict::Accept => Ok(true),
            Verdict::Reject => Ok(false),
            Verdict::Fail => Err(AuthError::Unavailable("backend down".into())),
        }
    }
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

pub fn basic(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

pub fn router_with(keys: KeyConfig, auth: &Recording) -> Router {
    crate::api::routes().with_state(AppState::new(keys, Arc::new(auth.clone())))
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, authorization: Option<String>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Log output captured from a thread-local fmt subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Capture events emitted on the current thread until the guard drops.
///
/// Only valid with the current-thread test runtime.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}
