use std::sync::Arc;

use axum::extract::State;
use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::buffer::{EntropySource, ThreadRngSource};
use crate::error::AppError;
use crate::store::BufferStore;
use crate::workload;

// ── Shared state ────────────────────────────────────────────────────

pub struct AppState {
    pub store: BufferStore,
    pub entropy: Arc<dyn EntropySource>,
}

impl AppState {
    pub fn new(entropy: Arc<dyn EntropySource>) -> Self {
        Self {
            store: BufferStore::new(),
            entropy,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngSource))
    }
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Probes
        .route("/health/live", any(live))
        .route("/health/ready", any(ready))
        // Load generation
        .route("/", any(generate))
        .route("/clear", any(clear))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Handlers: Probes ────────────────────────────────────────────────

async fn live() -> &'static str {
    "up\n"
}

async fn ready() -> &'static str {
    "yes\n"
}

// ── Handlers: Buffer queue ──────────────────────────────────────────

async fn generate(State(state): State<Arc<AppState>>) -> Result<String, AppError> {
    // Filling and hashing 1 MiB is CPU work; keep it off the async workers.
    let worker = Arc::clone(&state);
    let report = tokio::task::spawn_blocking(move || {
        workload::run(&worker.store, worker.entropy.as_ref())
    })
    .await??;

    tracing::debug!(
        digest = %report.digest,
        memory_mb = report.memory_mb,
        retained = state.store.len(),
        "buffer retained"
    );
    Ok(report.to_string())
}

async fn clear(State(state): State<Arc<AppState>>) -> &'static str {
    state.store.clear();
    tracing::info!("buffer queue cleared");
    "Buffer queue cleared\n"
}
