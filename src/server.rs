//! Receipt Points HTTP server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/receipts/process` | Score and store a receipt, returns `{"id": ...}` |
//! | `GET`  | `/receipts/{id}/points` | Points for a stored receipt, returns `{"points": ...}` |
//! | `GET`  | `/receipts` | Every stored receipt keyed by id |
//! | `GET`  | `/health` | Health check (returns version and stored receipt count) |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "invalid URL path" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404), `internal` (500).
//! A wrong method on a known route answers 405 with an empty body.
//! Any other path below `/receipts/` is a malformed points path (400).

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use receipt_points_core::models::Receipt;
use receipt_points_core::store::memory::InMemoryStore;
use receipt_points_core::store::{submit, ReceiptStore};

use crate::config::Config;

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
struct AppState {
    store: Arc<dyn ReceiptStore>,
}

/// Starts the HTTP server with a fresh in-memory store.
///
/// Binds to `[server].bind` and runs until Ctrl-C is received.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    run_server_with_store(config, Arc::new(InMemoryStore::new())).await
}

/// Starts the HTTP server backed by the given store.
pub async fn run_server_with_store(
    config: &Config,
    store: Arc<dyn ReceiptStore>,
) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr()?;
    let app = build_router(store);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!(
        "Receipt Points v{} listening on http://{}",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the application router over `store`.
pub fn build_router(store: Arc<dyn ReceiptStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/receipts/process", post(handle_process))
        .route("/receipts/{id}/points", get(handle_points))
        .route("/receipts", get(handle_list))
        .route("/health", get(handle_health))
        .fallback(handle_fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { store })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (e.g., `"bad_request"`, `"not_found"`).
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
#[derive(Debug)]
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "{}", self.message);
        } else {
            tracing::warn!(status = %self.status, "{}", self.message);
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internal".to_string(),
            message: format!("{:#}", err),
        }
    }
}

// ============ POST /receipts/process ============

#[derive(Serialize)]
struct ProcessResponse {
    id: String,
}

/// Handler for `POST /receipts/process`.
///
/// The body is decoded from raw bytes so that every decode failure, including
/// a missing `Content-Type`, is reported as `400`.
async fn handle_process(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, AppError> {
    let receipt: Receipt = serde_json::from_slice(&body)
        .map_err(|e| bad_request(format!("invalid receipt: {}", e)))?;

    let id = submit(state.store.as_ref(), receipt).await?;
    let stored = state.store.len().await?;
    tracing::info!(%id, stored, "Processed receipt");

    Ok(Json(ProcessResponse { id }))
}

// ============ GET /receipts/{id}/points ============

#[derive(Serialize)]
struct PointsResponse {
    points: u64,
}

async fn handle_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    let score = state
        .store
        .get_points(&id)
        .await?
        .ok_or_else(|| not_found(format!("no receipt found for id: {}", id)))?;

    Ok(Json(PointsResponse {
        points: score.points,
    }))
}

// ============ GET /receipts ============

async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Receipt>>, AppError> {
    Ok(Json(state.store.list_receipts().await?))
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    /// Number of receipts currently stored.
    receipts: usize,
}

async fn handle_health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        receipts: state.store.len().await?,
    }))
}

// ============ Fallback ============

/// Unmatched paths below `/receipts/` are malformed points lookups.
async fn handle_fallback(uri: Uri) -> AppError {
    if uri.path().starts_with("/receipts/") {
        bad_request(format!("invalid URL path: {}", uri.path()))
    } else {
        not_found(format!("no route for path: {}", uri.path()))
    }
}
