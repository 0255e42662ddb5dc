// 🌐 REST API with Axum
// POST /receipts/process, GET /receipts/:id/points, GET /health

use crate::error::ReceiptError;
use crate::points::calculate_points;
use crate::receipt::Receipt;
use crate::store::ReceiptStore;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        AppState { store }
    }
}

// ============================================================================
// RESPONSE BODIES
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub receipts: usize,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        if self.is_malformed() {
            tracing::warn!(error = %self, "Rejected receipt submission");
        } else {
            tracing::warn!(error = %self, "Points requested for unknown receipt");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// POST /receipts/process - Parse, store, and return the new ID
///
/// The body is read raw so that every decode failure, including a missing
/// field, surfaces as 400 rather than axum's 422.
async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ReceiptError> {
    let receipt = Receipt::from_json(&body)?;
    let id = state.store.put(receipt);

    tracing::info!(receipt_id = %id, "Stored receipt");
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/:id/points - Score a stored receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ReceiptError> {
    let receipt = state.store.get(&id)?;
    let points = calculate_points(&receipt);

    tracing::debug!(receipt_id = %id, points, "Scored receipt");
    Ok(Json(PointsResponse { points }))
}

/// GET /health - Health check
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        receipts: state.store.len(),
    })
}

// ============================================================================
// ROUTER
// ============================================================================

pub fn router(state: AppState) -> Router {
    let receipt_routes = Router::new()
        .route("/process", post(process_receipt))
        .route("/:id/points", get(get_points));

    Router::new()
        .route("/health", get(health_check))
        .nest("/receipts", receipt_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================
