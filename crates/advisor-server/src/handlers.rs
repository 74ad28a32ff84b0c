//! HTTP Handlers

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::Serialize;

use dialog_core::{DialogResponse, IntentRequest, InvocationContext};

use crate::state::AppState;

/// Header carrying the caller's request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub intents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        intents: state.dispatcher.names().into_iter().map(String::from).collect(),
    })
}

/// Code hook invocation
pub async fn invoke(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<IntentRequest>,
) -> Result<Json<DialogResponse>, (StatusCode, Json<ErrorResponse>)> {
    let context = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or_else(InvocationContext::new, InvocationContext::with_request_id);

    let result = portfolio_advisor::handle_with(state.dispatcher, request, &context);
    let response = result.map_err(|e| {
        tracing::error!(request_id = %context.request_id, "Code hook failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
                code: e.code().into(),
            }),
        )
    })?;

    tracing::info!(
        request_id = %context.request_id,
        action = response.kind(),
        "Code hook answered"
    );

    Ok(Json(response))
}
