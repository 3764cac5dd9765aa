//! HTTP route handlers
//!
//! The dispatch endpoint takes the raw body as a string so that invalid
//! JSON reaches the API layer's own error path (COURSEDB_INVALID_REQUEST)
//! instead of an axum extractor rejection.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::api::{ApiHandler, Request, SuccessResponse};
use crate::schema::ApiSchema;

/// Shared state type
type ServerState = Arc<ApiHandler>;

/// Operation and schema routes under /api/v1
pub fn api_routes(handler: Arc<ApiHandler>) -> Router {
    Router::new()
        .route("/api/v1/operation", post(execute_operation))
        .route("/api/v1/schema", get(serve_schema))
        .with_state(handler)
}

/// Health check route at root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Execute any operation through the unified endpoint
async fn execute_operation(State(handler): State<ServerState>, body: String) -> impl IntoResponse {
    match Request::parse(&body) {
        Ok(request) => {
            let data = handler.dispatch(request);
            (StatusCode::OK, Json(SuccessResponse::new(data))).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Serve the API schema description
async fn serve_schema() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiSchema::catalog()))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
