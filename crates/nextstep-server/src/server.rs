//! HTTP surface: router, API handlers, and the error boundary.
//!
//! Handlers are thin wiring around the core pipeline. Every request ends
//! in exactly one of two terminal outcomes: `{"success": true, ...}` with
//! a payload, or `{"success": false, "error": ...}` with HTTP 500. No
//! partial payload is ever returned on failure.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use nextstep_core::model::ModelClient;
use nextstep_core::roadmap::{
    self, ChatContext, Roadmap, RoadmapError, TransitionRequest, TransitionRoadmap, UserProfile,
};

use crate::config::FirebaseConfig;
use crate::pages;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Shared handler state. The model client is the only injected
/// collaborator; tests swap it for a canned stub.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ModelClient>,
    pub firebase: FirebaseConfig,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Error boundary for the API: every failure leaving a handler becomes a
/// `{"success": false, "error": ...}` body with an error status.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "success": false, "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

/// A request body that failed to deserialize. The original fields all
/// default when merely absent, so this only fires on malformed JSON.
fn bad_body(err: JsonRejection) -> ApiError {
    tracing::error!(error = %err, "failed to read request body");
    ApiError::internal(err.to_string())
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRequest {
    pub message: String,
    pub context: ChatContext,
}

#[derive(Serialize)]
struct RoadmapResponse {
    success: bool,
    roadmap: Roadmap,
}

#[derive(Serialize)]
struct TransitionResponse {
    success: bool,
    roadmap: TransitionRoadmap,
}

#[derive(Serialize)]
struct ChatResponse {
    success: bool,
    response: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/login", get(pages::login))
        .route("/form", get(pages::form))
        .route("/dashboard", get(pages::dashboard))
        .route("/api/generate-roadmap", post(generate_roadmap))
        .route("/api/chat", post(chat))
        .route("/api/regenerate-roadmap", post(regenerate_roadmap))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(state: AppState, bind: &str, port: u16) -> Result<()> {
    let app = build_router(state);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("nextstep listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("nextstep shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn generate_roadmap(
    State(state): State<AppState>,
    body: Result<Json<UserProfile>, JsonRejection>,
) -> Result<Json<RoadmapResponse>, ApiError> {
    let Json(profile) = body.map_err(bad_body)?;

    let roadmap = roadmap::generate_roadmap(state.model.as_ref(), &profile)
        .await
        .map_err(generate_error)?;

    Ok(Json(RoadmapResponse {
        success: true,
        roadmap,
    }))
}

async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = body.map_err(bad_body)?;

    let response = roadmap::chat(state.model.as_ref(), &request.message, &request.context)
        .await
        .map_err(chat_error)?;

    Ok(Json(ChatResponse {
        success: true,
        response,
    }))
}

async fn regenerate_roadmap(
    State(state): State<AppState>,
    body: Result<Json<TransitionRequest>, JsonRejection>,
) -> Result<Json<TransitionResponse>, ApiError> {
    let Json(request) = body.map_err(bad_body)?;

    let roadmap = roadmap::regenerate_roadmap(state.model.as_ref(), &request)
        .await
        .map_err(regenerate_error)?;

    Ok(Json(TransitionResponse {
        success: true,
        roadmap,
    }))
}

// ---------------------------------------------------------------------------
// Error translation
// ---------------------------------------------------------------------------

/// Generate path: parse failures get a fixed retry-suggesting message so
/// raw model text never leaks; upstream failures surface their cause.
fn generate_error(err: RoadmapError) -> ApiError {
    tracing::error!(error = %err, "roadmap generation failed");
    match err {
        RoadmapError::Parse(_) => {
            ApiError::internal("Failed to parse roadmap data. Please try again.")
        }
        RoadmapError::Model(cause) => ApiError::internal(cause.to_string()),
    }
}

/// Chat path: every failure reads the same to the user.
fn chat_error(err: RoadmapError) -> ApiError {
    tracing::error!(error = %err, "chat reply failed");
    ApiError::internal("Failed to get response. Please try again.")
}

/// Regenerate path: the stringified cause, whatever it was.
fn regenerate_error(err: RoadmapError) -> ApiError {
    tracing::error!(error = %err, "roadmap regeneration failed");
    ApiError::internal(err.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
