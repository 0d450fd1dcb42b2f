//! HTTP request handlers

use super::AppState;
use super::types::{ErrorResponse, HealthResponse, WorkerStatus, WorkersHealthResponse};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use debate_application::{GenerationWorker, RunDebateError};
use debate_domain::{DebateRequest, DebateSession, Stance};
use tracing::{error, info};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/debate/start", post(start_debate))
        .route("/health", get(health))
        .route("/health/workers", get(workers_health))
        .with_state(state)
}

/// Run a debate to completion and return the session.
///
/// Worker failures still answer 200: the session carries `status: failed`
/// together with the rounds completed before the failure.
async fn start_debate(
    State(state): State<AppState>,
    Json(request): Json<DebateRequest>,
) -> Result<Json<DebateSession>, AppError> {
    let session = state.use_case.execute(request).await?;
    info!(
        status = %session.status,
        rounds = session.completed_rounds(),
        "Debate finished"
    );
    Ok(Json(session))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

async fn workers_health(State(state): State<AppState>) -> impl IntoResponse {
    let (supporting, opposing) = tokio::join!(
        probe(state.use_case.worker(Stance::Supporting).as_ref()),
        probe(state.use_case.worker(Stance::Opposing).as_ref()),
    );

    let body = WorkersHealthResponse::new(supporting, opposing);
    let status = if body.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body))
}

async fn probe(worker: &dyn GenerationWorker) -> WorkerStatus {
    let result = worker.health().await.map_err(|e| e.to_string());
    WorkerStatus::from_probe(worker.name(), result)
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<RunDebateError> for AppError {
    fn from(error: RunDebateError) -> Self {
        match error {
            RunDebateError::InvalidRequest(message) => AppError::BadRequest(message),
            other => {
                error!("Debate orchestration error: {}", other);
                AppError::Internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
