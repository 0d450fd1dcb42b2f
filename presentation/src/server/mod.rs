//! HTTP API for the debate mediator

mod handlers;
mod types;

pub use handlers::create_router;
pub use types::{ErrorResponse, HealthResponse, WorkerStatus, WorkersHealth, WorkersHealthResponse};

use debate_application::RunDebateUseCase;
use std::sync::Arc;

/// Shared state handed to every request handler
///
/// Sessions are independent: the only thing shared across requests is the
/// use case, which holds no per-session state.
#[derive(Clone)]
pub struct AppState {
    pub use_case: Arc<RunDebateUseCase>,
}

impl AppState {
    pub fn new(use_case: RunDebateUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
        }
    }
}
