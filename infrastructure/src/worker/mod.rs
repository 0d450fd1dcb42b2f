//! HTTP generation worker adapter
//!
//! Implements the [`GenerationWorker`](debate_application::GenerationWorker)
//! port over the workers' JSON contract:
//!
//! - `POST /generate` with `{ topic, context }` → `{ argument }` or `{ error }`
//! - `GET /health` → `{ status }`

pub mod http_worker;
pub mod protocol;

pub use http_worker::HttpGenerationWorker;
