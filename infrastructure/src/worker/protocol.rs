//! Wire types for the generation worker contract.

use debate_application::WorkerError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub topic: &'a str,
    pub context: &'a str,
}

/// Error payload returned by a worker with a non-2xx status
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthPayload {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Interpret a `/generate` response.
///
/// A 2xx body must carry a string `argument`; anything else is an invalid
/// response. Non-2xx statuses are remote errors, with the message taken from
/// the `{ "error": ... }` payload when present.
pub fn parse_generate_response(status: u16, body: &str) -> Result<String, WorkerError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorPayload>(body)
            .map(|p| p.error)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(WorkerError::remote(status, message));
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| WorkerError::InvalidResponse(format!("response is not JSON: {}", e)))?;

    match value.get("argument") {
        Some(Value::String(argument)) => Ok(argument.trim().to_string()),
        Some(other) => Err(WorkerError::InvalidResponse(format!(
            "'argument' must be a string, got {}",
            json_type_name(other)
        ))),
        None => Err(WorkerError::InvalidResponse(
            "response is missing the 'argument' field".to_string(),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
