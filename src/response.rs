//! Various response objects returned from Zoho Desk and handed back to the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One result item, in the `{ "json": ... }` shape hosts pass between workflow steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionData {
    pub json: Value,
}

impl ExecutionData {
    pub fn new(json: Value) -> ExecutionData {
        ExecutionData { json }
    }
}

/// Error body sent back by the Desk API on failed requests. `error_code` is an identifier
/// for the type of error, while `message` *might* have more information.
///
/// There is also an `errors` field with per-field details we are not capturing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    pub error_code: String,
    #[serde(default)]
    pub message: String,
}

impl ApiErrorResponse {
    pub fn describe(&self) -> String {
        format!("[{}] {}", self.error_code, self.message)
    }
}

/// Turn a successful response body into the payload returned to the caller.
///
/// The provider's JSON is passed through unmodified. An empty body becomes `null` and a body
/// that is not JSON is kept as a JSON string.
pub(crate) fn payload(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }

    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Describe a failed response body, preferring the Desk error shape when it matches.
pub(crate) fn describe_failure(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(error) => error.describe(),
        Err(_) => format!("HTTP {}: {}", status, body),
    }
}
