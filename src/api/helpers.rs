//! API Gateway response builders.
//!
//! Every response is a proxy-integration object (`statusCode`, `headers`,
//! `body`) with a JSON body.

use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::MinutesError;

fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response with `payload` serialized as the body.
#[must_use]
pub fn ok_json<T: Serialize>(payload: &T) -> Value {
    match serde_json::to_value(payload) {
        Ok(body) => json_response(200, &body),
        Err(e) => err_response(500, &format!("Failed to serialize response: {e}")),
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Maps a [`MinutesError`] onto its status code and message.
#[must_use]
pub fn error_response(error: &MinutesError) -> Value {
    let message = error.to_string();
    let message = if message.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        message
    };
    err_response(error.status_code(), &message)
}
