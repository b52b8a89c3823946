use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::MinutesError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Request path from an HTTP API (`rawPath`) or REST API (`path`) event.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Request method from an HTTP API (v2) or REST API (v1) event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// Decoded request body. An absent body is treated as empty.
pub fn extract_body(payload: &Value) -> Result<String, MinutesError> {
    let body = match payload.get("body") {
        None | Some(Value::Null) => return Ok(String::new()),
        Some(Value::String(s)) => s,
        Some(_) => return Err(MinutesError::Parse("Invalid body format".to_string())),
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body.clone());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| MinutesError::Parse(format!("Failed to decode base64 body: {e}")))?;
    String::from_utf8(bytes).map_err(|e| MinutesError::Parse(format!("Body is not UTF-8: {e}")))
}

/// Parses a JSON body; an empty body parses as `{}` so field checks can name
/// what is missing.
pub fn parse_json_body<T: DeserializeOwned>(body: &str) -> Result<T, MinutesError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| MinutesError::Parse(format!("Invalid JSON body: {e}")))
}

/// Returns the value when it holds something other than whitespace.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validation error naming every field flagged as absent.
pub fn missing_fields_error(fields: &[(&'static str, bool)]) -> MinutesError {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    MinutesError::missing_fields(&missing)
}
