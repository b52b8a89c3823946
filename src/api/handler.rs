//! API Lambda handler - thin router that delegates to the route handlers.
//!
//! This module handles:
//! - Path and method matching (`POST /summarize`, `POST /mail`)
//! - Body extraction (plain or base64-encoded)
//! - Mapping route results onto API Gateway responses

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::state::AppState;
use super::{helpers, mail, parsing, summarize};
use crate::errors::MinutesError;

pub use self::function_handler as handler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Summarize,
    Mail,
}

impl Route {
    /// Matches on the last path segment so stage prefixes (`/prod/...`) and an
    /// `/api` prefix both resolve.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/').rsplit('/').next() {
            Some("summarize") => Some(Route::Summarize),
            Some("mail") => Some(Route::Mail),
            _ => None,
        }
    }
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns `Err` for request problems; those become 4xx/5xx response
/// payloads.
#[tracing::instrument(level = "info", skip(state, event))]
pub async fn function_handler(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(route(state, &event.payload).await)
}

/// Routes one API Gateway proxy event and returns the proxy response.
pub async fn route(state: &AppState, payload: &Value) -> Value {
    let correlation_id = Uuid::new_v4();
    let path = parsing::request_path(payload).unwrap_or("/");
    info!(%correlation_id, raw_path = %path, "Request received");

    match dispatch(state, payload, path).await {
        Ok(response) => {
            info!(%correlation_id, "Request completed");
            response
        }
        Err(e) => {
            if e.status_code() >= 500 {
                error!(%correlation_id, status = e.status_code(), "Request failed: {}", e);
            } else {
                warn!(%correlation_id, status = e.status_code(), "Request rejected: {}", e);
            }
            helpers::error_response(&e)
        }
    }
}

async fn dispatch(state: &AppState, payload: &Value, path: &str) -> Result<Value, MinutesError> {
    let Some(route) = Route::from_path(path) else {
        return Err(MinutesError::NotFound(path.to_string()));
    };

    // Direct invocations carry no method; treat them as POST.
    let method = parsing::request_method(payload).unwrap_or("POST");
    if !method.eq_ignore_ascii_case("POST") {
        return Err(MinutesError::MethodNotAllowed(method.to_string()));
    }

    let body = parsing::extract_body(payload)?;

    match route {
        Route::Summarize => summarize::handle_summarize(state, &body)
            .await
            .map(|r| helpers::ok_json(&r)),
        Route::Mail => mail::handle_mail(state, &body)
            .await
            .map(|r| helpers::ok_json(&r)),
    }
}
