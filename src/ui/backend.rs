//! Client side of the HTTP API, as used by the view controller.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::core::models::{MailRequest, MailResponse, SummarizeRequest, SummarizeResponse};
use crate::errors::MinutesError;

#[async_trait]
pub trait Backend: Send + Sync {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<String, MinutesError>;
    async fn send_mail(&self, request: &MailRequest) -> Result<(), MinutesError>;
}

/// Message to show for a failed response: the JSON `error` field, else the raw text.
#[must_use]
pub fn error_message_from_body(body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("error")
            .and_then(Value::as_str)
            .map(ToString::to_string)
    });

    match from_json {
        Some(message) if !message.trim().is_empty() => message,
        _ if !body.trim().is_empty() => body.to_string(),
        _ => "Unknown error".to_string(),
    }
}

/// Calls `/summarize` and `/mail` on a deployed API.
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}/{}", self.base_url, route.trim_start_matches('/'))
    }

    async fn post<T: Serialize + Sync>(
        &self,
        route: &str,
        payload: &T,
    ) -> Result<reqwest::Response, MinutesError> {
        let url = self.endpoint(route);
        debug!(url = %url, "POST");

        let response = self.http.post(&url).json(payload).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        Err(MinutesError::Api {
            status: status.as_u16(),
            message: error_message_from_body(&body),
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<String, MinutesError> {
        let response: SummarizeResponse = self.post("summarize", request).await?.json().await?;
        Ok(response.summary)
    }

    async fn send_mail(&self, request: &MailRequest) -> Result<(), MinutesError> {
        let response: MailResponse = self.post("mail", request).await?.json().await?;
        if response.ok {
            Ok(())
        } else {
            Err(MinutesError::Delivery("Server did not confirm the send".to_string()))
        }
    }
}
