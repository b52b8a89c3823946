//! Text-generation provider client
//!
//! Talks to any OpenAI-compatible `chat/completions` endpoint (Groq by default)
//! and returns the first choice's text.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::errors::MinutesError;
use crate::prompt::{SYSTEM_PROMPT, build_user_message, estimate_tokens};

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Boundary to the external text-generation provider.
#[async_trait]
pub trait SummarizationGateway: Send + Sync {
    /// Summarizes `transcript` following `instruction`.
    ///
    /// Blank arguments are a `Validation` error; provider failures are `Provider`
    /// or `HttpError`. A response without a message yields `""`.
    async fn summarize(&self, transcript: &str, instruction: &str)
    -> Result<String, MinutesError>;
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Option<Vec<CompletionChoice>>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    message: Option<CompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extracts the trimmed text of the first choice from a completion body.
pub fn first_choice_text(body: &Value) -> Result<String, MinutesError> {
    let parsed: CompletionResponse = serde_json::from_value(body.clone()).map_err(|e| {
        MinutesError::Provider(format!("Failed to parse completion response: {}", e))
    })?;

    Ok(parsed
        .choices
        .into_iter()
        .flatten()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .unwrap_or_default())
}

/// Pulls a readable message out of a provider error body.
fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message").or(Some(e)))
                .and_then(|m| m.as_str())
                .map(ToString::to_string)
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                "LLM error".to_string()
            } else {
                body.to_string()
            }
        })
}

/// LLM API client for generating meeting summaries
pub struct LlmClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
    model_name: String,
    temperature: f32,
}

impl LlmClient {
    #[must_use]
    pub fn new(
        api_key: Option<String>,
        base_url: String,
        model_name: String,
        temperature: f32,
    ) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name,
            temperature,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.llm_api_key.clone(),
            config.llm_base_url.clone(),
            config.llm_model.clone(),
            config.llm_temperature,
        )
    }

    pub fn build_prompt(&self, transcript: &str, instruction: &str) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(SYSTEM_PROMPT.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(build_user_message(instruction, transcript)),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    /// Request body for `chat/completions`.
    pub fn request_body(&self, prompt: &[ChatCompletionMessage]) -> Value {
        let messages: Vec<Value> = prompt
            .iter()
            .map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function => "function",
                    MessageRole::tool => "tool",
                };

                let content_val = match &msg.content {
                    Content::Text(text) => json!(text),
                    Content::ImageUrl(_) => Value::Null,
                };

                json!({
                    "role": role_str,
                    "content": content_val
                })
            })
            .collect();

        json!({
            "model": self.model_name,
            "messages": messages,
            "temperature": self.temperature
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl SummarizationGateway for LlmClient {
    async fn summarize(
        &self,
        transcript: &str,
        instruction: &str,
    ) -> Result<String, MinutesError> {
        if transcript.trim().is_empty() || instruction.trim().is_empty() {
            return Err(MinutesError::Validation(
                "Missing transcript or prompt".to_string(),
            ));
        }

        let Some(api_key) = self.api_key.as_deref() else {
            return Err(MinutesError::Config(
                "GROQ_API_KEY is not set".to_string(),
            ));
        };

        let prompt = self.build_prompt(transcript, instruction);

        #[cfg(feature = "debug-logs")]
        info!("Using prompt:\n{:?}", prompt);

        info!(
            model = %self.model_name,
            transcript_chars = transcript.chars().count(),
            estimated_input_tokens = estimate_tokens(transcript) + estimate_tokens(instruction),
            "Requesting summary"
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&self.request_body(&prompt))
            .send()
            .await
            .map_err(|e| MinutesError::HttpError(format!("LLM API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = %status, "Provider returned an error");
            return Err(MinutesError::Provider(provider_error_message(&error_text)));
        }

        let body: Value = response.json().await.map_err(|e| {
            MinutesError::Provider(format!("Failed to parse LLM response: {}", e))
        })?;

        let summary = first_choice_text(&body)?;
        if summary.is_empty() {
            warn!("Provider returned no message content");
        }
        Ok(summary)
    }
}
