//! `POST /summarize`: transcript + instruction in, summary text out.

use tracing::info;

use super::parsing::{missing_fields_error, non_blank, parse_json_body};
use super::state::AppState;
use crate::core::models::{SummarizeRequest, SummarizeResponse};
use crate::errors::MinutesError;

pub async fn handle_summarize(
    state: &AppState,
    body: &str,
) -> Result<SummarizeResponse, MinutesError> {
    let request: SummarizeRequest = parse_json_body(body)?;
    let transcript = non_blank(request.transcript);
    let prompt = non_blank(request.prompt);

    let (Some(transcript), Some(prompt)) = (transcript.as_deref(), prompt.as_deref()) else {
        return Err(missing_fields_error(&[
            ("transcript", transcript.is_some()),
            ("prompt", prompt.is_some()),
        ]));
    };

    let summary = state.summarizer.summarize(transcript, prompt).await?;
    info!(summary_chars = summary.chars().count(), "Summary generated");

    Ok(SummarizeResponse { summary })
}
