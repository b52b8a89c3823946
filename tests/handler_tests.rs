use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use minutemind::api::AppState;
use minutemind::api::handler::route;
use minutemind::clients::{DeliveryGateway, SummarizationGateway};
use minutemind::core::clock::FixedClock;
use minutemind::email::EmailComposer;
use minutemind::errors::MinutesError;
use serde_json::{Value, json};

/// Summarizer double: echoes its inputs, or fails with the configured message.
struct FakeSummarizer {
    fail_with: Option<String>,
    calls: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl SummarizationGateway for FakeSummarizer {
    async fn summarize(
        &self,
        transcript: &str,
        instruction: &str,
    ) -> Result<String, MinutesError> {
        self.calls
            .lock()
            .unwrap()
            .push((transcript.to_string(), instruction.to_string()));
        match &self.fail_with {
            Some(message) => Err(MinutesError::Provider(message.clone())),
            None => Ok(format!("- summary of {} chars", transcript.len())),
        }
    }
}

#[derive(Debug, Clone)]
struct SentMail {
    recipients: String,
    subject: String,
    html: String,
}

/// Mailer double that records every send.
struct FakeMailer {
    fail_with: Option<String>,
    sent: Mutex<Vec<SentMail>>,
}

#[async_trait]
impl DeliveryGateway for FakeMailer {
    async fn send(
        &self,
        recipients: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), MinutesError> {
        if let Some(message) = &self.fail_with {
            return Err(MinutesError::Delivery(message.clone()));
        }
        self.sent.lock().unwrap().push(SentMail {
            recipients: recipients.to_string(),
            subject: subject.to_string(),
            html: html_body.to_string(),
        });
        Ok(())
    }
}

struct Harness {
    state: AppState,
    summarizer: Arc<FakeSummarizer>,
    mailer: Arc<FakeMailer>,
}

fn harness(summarize_error: Option<&str>, mail_error: Option<&str>) -> Harness {
    let summarizer = Arc::new(FakeSummarizer {
        fail_with: summarize_error.map(ToString::to_string),
        calls: Mutex::new(Vec::new()),
    });
    let mailer = Arc::new(FakeMailer {
        fail_with: mail_error.map(ToString::to_string),
        sent: Mutex::new(Vec::new()),
    });
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 14, 0, 0).unwrap());
    let state = AppState::new(
        summarizer.clone(),
        mailer.clone(),
        EmailComposer::new(Arc::new(clock), Tz::UTC),
    );
    Harness {
        state,
        summarizer,
        mailer,
    }
}

fn post(path: &str, body: &Value) -> Value {
    json!({
        "rawPath": path,
        "requestContext": { "http": { "method": "POST" } },
        "body": body.to_string(),
        "isBase64Encoded": false
    })
}

fn status(response: &Value) -> u64 {
    response["statusCode"].as_u64().expect("statusCode")
}

fn body(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().expect("body")).expect("json body")
}

#[tokio::test]
async fn summarize_returns_summary() {
    let h = harness(None, None);
    let response = route(
        &h.state,
        &post(
            "/summarize",
            &json!({ "transcript": "Alice: ship Friday", "prompt": "Bullets" }),
        ),
    )
    .await;

    assert_eq!(status(&response), 200);
    assert_eq!(body(&response)["summary"], "- summary of 18 chars");
    assert_eq!(
        h.summarizer.calls.lock().unwrap().as_slice(),
        &[("Alice: ship Friday".to_string(), "Bullets".to_string())]
    );
}

#[tokio::test]
async fn summarize_missing_transcript_is_400() {
    let h = harness(None, None);
    let response = route(&h.state, &post("/summarize", &json!({ "prompt": "Bullets" }))).await;

    assert_eq!(status(&response), 400);
    assert_eq!(
        body(&response)["error"],
        "Missing required field(s): transcript"
    );
    assert!(h.summarizer.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn summarize_blank_fields_are_missing() {
    let h = harness(None, None);
    let response = route(
        &h.state,
        &post("/summarize", &json!({ "transcript": "  ", "prompt": "" })),
    )
    .await;

    assert_eq!(status(&response), 400);
    assert_eq!(
        body(&response)["error"],
        "Missing required field(s): transcript, prompt"
    );
}

#[tokio::test]
async fn summarize_provider_failure_is_500() {
    let h = harness(Some("rate limited"), None);
    let response = route(
        &h.state,
        &post("/summarize", &json!({ "transcript": "t", "prompt": "p" })),
    )
    .await;

    assert_eq!(status(&response), 500);
    let message = body(&response)["error"].as_str().unwrap().to_string();
    assert!(message.contains("rate limited"));
}

#[tokio::test]
async fn malformed_json_is_400() {
    let h = harness(None, None);
    let event = json!({
        "rawPath": "/summarize",
        "requestContext": { "http": { "method": "POST" } },
        "body": "{not json"
    });
    let response = route(&h.state, &event).await;
    assert_eq!(status(&response), 400);
}

#[tokio::test]
async fn mail_composes_summary_server_side() {
    let h = harness(None, None);
    let response = route(
        &h.state,
        &post(
            "/api/mail",
            &json!({
                "to": "a@x.com, b@y.com",
                "subject": "Weekly sync",
                "summary": "## Decisions\n- **Ship** Friday",
                "meetingDate": "Monday, October 19, 2026"
            }),
        ),
    )
    .await;

    assert_eq!(status(&response), 200);
    assert_eq!(body(&response), json!({ "ok": true }));

    let sent = h.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipients, "a@x.com, b@y.com");
    assert_eq!(sent[0].subject, "Weekly sync");
    assert!(sent[0].html.starts_with("<!DOCTYPE html>"));
    assert!(sent[0].html.contains("<strong>Ship</strong> Friday"));
    assert!(sent[0].html.contains("Monday, October 19, 2026"));
    assert!(sent[0].html.contains("10/19/2026, 2:00:00 PM"));
}

#[tokio::test]
async fn mail_accepts_legacy_html_shape() {
    let h = harness(None, None);
    let response = route(
        &h.state,
        &post(
            "/mail",
            &json!({ "to": "a@x.com", "subject": "s", "html": "<pre>notes</pre>" }),
        ),
    )
    .await;

    assert_eq!(status(&response), 200);
    assert_eq!(h.mailer.sent.lock().unwrap()[0].html, "<pre>notes</pre>");
}

#[tokio::test]
async fn mail_prefers_summary_over_html() {
    let h = harness(None, None);
    let response = route(
        &h.state,
        &post(
            "/mail",
            &json!({ "to": "a@x.com", "subject": "s", "summary": "**x**", "html": "<p>old</p>" }),
        ),
    )
    .await;

    assert_eq!(status(&response), 200);
    let html = &h.mailer.sent.lock().unwrap()[0].html;
    assert!(html.contains("<strong>x</strong>"));
    assert!(!html.contains("<p>old</p>"));
}

#[tokio::test]
async fn mail_missing_summary_is_400() {
    let h = harness(None, None);
    let response = route(
        &h.state,
        &post("/mail", &json!({ "to": "a@x.com", "subject": "s" })),
    )
    .await;

    assert_eq!(status(&response), 400);
    assert_eq!(body(&response)["error"], "Missing required field(s): summary");
    assert!(h.mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn mail_missing_everything_names_every_field() {
    let h = harness(None, None);
    let response = route(&h.state, &post("/mail", &json!({}))).await;

    assert_eq!(status(&response), 400);
    assert_eq!(
        body(&response)["error"],
        "Missing required field(s): to, subject, summary"
    );
}

#[tokio::test]
async fn mail_transport_failure_is_500_with_message() {
    let h = harness(None, Some("535 Authentication failed"));
    let response = route(
        &h.state,
        &post(
            "/mail",
            &json!({ "to": "a@x.com", "subject": "s", "summary": "text" }),
        ),
    )
    .await;

    assert_eq!(status(&response), 500);
    let message = body(&response)["error"].as_str().unwrap().to_string();
    assert!(!message.is_empty());
    assert!(message.contains("535 Authentication failed"));
}

#[tokio::test]
async fn base64_body_is_accepted() {
    use base64::Engine;
    let h = harness(None, None);
    let raw = json!({ "transcript": "t", "prompt": "p" }).to_string();
    let event = json!({
        "rawPath": "/summarize",
        "requestContext": { "http": { "method": "POST" } },
        "body": base64::engine::general_purpose::STANDARD.encode(raw),
        "isBase64Encoded": true
    });
    let response = route(&h.state, &event).await;
    assert_eq!(status(&response), 200);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let h = harness(None, None);
    let response = route(&h.state, &post("/transcripts", &json!({}))).await;
    assert_eq!(status(&response), 404);
}

#[tokio::test]
async fn get_is_405() {
    let h = harness(None, None);
    let event = json!({
        "rawPath": "/summarize",
        "requestContext": { "http": { "method": "GET" } }
    });
    let response = route(&h.state, &event).await;
    assert_eq!(status(&response), 405);
}
