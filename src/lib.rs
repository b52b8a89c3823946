//! MinuteMind - turns meeting transcripts into formatted summary emails.
//!
//! The crate is an API Lambda with two routes:
//! 1. `POST /summarize` sends a transcript and instruction to a text-generation
//!    provider and returns the summary text
//! 2. `POST /mail` wraps a (possibly edited) summary in a branded HTML email and
//!    sends it to a comma-separated list of recipients
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (API Gateway proxy events) for the HTTP surface
//! - reqwest + openai-api-rs message types for the OpenAI-compatible provider
//! - lettre for SMTP delivery
//! - an ordered set of regex rewrites to turn the summary into HTML
//!
//! External services sit behind the [`clients::SummarizationGateway`] and
//! [`clients::DeliveryGateway`] traits so handlers can run against fakes.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::{TimeZone, Utc};
//! use minutemind::core::clock::FixedClock;
//! use minutemind::email::EmailComposer;
//!
//! let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap());
//! let composer = EmailComposer::new(Arc::new(clock), chrono_tz::Tz::UTC);
//!
//! let html = composer.compose("## Decisions\n- **Ship** on Friday", None);
//! assert!(html.contains("Monday, October 19, 2026"));
//! assert!(html.contains("<strong>Ship</strong> on Friday"));
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod email;
pub mod errors;
pub mod prompt;
pub mod ui;

pub use errors::MinutesError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it again after a subscriber is
/// installed is a no-op.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// minutemind::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
