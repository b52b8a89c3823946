//! View-model state for the summarize-and-send screen.

use chrono::{DateTime, Utc};

use crate::prompt::{DEFAULT_INSTRUCTION, estimate_tokens};

pub const GENERATED_MESSAGE: &str = "Summary generated successfully!";
pub const SENT_MESSAGE: &str = "Email sent successfully!";

/// What the screen is doing. Only one action can be outstanding at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Generating,
    Sending,
    Error(String),
    Success(String),
}

impl ViewState {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, ViewState::Generating | ViewState::Sending)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            ViewState::Error(m) | ViewState::Success(m) => Some(m),
            _ => None,
        }
    }
}

/// Default subject line, e.g. `Meeting Summary - 10/19/2026`.
#[must_use]
pub fn default_subject(now: DateTime<Utc>) -> String {
    format!("Meeting Summary - {}", now.format("%-m/%-d/%Y"))
}

/// Everything the user has typed or received in this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub transcript: String,
    pub prompt: String,
    pub summary: String,
    pub recipients: String,
    pub subject: String,
    pub drag_active: bool,
    pub view: ViewState,
}

impl SessionState {
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            transcript: String::new(),
            prompt: DEFAULT_INSTRUCTION.to_string(),
            summary: String::new(),
            recipients: String::new(),
            subject: default_subject(now),
            drag_active: false,
            view: ViewState::Idle,
        }
    }

    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.view.is_busy() && !self.transcript.trim().is_empty()
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.view.is_busy() && !self.summary.is_empty() && !self.recipients.trim().is_empty()
    }

    #[must_use]
    pub fn transcript_chars(&self) -> usize {
        self.transcript.chars().count()
    }

    /// Rough word estimate shown under the transcript box.
    #[must_use]
    pub fn transcript_estimated_words(&self) -> usize {
        estimate_tokens(&self.transcript)
    }

    #[must_use]
    pub fn summary_chars(&self) -> usize {
        self.summary.chars().count()
    }

    /// Words in the summary, counted by single spaces.
    #[must_use]
    pub fn summary_words(&self) -> usize {
        self.summary.split(' ').count()
    }
}
