//! Drives the session: generate, edit, send, plus file intake and export.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use tracing::{info, warn};

use super::backend::Backend;
use super::state::{GENERATED_MESSAGE, SENT_MESSAGE, SessionState, ViewState};
use crate::core::clock::{Clock, SystemClock};
use crate::core::models::{MailRequest, SummarizeRequest};

/// Drag events the drop zone reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
}

pub struct UiController<B: Backend> {
    backend: B,
    clock: Arc<dyn Clock>,
    session: SessionState,
}

impl<B: Backend> UiController<B> {
    pub fn new(backend: B) -> Self {
        Self::with_clock(backend, Arc::new(SystemClock))
    }

    pub fn with_clock(backend: B, clock: Arc<dyn Clock>) -> Self {
        let session = SessionState::new(clock.now());
        Self {
            backend,
            clock,
            session,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Mutable access for text inputs (transcript, prompt, summary edits, ...).
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn view(&self) -> &ViewState {
        &self.session.view
    }

    /// Requests a summary. Returns `false` without doing anything when the
    /// action is currently disabled.
    pub async fn generate(&mut self) -> bool {
        if !self.session.can_generate() {
            return false;
        }
        self.session.view = ViewState::Generating;

        let request = SummarizeRequest {
            transcript: Some(self.session.transcript.clone()),
            prompt: Some(self.session.prompt.clone()),
        };

        self.session.view = match self.backend.summarize(&request).await {
            Ok(summary) => {
                self.session.summary = summary;
                ViewState::Success(GENERATED_MESSAGE.to_string())
            }
            Err(e) => {
                warn!("Summary request failed: {}", e);
                ViewState::Error(e.to_string())
            }
        };
        true
    }

    /// Emails the current summary. Returns `false` when the action is disabled.
    pub async fn send(&mut self) -> bool {
        if !self.session.can_send() {
            return false;
        }
        self.session.view = ViewState::Sending;

        let request = MailRequest {
            to: Some(self.session.recipients.clone()),
            subject: Some(self.session.subject.clone()),
            summary: Some(self.session.summary.clone()),
            html: None,
            meeting_date: Some(
                self.clock
                    .now()
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        };

        self.session.view = match self.backend.send_mail(&request).await {
            Ok(()) => ViewState::Success(SENT_MESSAGE.to_string()),
            Err(e) => {
                warn!("Send request failed: {}", e);
                ViewState::Error(e.to_string())
            }
        };
        true
    }

    /// Replaces the transcript with the contents of a picked file.
    pub async fn load_transcript_file(&mut self, path: &Path) -> Result<()> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read transcript file {}", path.display()))?;
        self.session.transcript = String::from_utf8_lossy(&bytes).into_owned();
        info!(chars = self.session.transcript_chars(), "Transcript loaded");
        Ok(())
    }

    pub fn drag(&mut self, event: DragEvent) {
        self.session.drag_active = matches!(event, DragEvent::Enter | DragEvent::Over);
    }

    /// Handles a file dropped on the transcript zone. Only plain-text files are
    /// taken; anything else is ignored and `Ok(false)` returned.
    pub async fn drop_file(&mut self, path: &Path) -> Result<bool> {
        self.session.drag_active = false;

        let mime = mime_guess::from_path(path).first();
        if mime.as_ref().map(|m| m.essence_str()) != Some("text/plain") {
            info!(path = %path.display(), "Ignoring dropped file that is not text/plain");
            return Ok(false);
        }

        self.load_transcript_file(path).await?;
        Ok(true)
    }

    /// File name used when the summary is exported, e.g. `meeting-summary-2026-10-19.txt`.
    pub fn download_file_name(&self) -> String {
        format!("meeting-summary-{}.txt", self.clock.now().format("%Y-%m-%d"))
    }

    /// Writes the summary into `dir` and returns the file's path.
    pub async fn export_summary(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.download_file_name());
        tokio::fs::write(&path, self.session.summary.as_bytes())
            .await
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        Ok(path)
    }
}
