//! Full HTML email document around a formatted summary.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;

use super::formatter::format_summary;
use crate::core::clock::{Clock, SystemClock};

pub const BRAND_NAME: &str = "Lumio Notes";
pub const BRAND_TAGLINE: &str = "AI-powered meeting summaries";

/// en-US long form, e.g. `Monday, October 19, 2026`.
pub const DISPLAY_DATE_FORMAT: &str = "%A, %B %-d, %Y";
/// en-US locale string, e.g. `10/19/2026, 3:04:05 PM`.
pub const GENERATED_AT_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 40 40"><rect width="40" height="40" rx="10" fill="#ffffff" fill-opacity="0.18"/><path d="M11 13h18M11 20h18M11 27h11" stroke="#ffffff" stroke-width="3" stroke-linecap="round"/><circle cx="29" cy="27" r="3" fill="#fbbf24"/></svg>"##;

// Inline so the document renders with no network access.
static LOGO_DATA_URI: Lazy<String> =
    Lazy::new(|| format!("data:image/svg+xml;base64,{}", STANDARD.encode(LOGO_SVG)));

const RESPONSIVE_CSS: &str = "
    body { margin: 0; padding: 0; background: #f1f5f9; }
    @media only screen and (max-width: 620px) {
      .container { width: 100% !important; border-radius: 0 !important; }
      .content { padding: 20px !important; }
      .header { padding: 24px 20px !important; }
    }
";

/// Today's date as shown in the Meeting Details block.
#[must_use]
pub fn display_date(now: DateTime<Utc>, timezone: Tz) -> String {
    now.with_timezone(&timezone)
        .format(DISPLAY_DATE_FORMAT)
        .to_string()
}

/// Composition timestamp as shown in the Meeting Details block.
#[must_use]
pub fn generated_at(now: DateTime<Utc>, timezone: Tz) -> String {
    now.with_timezone(&timezone)
        .format(GENERATED_AT_FORMAT)
        .to_string()
}

/// Wraps formatted summaries in the branded email document.
///
/// Output depends only on the summary, the meeting date, and the clock reading;
/// the generated-at timestamp is the only part that changes between calls.
#[derive(Clone)]
pub struct EmailComposer {
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl Default for EmailComposer {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Tz::UTC)
    }
}

impl EmailComposer {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, timezone: Tz) -> Self {
        Self { clock, timezone }
    }

    /// Builds the document. A blank or absent `meeting_date` falls back to today.
    #[must_use]
    pub fn compose(&self, summary: &str, meeting_date: Option<&str>) -> String {
        let now = self.clock.now();
        let date = meeting_date
            .filter(|d| !d.trim().is_empty())
            .map_or_else(|| display_date(now, self.timezone), ToString::to_string);

        render_document(
            &format_summary(summary),
            &date,
            &generated_at(now, self.timezone),
        )
    }
}

fn render_document(content: &str, date: &str, generated: &str) -> String {
    let logo = LOGO_DATA_URI.as_str();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Meeting Summary</title>
  <style>{RESPONSIVE_CSS}</style>
</head>
<body style="margin: 0; padding: 24px 0; background: #f1f5f9; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; color: #1e293b;">
  <div class="container" style="max-width: 640px; width: 100%; margin: 0 auto; background: #ffffff; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08);">
    <div class="header" style="background: linear-gradient(135deg, #1e40af 0%, #3b82f6 100%); padding: 32px 40px; color: #ffffff;">
      <img src="{logo}" width="40" height="40" alt="{BRAND_NAME}" style="display: inline-block; vertical-align: middle; border: 0;">
      <span style="display: inline-block; vertical-align: middle; margin-left: 12px;">
        <span style="display: block; font-size: 22px; font-weight: 700;">{BRAND_NAME}</span>
        <span style="display: block; font-size: 13px; opacity: 0.85;">{BRAND_TAGLINE}</span>
      </span>
    </div>
    <div class="content" style="padding: 32px 40px;">
      <div class="meeting-info" style="background: #f8fafc; border: 1px solid #e2e8f0; border-left: 4px solid #3b82f6; border-radius: 8px; padding: 16px 20px; margin-bottom: 24px;">
        <div style="font-size: 14px; font-weight: 700; color: #1e40af; text-transform: uppercase; letter-spacing: 0.05em; margin-bottom: 8px;">Meeting Details</div>
        <div style="font-size: 14px; margin: 4px 0;"><strong>Date:</strong> <span class="meeting-date">{date}</span></div>
        <div style="font-size: 14px; margin: 4px 0;"><strong>Generated:</strong> <span class="generated-at">{generated}</span></div>
      </div>
      <hr style="border: 0; border-top: 1px solid #e2e8f0; margin: 24px 0;">
      <div class="summary" style="background: #ffffff; border: 1px solid #e2e8f0; border-radius: 8px; padding: 24px; font-size: 15px; line-height: 1.6; white-space: pre-line;">{content}</div>
    </div>
    <div class="footer" style="background: #f8fafc; border-top: 1px solid #e2e8f0; padding: 20px 40px; text-align: center; font-size: 12px; color: #64748b;">
      <p style="margin: 0 0 4px 0;">This summary was generated automatically by <strong>{BRAND_NAME}</strong>.</p>
      <p style="margin: 0;">Please review action items and reach out to the organizer with any corrections.</p>
    </div>
  </div>
</body>
</html>
"#
    )
}
