//! Outbound mail transport client (SMTP)

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::errors::MinutesError;

/// Splits a comma-separated recipient string.
///
/// Entries are trimmed and empty ones dropped; order and duplicates are kept.
/// Address validity is left to the transport.
///
/// ```
/// use minutemind::clients::mail_client::parse_recipients;
///
/// assert_eq!(
///     parse_recipients("a@x.com, b@y.com ,, c@z.com"),
///     vec!["a@x.com", "b@y.com", "c@z.com"]
/// );
/// ```
#[must_use]
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Boundary to the external mail transport.
#[async_trait]
pub trait DeliveryGateway: Send + Sync {
    /// Sends `html_body` to every address in the comma-separated `recipients`.
    ///
    /// Missing fields are a `Validation` error; anything the transport rejects
    /// is a `Delivery` error. The send is all-or-nothing.
    async fn send(&self, recipients: &str, subject: &str, html_body: &str)
    -> Result<(), MinutesError>;
}

/// Checks the fields every send needs and returns the parsed recipient list.
pub fn validate_send(
    recipients: &str,
    subject: &str,
    html_body: &str,
) -> Result<Vec<String>, MinutesError> {
    let mut missing = Vec::new();
    if recipients.trim().is_empty() {
        missing.push("to");
    }
    if subject.trim().is_empty() {
        missing.push("subject");
    }
    if html_body.trim().is_empty() {
        missing.push("summary");
    }
    if !missing.is_empty() {
        return Err(MinutesError::missing_fields(&missing));
    }

    let parsed = parse_recipients(recipients);
    if parsed.is_empty() {
        return Err(MinutesError::Validation(
            "No recipients found in 'to'".to_string(),
        ));
    }
    Ok(parsed)
}

/// Plain-text alternative for clients that do not render HTML.
pub fn plain_text_alternative(html_body: &str) -> String {
    html2text::from_read(html_body.as_bytes(), 80).unwrap_or_else(|_| html_body.to_string())
}

/// Builds the multipart message without sending it.
pub fn build_message(
    from: &str,
    recipients: &[String],
    subject: &str,
    html_body: &str,
) -> Result<Message, MinutesError> {
    let mut builder = Message::builder().from(from.parse::<Mailbox>()?).subject(subject);
    for recipient in recipients {
        builder = builder.to(recipient.parse::<Mailbox>()?);
    }

    let message = builder.multipart(MultiPart::alternative_plain_html(
        plain_text_alternative(html_body),
        html_body.to_string(),
    ))?;
    Ok(message)
}

/// Authenticated, pooled connection to the relay.
struct Relay {
    sender: String,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

/// SMTP relay client, authenticated with an account and app-specific password.
///
/// The pooled transport is built once, so warm invocations reuse open
/// connections. Missing credentials are reported on the first `send`.
pub struct SmtpMailer {
    host: String,
    relay: Result<Relay, MinutesError>,
}

impl SmtpMailer {
    /// Must run inside a Tokio runtime when credentials are present; the
    /// connection pool spawns its idle reaper on construction.
    #[must_use]
    pub fn new(host: String, user: Option<String>, pass: Option<String>) -> Self {
        let relay = Self::connect(&host, user, pass);
        if let Err(e) = &relay {
            warn!(host = %host, "SMTP relay unavailable: {}", e);
        }
        Self { host, relay }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.smtp_host.clone(),
            config.smtp_user.clone(),
            config.smtp_pass.clone(),
        )
    }

    fn connect(
        host: &str,
        user: Option<String>,
        pass: Option<String>,
    ) -> Result<Relay, MinutesError> {
        let (sender, pass) = match (user, pass) {
            (Some(user), Some(pass)) => (user, pass),
            (None, _) => return Err(MinutesError::Config("GMAIL_USER is not set".to_string())),
            (_, None) => return Err(MinutesError::Config("GMAIL_PASS is not set".to_string())),
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
            .credentials(Credentials::new(sender.clone(), pass))
            .build();
        Ok(Relay { sender, transport })
    }
}

#[async_trait]
impl DeliveryGateway for SmtpMailer {
    async fn send(
        &self,
        recipients: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), MinutesError> {
        let to = validate_send(recipients, subject, html_body)?;
        let relay = self.relay.as_ref().map_err(Clone::clone)?;

        let message = build_message(&relay.sender, &to, subject, html_body)?;

        info!(
            host = %self.host,
            recipient_count = to.len(),
            "Sending email"
        );
        relay.transport.send(message).await?;
        Ok(())
    }
}
