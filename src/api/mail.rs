//! `POST /mail`: compose the summary email and hand it to the transport.

use tracing::info;

use super::parsing::{missing_fields_error, non_blank, parse_json_body};
use super::state::AppState;
use crate::core::models::{MailRequest, MailResponse};
use crate::errors::MinutesError;

/// Where the HTML body comes from.
enum MailBody {
    Summary(String),
    Html(String),
}

pub async fn handle_mail(state: &AppState, body: &str) -> Result<MailResponse, MinutesError> {
    let request: MailRequest = parse_json_body(body)?;
    let to = non_blank(request.to);
    let subject = non_blank(request.subject);
    let mail_body = non_blank(request.summary)
        .map(MailBody::Summary)
        .or_else(|| non_blank(request.html).map(MailBody::Html));

    let (Some(to), Some(subject), Some(mail_body)) =
        (to.as_deref(), subject.as_deref(), mail_body.as_ref())
    else {
        return Err(missing_fields_error(&[
            ("to", to.is_some()),
            ("subject", subject.is_some()),
            ("summary", mail_body.is_some()),
        ]));
    };

    let html = match mail_body {
        MailBody::Summary(summary) => state
            .composer
            .compose(summary, request.meeting_date.as_deref()),
        MailBody::Html(html) => {
            info!("Sending caller-supplied HTML body");
            html.clone()
        }
    };

    state.mailer.send(to, subject, &html).await?;
    info!("Email handed to transport");

    Ok(MailResponse { ok: true })
}
