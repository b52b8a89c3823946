use std::sync::Arc;

use crate::clients::{DeliveryGateway, LlmClient, SmtpMailer, SummarizationGateway};
use crate::core::clock::SystemClock;
use crate::core::config::AppConfig;
use crate::email::EmailComposer;

/// Client handles shared by every request. Built once per Lambda container.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn SummarizationGateway>,
    pub mailer: Arc<dyn DeliveryGateway>,
    pub composer: EmailComposer,
}

impl AppState {
    #[must_use]
    pub fn new(
        summarizer: Arc<dyn SummarizationGateway>,
        mailer: Arc<dyn DeliveryGateway>,
        composer: EmailComposer,
    ) -> Self {
        Self {
            summarizer,
            mailer,
            composer,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(LlmClient::from_config(config)),
            Arc::new(SmtpMailer::from_config(config)),
            EmailComposer::new(Arc::new(SystemClock), config.display_timezone),
        )
    }
}
