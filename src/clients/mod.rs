//! Clients for the two external services: the text-generation provider and
//! the mail transport.

pub mod llm_client;
pub mod mail_client;

pub use llm_client::{LlmClient, SummarizationGateway};
pub use mail_client::{DeliveryGateway, SmtpMailer, parse_recipients};
