use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum MinutesError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to parse request: {0}")]
    Parse(String),

    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Failed to access text-generation provider: {0}")]
    Provider(String),

    #[error("Failed to deliver email: {0}")]
    Delivery(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("No route for {0}")]
    NotFound(String),

    /// Error response relayed from the HTTP API.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl MinutesError {
    /// HTTP status the API surfaces for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            MinutesError::Validation(_) | MinutesError::Parse(_) => 400,
            MinutesError::NotFound(_) => 404,
            MinutesError::MethodNotAllowed(_) => 405,
            MinutesError::Config(_)
            | MinutesError::Provider(_)
            | MinutesError::Delivery(_)
            | MinutesError::HttpError(_) => 500,
            MinutesError::Api { status, .. } => *status,
        }
    }

    /// Builds a validation error naming every missing field.
    #[must_use]
    pub fn missing_fields(fields: &[&str]) -> Self {
        MinutesError::Validation(format!("Missing required field(s): {}", fields.join(", ")))
    }
}

impl From<reqwest::Error> for MinutesError {
    fn from(error: reqwest::Error) -> Self {
        MinutesError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for MinutesError {
    fn from(error: serde_json::Error) -> Self {
        MinutesError::Parse(error.to_string())
    }
}

impl From<lettre::error::Error> for MinutesError {
    fn from(error: lettre::error::Error) -> Self {
        MinutesError::Delivery(error.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for MinutesError {
    fn from(error: lettre::transport::smtp::Error) -> Self {
        MinutesError::Delivery(error.to_string())
    }
}

impl From<lettre::address::AddressError> for MinutesError {
    fn from(error: lettre::address::AddressError) -> Self {
        MinutesError::Delivery(format!("Invalid address: {error}"))
    }
}
