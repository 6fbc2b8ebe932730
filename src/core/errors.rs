use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Invalid book value: {0}")]
    InvalidBook(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to deserialize response: {0}")]
    DeserializationError(String),

    #[error("Failed to serialize request: {0}")]
    SerializationError(String),

    /// Error reported by the exchange inside an otherwise decodable response.
    #[error("{message} (code: {code})")]
    ApiError {
        code: i64,
        message: String,
        status: i64,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl ExchangeError {
    /// Numeric exchange code when this is an embedded API error
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True for failures detected locally before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidBook(_))
    }
}
