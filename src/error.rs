use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("API key not configured")]
    NotConfigured,

    #[error("Provider error ({}): {message}", .status.as_deref().unwrap_or("unknown"))]
    Provider {
        http_status: Option<u16>,
        status: Option<String>,
        message: String,
    },

    #[error("Provider returned no text")]
    EmptyResponse,

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for Error {
    // The request URL carries the model path, which must not leak into
    // message-based classification.
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.without_url())
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    pub fn provider(http_status: Option<u16>, status: Option<String>, msg: impl Into<String>) -> Self {
        Self::Provider {
            http_status,
            status,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_provider_error_display() {
        let err = Error::provider(
            Some(429),
            Some("RESOURCE_EXHAUSTED".to_string()),
            "Quota exceeded for metric",
        );
        assert_eq!(
            err.to_string(),
            "Provider error (RESOURCE_EXHAUSTED): Quota exceeded for metric"
        );
    }

    #[test]
    fn test_provider_error_display_without_status() {
        let err = Error::provider(None, None, "boom");
        assert_eq!(err.to_string(), "Provider error (unknown): boom");
    }

    #[test]
    fn test_not_configured_display() {
        assert_eq!(Error::NotConfigured.to_string(), "API key not configured");
    }
}
