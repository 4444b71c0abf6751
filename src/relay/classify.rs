//! Maps crate errors onto the closed set of failure kinds callers see.

use crate::Error;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    MissingInput,
    ServerMisconfigured,
    ModelUnavailable,
    QuotaExceeded,
    UpstreamFailure,
    InternalError,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::MissingInput => StatusCode::BAD_REQUEST,
            ErrorKind::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            ErrorKind::ServerMisconfigured
            | ErrorKind::ModelUnavailable
            | ErrorKind::UpstreamFailure
            | ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing message. Provider text is never included.
    pub fn public_message(self) -> &'static str {
        match self {
            ErrorKind::MissingInput => super::validate::QUESTION_REQUIRED,
            ErrorKind::ServerMisconfigured => "Server misconfiguration",
            ErrorKind::ModelUnavailable => "The configured AI model is unavailable",
            ErrorKind::QuotaExceeded => "AI quota exceeded. Please try again later.",
            ErrorKind::UpstreamFailure => "The AI provider returned an empty response",
            ErrorKind::InternalError => "Internal server error",
        }
    }
}

/// Classifies an error. First match wins:
/// credential, then quota, then model reference, else internal.
pub fn classify(error: &Error) -> ErrorKind {
    match error {
        Error::MissingInput(_) => ErrorKind::MissingInput,
        Error::NotConfigured => ErrorKind::ServerMisconfigured,
        Error::EmptyResponse => ErrorKind::UpstreamFailure,
        Error::Provider {
            http_status,
            status,
            message,
        } => classify_provider(*http_status, status.as_deref(), message),
        other => classify_text(&other.to_string()),
    }
}

fn classify_provider(http_status: Option<u16>, status: Option<&str>, message: &str) -> ErrorKind {
    let text = message.to_ascii_lowercase();

    if matches!(http_status, Some(401 | 403))
        || matches!(status, Some("UNAUTHENTICATED" | "PERMISSION_DENIED"))
        || mentions_credential(&text)
    {
        return ErrorKind::ServerMisconfigured;
    }

    if http_status == Some(429) || status == Some("RESOURCE_EXHAUSTED") || mentions_quota(&text) {
        return ErrorKind::QuotaExceeded;
    }

    if status == Some("NOT_FOUND") || mentions_model(&text) {
        return ErrorKind::ModelUnavailable;
    }

    ErrorKind::InternalError
}

fn classify_text(message: &str) -> ErrorKind {
    let text = message.to_ascii_lowercase();

    if mentions_credential(&text) {
        ErrorKind::ServerMisconfigured
    } else if mentions_quota(&text) {
        ErrorKind::QuotaExceeded
    } else if mentions_model(&text) {
        ErrorKind::ModelUnavailable
    } else {
        ErrorKind::InternalError
    }
}

// The helpers below expect lowercase input.

fn mentions_credential(text: &str) -> bool {
    ["api key", "api_key", "apikey", "credential"]
        .iter()
        .any(|needle| text.contains(needle))
}

fn mentions_quota(text: &str) -> bool {
    ["quota", "resource_exhausted", "rate limit", "rate-limit", "429"]
        .iter()
        .any(|needle| text.contains(needle))
}

fn mentions_model(text: &str) -> bool {
    text.contains("model")
}
