use crate::relay::ErrorKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentResponse {
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ErrorKind,
}

impl ErrorResponse {
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self {
            error: kind.public_message().to_string(),
            kind,
        }
    }
}
