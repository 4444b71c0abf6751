use crate::{Error, Result};
use serde_json::Value;

pub const QUESTION_REQUIRED: &str = "Question is required";

/// A validated prompt. `question` is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub question: String,
}

impl PromptRequest {
    /// Validates the raw request body.
    ///
    /// The body must be a JSON object whose `question` field is a string
    /// with at least one non-whitespace character. The trimmed value is
    /// kept; nothing else is normalized.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Err(Error::missing_input("request body is empty"));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| Error::missing_input(format!("body is not valid JSON: {e}")))?;

        let question = match value.get("question") {
            Some(Value::String(question)) => question,
            Some(_) => return Err(Error::missing_input("question must be a string")),
            None => return Err(Error::missing_input("question field is missing")),
        };

        let trimmed = question.trim();
        if trimmed.is_empty() {
            return Err(Error::missing_input("question is blank"));
        }

        Ok(Self {
            question: trimmed.to_string(),
        })
    }
}
