use async_trait::async_trait;
use gemini_relay::{
    Error, Result,
    provider::{GenerateContentResponse, ProviderClient},
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stub provider client for testing. Unknown prompts are echoed back
/// in upper case.
#[derive(Debug)]
pub struct StubProvider {
    pub answers: HashMap<String, String>,
    pub default_answer: Option<String>,
    pub error: Option<StubError>,
    pub prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

#[derive(Debug, Clone)]
pub enum StubError {
    Message(String),
    Provider {
        http_status: u16,
        status: String,
        message: String,
    },
}

impl StubProvider {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            default_answer: None,
            error: None,
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_answer(mut self, prompt: &str, answer: &str) -> Self {
        self.answers.insert(prompt.to_string(), answer.to_string());
        self
    }

    /// Answers every prompt without its own entry.
    pub fn with_default_answer(mut self, answer: &str) -> Self {
        self.default_answer = Some(answer.to_string());
        self
    }

    pub fn with_error(mut self, message: &str) -> Self {
        self.error = Some(StubError::Message(message.to_string()));
        self
    }

    pub fn with_provider_error(mut self, http_status: u16, status: &str, message: &str) -> Self {
        self.error = Some(StubError::Provider {
            http_status,
            status: status.to_string(),
            message: message.to_string(),
        });
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for StubProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderClient for StubProvider {
    fn model(&self) -> &str {
        "stub-model"
    }

    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.error {
            Some(StubError::Message(message)) => return Err(Error::internal(message.clone())),
            Some(StubError::Provider {
                http_status,
                status,
                message,
            }) => {
                return Err(Error::provider(
                    Some(*http_status),
                    Some(status.clone()),
                    message.clone(),
                ));
            }
            None => {}
        }

        let answer = self
            .answers
            .get(prompt)
            .cloned()
            .or_else(|| self.default_answer.clone())
            .unwrap_or_else(|| prompt.to_uppercase());

        Ok(GenerateContentResponse::from_text(answer))
    }
}
