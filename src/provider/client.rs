use super::types::*;
use crate::{
    Error, Result,
    config::{ApiKey, ProviderConfig},
};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait ProviderClient: Send + Sync {
    fn model(&self) -> &str;

    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: ApiKey,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: ApiKey, config: &ProviderConfig, model: &str) -> Self {
        let endpoint = format!(
            "{}/{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.api_version,
            model
        );

        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl ProviderClient for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        debug!("Sending generateContent request to model {}", self.model);

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(parse_api_error(status.as_u16(), &body));
        }

        let body: GenerateContentResponse = response.json().await?;

        debug!(
            "Received generateContent response with {} candidates",
            body.candidates.len()
        );

        Ok(body)
    }
}

fn parse_api_error(http_status: u16, body: &str) -> Error {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => Error::provider(
            Some(parsed.error.code.unwrap_or(http_status)),
            parsed.error.status,
            parsed.error.message,
        ),
        Err(_) => Error::provider(Some(http_status), None, body.trim()),
    }
}
