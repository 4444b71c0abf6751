use crate::{Error, Result, provider::ProviderClient};
use tracing::{info, warn};

const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
}

/// Runs one generation call and extracts its text.
///
/// An empty or absent text payload is an error even though the call
/// itself succeeded.
pub async fn generate(client: &dyn ProviderClient, prompt: &str) -> Result<GenerationResult> {
    let response = client.generate_content(prompt).await?;

    if let Some(reason) = response.block_reason() {
        warn!("Provider blocked prompt: {}", reason);
    }

    let text = response.text().unwrap_or_default();

    info!(
        prompt_preview = %preview(prompt),
        result_len = text.len(),
        model = client.model(),
        "Generation finished"
    );

    if text.is_empty() {
        return Err(Error::EmptyResponse);
    }

    Ok(GenerationResult { text })
}

fn preview(prompt: &str) -> String {
    match prompt.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &prompt[..idx]),
        None => prompt.to_string(),
    }
}
