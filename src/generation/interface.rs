use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Sampling temperature used for every generation call.
pub const GENERATION_TEMPERATURE: f32 = 0.5;

/// Tunable parameters sent alongside the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: GENERATION_TEMPERATURE,
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Generation API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    #[error("Generation task failed: {0}")]
    Task(String),
}

/// A text-generation backend. Stateless: each call carries the full prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`.
    ///
    /// Returns `Ok(None)` when the provider answered but produced no text.
    async fn generate(
        &self,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<Option<String>, GenerationError>;

    fn name(&self) -> &str;
}
