use std::sync::Arc;
use tracing::info;
use anyhow::Result;

use super::gemini::GeminiGenerator;
use super::TextGenerator;
use crate::config::LlmConfig;

/// Factory for creating text generators from configuration
pub struct GeneratorFactory;

impl GeneratorFactory {
    pub fn create_generator(config: &LlmConfig, api_key: String) -> Result<Arc<dyn TextGenerator>> {
        info!("Initializing generator: {}", config.provider);

        match config.provider.as_str() {
            "gemini" => Ok(Arc::new(GeminiGenerator::new(
                config.base_url.clone(),
                config.model.clone(),
                api_key,
            )?)),
            other => Err(anyhow::anyhow!("Unsupported generation provider: {}", other)),
        }
    }
}
