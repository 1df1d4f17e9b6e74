use tracing::debug;

use super::TranslationRequest;
use crate::error::TranslateError;
use crate::generation::GenerationInvoker;
use crate::prompt::build_prompt;

/// Builds the prompt for a request and runs it through the bounded generator call.
pub struct TranslationService {
    invoker: GenerationInvoker,
}

impl TranslationService {
    pub fn new(invoker: GenerationInvoker) -> Self {
        Self { invoker }
    }

    pub fn provider_name(&self) -> &str {
        self.invoker.provider_name()
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        debug!("Translating text type: {}", request.text_type);
        debug!("Text to translate: {}", request.text);

        let prompt = build_prompt(request)?;
        debug!("Generated prompt: {}", prompt);

        let translation = self.invoker.invoke(prompt).await?;
        debug!("Received response: {}", translation);
        Ok(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::mock::StubGenerator;
    use std::sync::Arc;
    use std::time::Duration;

    fn request(text_type: &str) -> TranslationRequest {
        TranslationRequest {
            text: "Good morning".to_string(),
            text_type: text_type.to_string(),
            target_language: "French".to_string(),
            source_language: "English".to_string(),
            target_audience: "child".to_string(),
            additional_request: String::new(),
        }
    }

    #[tokio::test]
    async fn test_prompt_reaches_generator() {
        let stub = Arc::new(StubGenerator::echo());
        let service = TranslationService::new(GenerationInvoker::new(
            stub.clone(),
            Duration::from_secs(5),
        ));

        let out = service.translate(&request("literature")).await.unwrap();
        assert!(out.contains("Good morning"));
        assert!(out.contains("into French"));
        assert!(out.contains(crate::prompt::audience_instructions("child")));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_type_never_calls_generator() {
        let stub = Arc::new(StubGenerator::reply("unused"));
        let service = TranslationService::new(GenerationInvoker::new(
            stub.clone(),
            Duration::from_secs(5),
        ));

        let err = service.translate(&request("poem")).await.unwrap_err();
        assert!(matches!(err, TranslateError::TemplateNotFound(_)));
        assert_eq!(stub.calls(), 0);
    }
}
