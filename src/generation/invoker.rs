use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

use super::{GenerationConfig, GenerationError, TextGenerator};
use crate::error::TranslateError;

/// Aborts the wrapped task when dropped.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs one generation call with an upper bound on how long the caller waits.
#[derive(Clone)]
pub struct GenerationInvoker {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl GenerationInvoker {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub fn provider_name(&self) -> &str {
        self.generator.name()
    }

    /// Submit `prompt` with the fixed generation config.
    ///
    /// The call runs on its own task and is raced against the timeout; exactly one of the
    /// two outcomes reaches the caller. The task is aborted on timeout and whenever this
    /// future is dropped before completing.
    pub async fn invoke(&self, prompt: String) -> Result<String, TranslateError> {
        let generator = self.generator.clone();
        let mut task = AbortOnDrop(tokio::spawn(async move {
            generator.generate(&prompt, GenerationConfig::default()).await
        }));

        let joined = match tokio::time::timeout(self.timeout, &mut task.0).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!(
                    "{} did not respond within {:?}, abandoning call",
                    self.generator.name(),
                    self.timeout
                );
                return Err(TranslateError::Timeout(self.timeout));
            }
        };

        let output = joined.map_err(|e| GenerationError::Task(e.to_string()))??;
        match output {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(TranslateError::EmptyResult),
        }
    }
}
