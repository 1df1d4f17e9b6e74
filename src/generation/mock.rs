use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{GenerationConfig, GenerationError, TextGenerator};

enum Behavior {
    Reply(String),
    Echo,
    Empty,
    Fail(String),
    Hang,
    Panic,
}

/// Scripted generator for tests. Counts every call it receives.
pub struct StubGenerator {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl StubGenerator {
    fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn reply(text: &str) -> Self {
        Self::new(Behavior::Reply(text.to_string()))
    }

    /// Replies with the prompt it was given.
    pub fn echo() -> Self {
        Self::new(Behavior::Echo)
    }

    pub fn empty() -> Self {
        Self::new(Behavior::Empty)
    }

    pub fn fail(message: &str) -> Self {
        Self::new(Behavior::Fail(message.to_string()))
    }

    /// Never completes.
    pub fn hang() -> Self {
        Self::new(Behavior::Hang)
    }

    pub fn panicking() -> Self {
        Self::new(Behavior::Panic)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(
        &self,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<Option<String>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(config.temperature, 0.5);

        match &self.behavior {
            Behavior::Reply(text) => Ok(Some(text.clone())),
            Behavior::Echo => Ok(Some(prompt.to_string())),
            Behavior::Empty => Ok(None),
            Behavior::Fail(message) => Err(GenerationError::Api {
                status: 429,
                message: message.clone(),
            }),
            Behavior::Hang => std::future::pending().await,
            Behavior::Panic => panic!("stub generator exploded"),
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}
