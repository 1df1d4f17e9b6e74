use std::sync::Arc;

use crate::config::Config;
use crate::generation::{GenerationInvoker, TextGenerator};
use crate::translate::TranslationService;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<TranslationService>,
}

impl AppState {
    pub fn new(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        let invoker = GenerationInvoker::new(generator, config.request_timeout());

        Self {
            config: Arc::new(config),
            translator: Arc::new(TranslationService::new(invoker)),
        }
    }
}
