use std::sync::Arc;

use crate::domain::translation::services::TranslationCache;

/// Entry point of the domain: every service trait is implemented on this type.
pub struct Service<LLM, TP, TS> {
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) translation_cache: TranslationCache<TP, TS>,
}

impl<LLM, TP, TS> Service<LLM, TP, TS> {
    pub fn new(llm_client: LLM, translation_cache: TranslationCache<TP, TS>) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            translation_cache,
        }
    }
}

impl<LLM, TP, TS> Clone for Service<LLM, TP, TS> {
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            translation_cache: self.translation_cache.clone(),
        }
    }
}
