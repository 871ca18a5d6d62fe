use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        translation::{entities::TranslationCachePolicy, ports::TranslationProvider},
    },
    infrastructure::translation::memory_store::InMemoryTranslationStore,
};

/// Translates `text` to `text:target` and counts upstream calls.
#[derive(Debug, Default)]
pub struct CountingTranslator {
    calls: AtomicUsize,
}

impl CountingTranslator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TranslationProvider for CountingTranslator {
    async fn translate(
        &self,
        text: String,
        target_language: String,
        _source_language: Option<String>,
    ) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{text}:{target_language}"))
    }
}

pub struct FailingTranslator;

impl TranslationProvider for FailingTranslator {
    async fn translate(
        &self,
        _text: String,
        _target_language: String,
        _source_language: Option<String>,
    ) -> Result<String, CoreError> {
        Err(CoreError::ExternalServiceError(
            "Translation API error: quota exceeded".to_string(),
        ))
    }
}

pub fn test_store() -> InMemoryTranslationStore {
    InMemoryTranslationStore::new(TranslationCachePolicy::default())
}
