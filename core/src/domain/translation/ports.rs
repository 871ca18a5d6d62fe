use crate::domain::{
    common::entities::app_errors::CoreError,
    translation::entities::{CachedTranslation, TranslationCacheKey, TranslationCacheStats},
};

/// Upstream translation API
#[cfg_attr(test, mockall::automock)]
pub trait TranslationProvider: Send + Sync {
    fn translate(
        &self,
        text: String,
        target_language: String,
        source_language: Option<String>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Storage behind the translation cache
#[cfg_attr(test, mockall::automock)]
pub trait TranslationStore: Send + Sync {
    /// Returns the live entry for `key`; expired entries are dropped and reported as misses.
    fn get(&self, key: &TranslationCacheKey) -> Option<CachedTranslation>;

    fn insert(&self, key: TranslationCacheKey, translated_text: String);

    fn entry_count(&self) -> usize;

    fn clear(&self);
}

/// Service trait for cached translations
#[cfg_attr(test, mockall::automock)]
pub trait TranslationService: Send + Sync {
    fn translate(
        &self,
        text: String,
        target_language: String,
        source_language: Option<String>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Same length and order as `texts`; each distinct text is fetched at most once.
    fn translate_batch(
        &self,
        texts: Vec<String>,
        target_language: String,
        source_language: Option<String>,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn cache_stats(&self) -> TranslationCacheStats;

    fn clear_cache(&self);
}
