use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use futures::future::try_join_all;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    llm::ports::LLMClient,
    translation::{
        entities::{TranslationCacheKey, TranslationCacheStats},
        ports::{TranslationProvider, TranslationService, TranslationStore},
    },
};

/// Translation client that answers repeated requests from a store instead of the provider.
///
/// Two concurrent misses on the same key may both reach the provider; the
/// later write wins, which is harmless because translations of a key do not change.
pub struct TranslationCache<P, S> {
    provider: Arc<P>,
    store: Arc<S>,
}

impl<P, S> Clone for TranslationCache<P, S> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            store: Arc::clone(&self.store),
        }
    }
}

impl<P, S> TranslationCache<P, S>
where
    P: TranslationProvider,
    S: TranslationStore,
{
    pub fn new(provider: P, store: S) -> Self {
        Self {
            provider: Arc::new(provider),
            store: Arc::new(store),
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<String, CoreError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let key = TranslationCacheKey::new(text, target_language, source_language);
        if let Some(hit) = self.store.get(&key) {
            tracing::debug!(target_language = %key.target_language, "translation cache hit");
            return Ok(hit.translated_text);
        }

        self.fetch(&key).await
    }

    pub async fn translate_batch(
        &self,
        texts: &[String],
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<Vec<String>, CoreError> {
        let keys: Vec<Option<TranslationCacheKey>> = texts
            .iter()
            .map(|text| {
                (!text.trim().is_empty())
                    .then(|| TranslationCacheKey::new(text, target_language, source_language))
            })
            .collect();

        let mut resolved: HashMap<TranslationCacheKey, String> = HashMap::new();
        let mut pending = HashSet::new();
        let mut misses = Vec::new();

        for key in keys.iter().flatten() {
            if resolved.contains_key(key) || pending.contains(key) {
                continue;
            }
            match self.store.get(key) {
                Some(hit) => {
                    resolved.insert(key.clone(), hit.translated_text);
                }
                None => {
                    pending.insert(key.clone());
                    misses.push(key.clone());
                }
            }
        }

        tracing::debug!(
            texts = texts.len(),
            hits = resolved.len(),
            misses = misses.len(),
            "translating batch"
        );

        let fetched = try_join_all(misses.into_iter().map(|key| async move {
            let translated = self.fetch(&key).await?;
            Ok::<_, CoreError>((key, translated))
        }))
        .await?;
        resolved.extend(fetched);

        texts
            .iter()
            .zip(keys)
            .map(|(text, key)| match key {
                Some(key) => resolved
                    .get(&key)
                    .cloned()
                    .ok_or(CoreError::InternalServerError),
                None => Ok(text.clone()),
            })
            .collect()
    }

    pub fn stats(&self) -> TranslationCacheStats {
        TranslationCacheStats {
            entries: self.store.entry_count(),
        }
    }

    pub fn clear(&self) {
        self.store.clear();
        tracing::info!("translation cache cleared");
    }

    async fn fetch(&self, key: &TranslationCacheKey) -> Result<String, CoreError> {
        let translated = self
            .provider
            .translate(
                key.text.clone(),
                key.target_language.clone(),
                key.source().map(str::to_string),
            )
            .await?;

        self.store.insert(key.clone(), translated.clone());
        Ok(translated)
    }
}

impl<LLM, TP, TS> TranslationService for Service<LLM, TP, TS>
where
    LLM: LLMClient,
    TP: TranslationProvider,
    TS: TranslationStore,
{
    async fn translate(
        &self,
        text: String,
        target_language: String,
        source_language: Option<String>,
    ) -> Result<String, CoreError> {
        self.translation_cache
            .translate(&text, &target_language, source_language.as_deref())
            .await
    }

    async fn translate_batch(
        &self,
        texts: Vec<String>,
        target_language: String,
        source_language: Option<String>,
    ) -> Result<Vec<String>, CoreError> {
        self.translation_cache
            .translate_batch(&texts, &target_language, source_language.as_deref())
            .await
    }

    fn cache_stats(&self) -> TranslationCacheStats {
        self.translation_cache.stats()
    }

    fn clear_cache(&self) {
        self.translation_cache.clear()
    }
}
