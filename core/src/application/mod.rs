use chrono::Duration;

use crate::{
    domain::{
        common::{PlatewiseConfig, entities::app_errors::CoreError, services::Service},
        translation::{entities::TranslationCachePolicy, services::TranslationCache},
    },
    infrastructure::{
        llm::GeminiLLMClient,
        translation::{GoogleTranslateClient, InMemoryTranslationStore},
    },
};

pub type PlatewiseService =
    Service<GeminiLLMClient, GoogleTranslateClient, InMemoryTranslationStore>;

pub fn create_service(config: PlatewiseConfig) -> Result<PlatewiseService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        return Err(CoreError::Invalid("Gemini API key is required".to_string()));
    }
    if config.translation.google_api_key.trim().is_empty() {
        return Err(CoreError::Invalid(
            "Google Translate API key is required".to_string(),
        ));
    }

    let ttl = config
        .translation
        .cache_ttl_seconds
        .map(|seconds| {
            i64::try_from(seconds)
                .ok()
                .and_then(Duration::try_seconds)
                .unwrap_or(Duration::MAX)
        });

    let policy = TranslationCachePolicy {
        max_entries: config.translation.cache_max_entries,
        ttl,
    };

    tracing::info!(
        model = %config.llm.gemini_model,
        max_entries = ?policy.max_entries,
        ttl_seconds = ?config.translation.cache_ttl_seconds,
        "creating platewise service"
    );

    let llm_client = GeminiLLMClient::new(config.llm.gemini_api_key, config.llm.gemini_model);
    let translation_cache = TranslationCache::new(
        GoogleTranslateClient::new(config.translation.google_api_key),
        InMemoryTranslationStore::new(policy),
    );

    Ok(Service::new(llm_client, translation_cache))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{LLMConfig, TranslationConfig},
        translation::ports::TranslationService,
    };

    fn config(gemini_api_key: &str, google_api_key: &str) -> PlatewiseConfig {
        PlatewiseConfig {
            llm: LLMConfig {
                gemini_api_key: gemini_api_key.to_string(),
                gemini_model: "gemini-2.0-flash".to_string(),
            },
            translation: TranslationConfig {
                google_api_key: google_api_key.to_string(),
                cache_max_entries: Some(100),
                cache_ttl_seconds: Some(u64::MAX),
            },
        }
    }

    #[test]
    fn test_missing_keys_are_rejected() {
        assert!(matches!(
            create_service(config("", "translate-key")),
            Err(CoreError::Invalid(_))
        ));
        assert!(matches!(
            create_service(config("gemini-key", " ")),
            Err(CoreError::Invalid(_))
        ));
    }

    #[test]
    fn test_service_starts_with_empty_cache() {
        let service = create_service(config("gemini-key", "translate-key")).unwrap();
        assert_eq!(service.cache_stats().entries, 0);
    }
}
