use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Source language recorded in cache keys when the caller lets the provider detect it.
pub const AUTO_DETECT: &str = "auto";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationCacheKey {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

impl TranslationCacheKey {
    pub fn new(text: &str, target_language: &str, source_language: Option<&str>) -> Self {
        Self {
            text: text.trim().to_string(),
            source_language: source_language
                .map(str::trim)
                .filter(|language| !language.is_empty())
                .unwrap_or(AUTO_DETECT)
                .to_lowercase(),
            target_language: target_language.trim().to_lowercase(),
        }
    }

    /// Source language to send upstream, `None` when it should be detected.
    pub fn source(&self) -> Option<&str> {
        (self.source_language != AUTO_DETECT).then_some(self.source_language.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedTranslation {
    pub translated_text: String,
    pub cached_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationCacheStats {
    pub entries: usize,
}

/// Bounds applied by a translation store. Both unset means entries live until cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationCachePolicy {
    pub max_entries: Option<usize>,
    pub ttl: Option<Duration>,
}

impl TranslationCachePolicy {
    pub fn is_expired(&self, entry: &CachedTranslation, now: DateTime<Utc>) -> bool {
        self.ttl
            .is_some_and(|ttl| now.signed_duration_since(entry.cached_at) >= ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalizes_text_and_languages() {
        let key = TranslationCacheKey::new("  Hello ", "FR", None);
        assert_eq!(key.text, "Hello");
        assert_eq!(key.target_language, "fr");
        assert_eq!(key.source_language, AUTO_DETECT);
        assert_eq!(key.source(), None);

        let key = TranslationCacheKey::new("Hello", "fr", Some("EN"));
        assert_eq!(key.source(), Some("en"));
        assert_ne!(key, TranslationCacheKey::new("Hello", "fr", None));
    }

    #[test]
    fn test_policy_without_ttl_never_expires() {
        let entry = CachedTranslation {
            translated_text: "Bonjour".to_string(),
            cached_at: DateTime::<Utc>::MIN_UTC,
        };
        assert!(!TranslationCachePolicy::default().is_expired(&entry, Utc::now()));
    }
}
