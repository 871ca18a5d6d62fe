use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::domain::{
    common::ports::{Clock, SystemClock},
    translation::{
        entities::{CachedTranslation, TranslationCacheKey, TranslationCachePolicy},
        ports::TranslationStore,
    },
};

/// Process-local translation store. Lives as long as the process; nothing is persisted.
pub struct InMemoryTranslationStore<C = SystemClock> {
    entries: Mutex<HashMap<TranslationCacheKey, CachedTranslation>>,
    policy: TranslationCachePolicy,
    clock: C,
}

impl InMemoryTranslationStore {
    pub fn new(policy: TranslationCachePolicy) -> Self {
        Self::with_clock(policy, SystemClock)
    }
}

impl<C: Clock> InMemoryTranslationStore<C> {
    pub fn with_clock(policy: TranslationCachePolicy, clock: C) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            policy,
            clock,
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<TranslationCacheKey, CachedTranslation>> {
        // The map stays consistent even if a holder panicked.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock> TranslationStore for InMemoryTranslationStore<C> {
    fn get(&self, key: &TranslationCacheKey) -> Option<CachedTranslation> {
        let now = self.clock.now();
        let mut entries = self.entries();

        let expired = self.policy.is_expired(entries.get(key)?, now);
        if expired {
            entries.remove(key);
            return None;
        }

        entries.get(key).cloned()
    }

    fn insert(&self, key: TranslationCacheKey, translated_text: String) {
        let now = self.clock.now();
        let mut entries = self.entries();

        if let Some(max_entries) = self.policy.max_entries {
            if max_entries == 0 {
                return;
            }
            while entries.len() >= max_entries && !entries.contains_key(&key) {
                let Some(oldest) = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.cached_at)
                    .map(|(key, _)| key.clone())
                else {
                    break;
                };
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            CachedTranslation {
                translated_text,
                cached_at: now,
            },
        );
    }

    fn entry_count(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries();

        if self.policy.ttl.is_some() {
            entries.retain(|_, entry| !self.policy.is_expired(entry, now));
        }

        entries.len()
    }

    fn clear(&self) {
        self.entries().clear();
    }
}
