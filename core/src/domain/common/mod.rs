pub mod entities;
pub mod ports;
pub mod services;

/// Model used when no override is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Clone, Debug)]
pub struct PlatewiseConfig {
    pub llm: LLMConfig,
    pub translation: TranslationConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

#[derive(Clone, Debug)]
pub struct TranslationConfig {
    pub google_api_key: String,
    pub cache_max_entries: Option<usize>,
    pub cache_ttl_seconds: Option<u64>,
}
