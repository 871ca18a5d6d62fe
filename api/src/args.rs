use clap::{ArgAction, Args as ClapArgs, Parser};
use platewise_core::domain::common::{
    DEFAULT_GEMINI_MODEL, LLMConfig, PlatewiseConfig, TranslationConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "platewise", version, about = "Platewise meal planning API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub translation: TranslationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct TranslationArgs {
    #[arg(long = "google-translate-api-key", env = "GOOGLE_TRANSLATE_API_KEY")]
    pub google_translate_api_key: String,

    /// Unbounded when unset.
    #[arg(
        long = "translation-cache-max-entries",
        env = "TRANSLATION_CACHE_MAX_ENTRIES"
    )]
    pub cache_max_entries: Option<usize>,

    /// Entries never expire when unset.
    #[arg(
        long = "translation-cache-ttl-seconds",
        env = "TRANSLATION_CACHE_TTL_SECONDS"
    )]
    pub cache_ttl_seconds: Option<u64>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for PlatewiseConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
            translation: TranslationConfig {
                google_api_key: args.translation.google_translate_api_key,
                cache_max_entries: args.translation.cache_max_entries,
                cache_ttl_seconds: args.translation.cache_ttl_seconds,
            },
        }
    }
}
