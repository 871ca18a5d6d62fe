pub mod clear_cache;
pub mod get_cache_stats;
pub mod translate;
pub mod translate_batch;
