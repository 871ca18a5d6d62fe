pub mod google_translate_client;
pub mod memory_store;

pub use google_translate_client::GoogleTranslateClient;
pub use memory_store::InMemoryTranslationStore;
