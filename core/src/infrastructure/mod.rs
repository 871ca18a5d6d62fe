pub mod llm;
pub mod translation;
