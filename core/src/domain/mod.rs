pub mod common;
pub mod ingredients;
pub mod llm;
pub mod meal_plan;
pub mod translation;
