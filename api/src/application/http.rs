pub mod health;
pub mod ingredients;
pub mod meal_plan;
pub mod server;
pub mod translation;
