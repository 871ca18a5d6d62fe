pub mod get_plan_shopping_list;
pub mod preview_prompt;
pub mod suggest_meals;
