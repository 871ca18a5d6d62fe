use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::{MealPrompt, MealSuggestion},
        value_objects::SuggestMealsInput,
    },
};

/// Service trait for weekly meal suggestions
#[cfg_attr(test, mockall::automock)]
pub trait MealPlanService: Send + Sync {
    /// Renders the prompt that `suggest_meals` would send, without calling the model.
    fn preview_prompt(&self, input: &SuggestMealsInput) -> MealPrompt;

    fn suggest_meals(
        &self,
        input: SuggestMealsInput,
    ) -> impl Future<Output = Result<MealSuggestion, CoreError>> + Send;
}
