use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::meal_plan::entities::{
    DietaryPreferences, DishPreferences, MealHistoryEntry, MealSettings,
};

/// Everything the prompt builder needs to know about a user for one suggestion call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestMealsInput {
    pub dietary_preferences: DietaryPreferences,
    pub cuisine_preferences: Vec<String>,
    pub dish_preferences: DishPreferences,
    pub pantry_ingredients: Vec<String>,
    pub meal_settings: MealSettings,
    /// Most recent week first.
    pub meal_history: Vec<MealHistoryEntry>,
}
