use platewise_core::domain::{
    ingredients::value_objects::PlanIngredientsInput,
    meal_plan::{
        entities::{
            DietaryPreferences, DishPreferences, MealHistoryEntry, MealSettings, WeeklyMealPlan,
        },
        value_objects::SuggestMealsInput,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const MAX_DAILY_CALORIE_TARGET: u32 = 10_000;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SuggestMealsValidator {
    #[validate(custom(function = "validate_calorie_target"))]
    pub dietary_preferences: DietaryPreferences,

    #[validate(length(max = 20, message = "at most 20 cuisines"))]
    pub cuisine_preferences: Vec<String>,

    pub dish_preferences: DishPreferences,

    #[validate(length(max = 50, message = "at most 50 pantry ingredients"))]
    pub pantry_ingredients: Vec<String>,

    pub meal_settings: MealSettings,

    #[validate(length(max = 12, message = "at most 12 weeks of history"))]
    pub meal_history: Vec<MealHistoryEntry>,
}

impl From<SuggestMealsValidator> for SuggestMealsInput {
    fn from(payload: SuggestMealsValidator) -> Self {
        Self {
            dietary_preferences: payload.dietary_preferences,
            cuisine_preferences: payload.cuisine_preferences,
            dish_preferences: payload.dish_preferences,
            pantry_ingredients: payload.pantry_ingredients,
            meal_settings: payload.meal_settings,
            meal_history: payload.meal_history,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlanShoppingListValidator {
    #[schema(value_type = Object)]
    pub meals: WeeklyMealPlan,

    #[serde(default)]
    pub meal_settings: MealSettings,
}

impl From<PlanShoppingListValidator> for PlanIngredientsInput {
    fn from(payload: PlanShoppingListValidator) -> Self {
        Self {
            meals: payload.meals,
            meal_settings: payload.meal_settings,
        }
    }
}

/// Zero is treated as "no target"; anything above a plausible intake is rejected.
fn validate_calorie_target(preferences: &DietaryPreferences) -> Result<(), ValidationError> {
    match preferences.daily_calorie_target {
        Some(target) if target > MAX_DAILY_CALORIE_TARGET => {
            let mut error = ValidationError::new("calorie_target");
            error.message = Some("daily calorie target must be at most 10000".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let payload: SuggestMealsValidator = serde_json::from_str("{}").unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.meal_settings, MealSettings::default());
    }

    #[test]
    fn test_oversized_calorie_target_is_rejected() {
        let payload: SuggestMealsValidator = serde_json::from_value(serde_json::json!({
            "dietaryPreferences": {"dailyCalorieTarget": 50000}
        }))
        .unwrap();

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_too_many_cuisines_are_rejected() {
        let payload = SuggestMealsValidator {
            cuisine_preferences: vec!["Indian".to_string(); 21],
            ..Default::default()
        };

        assert!(payload.validate().is_err());
    }
}
