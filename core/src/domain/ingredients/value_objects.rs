use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::meal_plan::entities::{MealSettings, WeeklyMealPlan};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanIngredientsInput {
    #[schema(value_type = Object)]
    pub meals: WeeklyMealPlan,
    pub meal_settings: MealSettings,
}
