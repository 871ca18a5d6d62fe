use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredients::{entities::IngredientExtractionResult, value_objects::PlanIngredientsInput},
};

/// Service trait for turning meal names into shopping-list ingredients
#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    /// Best effort: an unusable model reply yields the empty result instead of an error.
    fn extract_ingredients(
        &self,
        meals: Vec<String>,
    ) -> impl Future<Output = Result<IngredientExtractionResult, CoreError>> + Send;

    fn extract_plan_ingredients(
        &self,
        input: PlanIngredientsInput,
    ) -> impl Future<Output = Result<IngredientExtractionResult, CoreError>> + Send;
}
