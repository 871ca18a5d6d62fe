use platewise_core::domain::ingredients::entities::IngredientExtractionResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IngredientSource {
    Ai,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    pub source: IngredientSource,
    #[serde(flatten)]
    pub ingredients: IngredientExtractionResult,
}

impl ShoppingList {
    /// Falls back to splitting meal names when the model returned nothing usable.
    pub fn from_extraction(result: IngredientExtractionResult, meals: &[String]) -> Self {
        if result.is_empty() && !meals.is_empty() {
            tracing::info!(meals = meals.len(), "using fallback shopping list");
            return Self {
                source: IngredientSource::Fallback,
                ingredients: IngredientExtractionResult::fallback_from_meals(meals),
            };
        }

        Self {
            source: IngredientSource::Ai,
            ingredients: result,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ShoppingListResponse {
    pub data: ShoppingList,
}

#[cfg(test)]
mod tests {
    use super::*;
    use platewise_core::domain::ingredients::entities::MealIngredients;

    #[test]
    fn test_empty_extraction_uses_fallback() {
        let meals = vec!["Dal and rice".to_string()];

        let list = ShoppingList::from_extraction(IngredientExtractionResult::empty(), &meals);

        assert_eq!(list.source, IngredientSource::Fallback);
        assert_eq!(list.ingredients.grouped[0].meal, "Dal and rice");
        assert!(!list.ingredients.consolidated.is_empty());
    }

    #[test]
    fn test_model_result_is_kept() {
        let result = IngredientExtractionResult {
            grouped: vec![MealIngredients {
                meal: "Poha".to_string(),
                ingredients: vec!["flattened rice".to_string()],
            }],
            consolidated: vec!["flattened rice".to_string()],
        };

        let list = ShoppingList::from_extraction(result.clone(), &["Poha".to_string()]);

        assert_eq!(list.source, IngredientSource::Ai);
        assert_eq!(list.ingredients, result);
    }

    #[test]
    fn test_flattened_serialization() {
        let list = ShoppingList::from_extraction(IngredientExtractionResult::empty(), &[]);

        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            serde_json::json!({"source": "ai", "grouped": [], "consolidated": []})
        );
    }
}
