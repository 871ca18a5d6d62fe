use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Words and symbols that join the components of a dish name.
static MEAL_JOINERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i) with | and |[,&+/]").expect("meal joiner pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealIngredients {
    pub meal: String,
    pub ingredients: Vec<String>,
}

/// Ingredients per meal plus the deduplicated shopping list.
///
/// The default value (`grouped: [], consolidated: []`) doubles as the
/// "nothing usable came back" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientExtractionResult {
    pub grouped: Vec<MealIngredients>,
    pub consolidated: Vec<String>,
}

impl IngredientExtractionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.grouped.is_empty() && self.consolidated.is_empty()
    }

    /// Reads the model's JSON, or `None` when `grouped` or `consolidated` is missing or not an array.
    ///
    /// `grouped` entries may be `{"meal": .., "ingredients": [..]}` or `{"<meal>": [..]}`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let grouped = value.get("grouped")?.as_array()?;
        let consolidated = value.get("consolidated")?.as_array()?;

        let grouped = grouped.iter().filter_map(parse_group).collect();

        Some(Self {
            grouped,
            consolidated: dedup_ingredients(consolidated.iter().filter_map(Value::as_str)),
        })
    }

    /// Client-side heuristic used when the model gives nothing back: split
    /// meal names on common joiners and treat each part as an ingredient.
    /// Blank names are skipped and repeated names are grouped once.
    pub fn fallback_from_meals(meals: &[String]) -> Self {
        let mut seen = HashSet::new();
        let grouped: Vec<MealIngredients> = meals
            .iter()
            .map(|meal| meal.trim())
            .filter(|meal| !meal.is_empty() && seen.insert(meal.to_lowercase()))
            .map(|meal| MealIngredients {
                meal: meal.to_string(),
                ingredients: split_meal_name(meal),
            })
            .collect();

        let consolidated = dedup_ingredients(
            grouped
                .iter()
                .flat_map(|group| group.ingredients.iter().map(String::as_str)),
        );

        Self {
            grouped,
            consolidated,
        }
    }
}

fn parse_group(entry: &Value) -> Option<MealIngredients> {
    let object = entry.as_object()?;

    let (meal, ingredients) = match (object.get("meal"), object.get("ingredients")) {
        (Some(meal), Some(ingredients)) => (meal.as_str()?, ingredients.as_array()?),
        _ if object.len() == 1 => {
            let (meal, ingredients) = object.iter().next()?;
            (meal.as_str(), ingredients.as_array()?)
        }
        _ => return None,
    };

    Some(MealIngredients {
        meal: meal.trim().to_string(),
        ingredients: ingredients
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|ingredient| !ingredient.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

/// Case-insensitive dedup keeping the first spelling seen.
fn dedup_ingredients<'a>(ingredients: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    ingredients
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .filter(|ingredient| seen.insert(ingredient.to_lowercase()))
        .map(str::to_string)
        .collect()
}

fn split_meal_name(meal: &str) -> Vec<String> {
    dedup_ingredients(MEAL_JOINERS.split(meal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_reads_both_group_shapes() {
        let value = json!({
            "grouped": [
                {"meal": "Poha", "ingredients": ["flattened rice", "onion", 3]},
                {"Dal rice": ["toor dal", "rice"]},
                "not a group"
            ],
            "consolidated": ["Onion", "onion", "rice", "toor dal", "flattened rice"]
        });

        let result = IngredientExtractionResult::from_json(&value).unwrap();
        assert_eq!(result.grouped.len(), 2);
        assert_eq!(result.grouped[0].ingredients, vec!["flattened rice", "onion"]);
        assert_eq!(result.grouped[1].meal, "Dal rice");
        assert_eq!(
            result.consolidated,
            vec!["Onion", "rice", "toor dal", "flattened rice"]
        );
    }

    #[test]
    fn test_from_json_requires_both_arrays() {
        assert!(IngredientExtractionResult::from_json(&json!({"grouped": []})).is_none());
        assert!(
            IngredientExtractionResult::from_json(&json!({"grouped": {}, "consolidated": []}))
                .is_none()
        );
        assert!(
            IngredientExtractionResult::from_json(&json!({"grouped": [], "consolidated": "x"}))
                .is_none()
        );
    }

    #[test]
    fn test_fallback_splits_meal_names() {
        let meals = vec![
            "Roti with Paneer Butter Masala".to_string(),
            "Rice and Dal".to_string(),
            "rice".to_string(),
            "  ".to_string(),
        ];

        let result = IngredientExtractionResult::fallback_from_meals(&meals);
        assert_eq!(result.grouped.len(), 3);
        assert_eq!(
            result.grouped[0].ingredients,
            vec!["Roti", "Paneer Butter Masala"]
        );
        assert_eq!(result.consolidated, vec!["Roti", "Paneer Butter Masala", "Rice", "Dal"]);
    }

    #[test]
    fn test_fallback_groups_repeated_meals_once() {
        let meals = vec!["Poha".to_string(), " poha ".to_string()];

        let result = IngredientExtractionResult::fallback_from_meals(&meals);

        assert_eq!(result.grouped.len(), 1);
        assert_eq!(result.grouped[0].meal, "Poha");
        assert_eq!(result.consolidated, vec!["Poha"]);
    }

    #[test]
    fn test_fallback_handles_case_changing_unicode() {
        let meals = vec!["İ and ẞ".to_string(), "Crème brûlée WITH Berries".to_string()];

        let result = IngredientExtractionResult::fallback_from_meals(&meals);

        assert_eq!(result.grouped[0].ingredients, vec!["İ", "ẞ"]);
        assert_eq!(result.grouped[1].ingredients, vec!["Crème brûlée", "Berries"]);
    }
}
