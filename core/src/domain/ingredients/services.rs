use std::collections::HashSet;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredients::{
        entities::IngredientExtractionResult, ports::IngredientService,
        prompt::build_ingredient_prompt, value_objects::PlanIngredientsInput,
    },
    llm::{
        ports::LLMClient,
        response_parser::{OnParseFailure, parse_with_policy},
    },
    translation::ports::{TranslationProvider, TranslationStore},
};

impl<LLM, TP, TS> IngredientService for Service<LLM, TP, TS>
where
    LLM: LLMClient,
    TP: TranslationProvider,
    TS: TranslationStore,
{
    async fn extract_ingredients(
        &self,
        meals: Vec<String>,
    ) -> Result<IngredientExtractionResult, CoreError> {
        let meals = distinct_meals(meals);
        if meals.is_empty() {
            return Ok(IngredientExtractionResult::empty());
        }

        let raw_response = self
            .llm_client
            .generate_text(build_ingredient_prompt(&meals))
            .await?;

        let result = parse_with_policy(
            &raw_response,
            OnParseFailure::EmptyResult,
            |value| IngredientExtractionResult::from_json(&value),
        )?;

        if result.is_empty() {
            tracing::warn!(
                meals = meals.len(),
                "ingredient extraction returned nothing usable"
            );
        }

        Ok(result)
    }

    async fn extract_plan_ingredients(
        &self,
        input: PlanIngredientsInput,
    ) -> Result<IngredientExtractionResult, CoreError> {
        let meals = input
            .meals
            .meal_names(input.meal_settings.enabled_meal_types());

        self.extract_ingredients(meals).await
    }
}

fn distinct_meals(meals: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    meals
        .into_iter()
        .map(|meal| meal.trim().to_string())
        .filter(|meal| !meal.is_empty() && seen.insert(meal.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use serde_json::json;

    use super::*;
    use crate::domain::{
        meal_plan::entities::{MealSettings, MealType},
        translation::{
            services::TranslationCache,
            test_support::{CountingTranslator, test_store},
        },
    };

    struct ScriptedLLM {
        response: String,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl ScriptedLLM {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }
    }

    impl LLMClient for ScriptedLLM {
        async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt);
            Ok(self.response.clone())
        }
    }

    fn service(response: &str) -> Service<ScriptedLLM, CountingTranslator, impl TranslationStore> {
        Service::new(
            ScriptedLLM::new(response),
            TranslationCache::new(CountingTranslator::default(), test_store()),
        )
    }

    #[tokio::test]
    async fn test_extract_ingredients_parses_grouped_and_consolidated() {
        let response = format!(
            "Sure! ```json\n{}\n```",
            json!({
                "grouped": [
                    {"meal": "Poha", "ingredients": ["flattened rice", "onion", "peanuts"]},
                    {"meal": "Upma", "ingredients": ["semolina", "onion"]}
                ],
                "consolidated": ["flattened rice", "onion", "peanuts", "semolina"]
            })
        );
        let service = service(&response);

        let result = service
            .extract_ingredients(vec!["Poha".into(), "Upma".into()])
            .await
            .unwrap();

        assert_eq!(result.grouped.len(), 2);
        assert_eq!(result.grouped[1].meal, "Upma");
        assert_eq!(result.consolidated.len(), 4);
    }

    #[tokio::test]
    async fn test_malformed_response_degrades_to_empty() {
        for response in [
            "I could not work that out.",
            "{\"grouped\": [\"oops\"",
            "{\"ingredients\": [\"rice\"]}",
            "{\"grouped\": {}, \"consolidated\": []}",
        ] {
            let service = service(response);

            let result = service
                .extract_ingredients(vec!["Poha".into()])
                .await
                .unwrap();

            assert_eq!(result, IngredientExtractionResult::empty());
        }
    }

    #[tokio::test]
    async fn test_blank_and_duplicate_meals_are_dropped() {
        let service = service("{\"grouped\": [], \"consolidated\": []}");

        service
            .extract_ingredients(vec!["Poha".into(), " poha ".into(), "".into(), "Idli".into()])
            .await
            .unwrap();

        let prompt = service.llm_client.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("- Poha\n- Idli\n"));
    }

    #[tokio::test]
    async fn test_no_meals_skips_the_model() {
        let service = service("unused");

        let result = service
            .extract_ingredients(vec!["   ".into()])
            .await
            .unwrap();

        assert!(result.is_empty());
        assert_eq!(service.llm_client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_plan_ingredients_use_enabled_meal_names() {
        let service = service("{\"grouped\": [], \"consolidated\": [\"rice\"]}");
        let meals = serde_json::from_value(json!({
            "monday": {"breakfast": "Poha", "lunch": {"name": "Dal rice", "calories": 500}},
            "tuesday": {"breakfast": "Poha", "dinner": "Pulao"}
        }))
        .unwrap();

        let result = service
            .extract_plan_ingredients(PlanIngredientsInput {
                meals,
                meal_settings: MealSettings::new([MealType::Breakfast, MealType::Lunch]).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(result.consolidated, vec!["rice"]);
        let prompt = service.llm_client.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("- Poha\n- Dal rice\n"));
        assert!(!prompt.contains("Pulao"));
    }
}
