use serde_json::Value;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    llm::{
        ports::LLMClient,
        response_parser::{OnParseFailure, parse_with_policy},
    },
    meal_plan::{
        entities::{MealPrompt, MealSuggestion, WeeklyMealPlan},
        ports::MealPlanService,
        prompt::build_meal_prompt,
        value_objects::SuggestMealsInput,
    },
    translation::ports::{TranslationProvider, TranslationStore},
};

impl<LLM, TP, TS> MealPlanService for Service<LLM, TP, TS>
where
    LLM: LLMClient,
    TP: TranslationProvider,
    TS: TranslationStore,
{
    fn preview_prompt(&self, input: &SuggestMealsInput) -> MealPrompt {
        build_meal_prompt(input)
    }

    async fn suggest_meals(&self, input: SuggestMealsInput) -> Result<MealSuggestion, CoreError> {
        let MealPrompt { prompt, .. } = build_meal_prompt(&input);
        let enabled = input.meal_settings.enabled_meal_types();

        tracing::debug!(
            prompt_len = prompt.len(),
            history_weeks = input.meal_history.len(),
            "requesting weekly meal suggestions"
        );

        let raw_response = self.llm_client.generate_text(prompt).await?;

        // A broken plan is never silently emptied.
        let meals = parse_with_policy(&raw_response, OnParseFailure::Throw, |value| match value {
            Value::Object(map) => Some(WeeklyMealPlan::from(map)),
            _ => None,
        })
        .inspect_err(|e| tracing::error!("Failed to parse meal suggestions: {}", e))?;

        let daily_calories = input
            .dietary_preferences
            .show_calories
            .then(|| meals.daily_calories(enabled));

        Ok(MealSuggestion {
            meals,
            daily_calories,
        })
    }
}
