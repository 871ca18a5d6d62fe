use crate::application::http::meal_plan::validators::SuggestMealsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use platewise_core::domain::meal_plan::entities::MealPrompt;
use platewise_core::domain::meal_plan::ports::MealPlanService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PreviewPromptResponse {
    pub data: MealPrompt,
}

#[utoipa::path(
    post,
    path = "/prompt",
    tag = "meal-plan",
    summary = "Preview the meal plan prompt",
    description = "Returns the prompt and response template a suggestion request would send, without calling the model.",
    responses(
        (status = 200, body = PreviewPromptResponse),
        (status = 400, description = "Invalid preferences")
    ),
    request_body = SuggestMealsValidator
)]
pub async fn preview_prompt(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestMealsValidator>,
) -> Result<Response<PreviewPromptResponse>, ApiError> {
    let prompt = state.service.preview_prompt(&payload.into());

    Ok(Response::OK(PreviewPromptResponse { data: prompt }))
}
