use crate::application::http::meal_plan::validators::SuggestMealsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use platewise_core::domain::meal_plan::entities::MealSuggestion;
use platewise_core::domain::meal_plan::ports::MealPlanService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SuggestMealsResponse {
    pub data: MealSuggestion,
}

#[utoipa::path(
    post,
    path = "/suggestions",
    tag = "meal-plan",
    summary = "Suggest a weekly meal plan",
    description = "Builds a prompt from the user's preferences and history and asks the model for a week of meals.",
    responses(
        (status = 200, body = SuggestMealsResponse),
        (status = 400, description = "Invalid preferences"),
        (status = 502, description = "Model unavailable or returned unusable output")
    ),
    request_body = SuggestMealsValidator
)]
pub async fn suggest_meals(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestMealsValidator>,
) -> Result<Response<SuggestMealsResponse>, ApiError> {
    let suggestion = state
        .service
        .suggest_meals(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SuggestMealsResponse { data: suggestion }))
}
