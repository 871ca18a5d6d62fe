use crate::application::http::ingredients::entities::{ShoppingList, ShoppingListResponse};
use crate::application::http::ingredients::validators::ExtractIngredientsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use platewise_core::domain::ingredients::ports::IngredientService;

#[utoipa::path(
    post,
    path = "/extract",
    tag = "ingredients",
    summary = "Extract ingredients",
    description = "Asks the model for the ingredients of each meal and a consolidated shopping list. Falls back to splitting meal names when the model reply is unusable.",
    responses(
        (status = 200, body = ShoppingListResponse),
        (status = 400, description = "No meals given"),
        (status = 502, description = "Model unavailable")
    ),
    request_body = ExtractIngredientsValidator
)]
pub async fn extract_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ExtractIngredientsValidator>,
) -> Result<Response<ShoppingListResponse>, ApiError> {
    let result = state
        .service
        .extract_ingredients(payload.meals.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ShoppingListResponse {
        data: ShoppingList::from_extraction(result, &payload.meals),
    }))
}
