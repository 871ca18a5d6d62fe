use crate::application::http::ingredients::entities::{ShoppingList, ShoppingListResponse};
use crate::application::http::meal_plan::validators::PlanShoppingListValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use platewise_core::domain::ingredients::ports::IngredientService;
use platewise_core::domain::ingredients::value_objects::PlanIngredientsInput;

#[utoipa::path(
    post,
    path = "/shopping-list",
    tag = "meal-plan",
    summary = "Shopping list for a meal plan",
    description = "Collects the distinct meals of the enabled meal types and extracts their ingredients.",
    responses(
        (status = 200, body = ShoppingListResponse),
        (status = 502, description = "Model unavailable")
    ),
    request_body = PlanShoppingListValidator
)]
pub async fn get_plan_shopping_list(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PlanShoppingListValidator>,
) -> Result<Response<ShoppingListResponse>, ApiError> {
    let input = PlanIngredientsInput::from(payload);
    let meals = input
        .meals
        .meal_names(input.meal_settings.enabled_meal_types());

    let result = state
        .service
        .extract_plan_ingredients(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ShoppingListResponse {
        data: ShoppingList::from_extraction(result, &meals),
    }))
}
