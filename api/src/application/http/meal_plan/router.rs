use super::handlers::{
    get_plan_shopping_list::{__path_get_plan_shopping_list, get_plan_shopping_list},
    preview_prompt::{__path_preview_prompt, preview_prompt},
    suggest_meals::{__path_suggest_meals, suggest_meals},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(suggest_meals, preview_prompt, get_plan_shopping_list))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/meal-plans/suggestions", state.args.server.root_path),
            post(suggest_meals),
        )
        .route(
            &format!("{}/meal-plans/prompt", state.args.server.root_path),
            post(preview_prompt),
        )
        .route(
            &format!("{}/meal-plans/shopping-list", state.args.server.root_path),
            post(get_plan_shopping_list),
        )
}
