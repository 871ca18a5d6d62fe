use crate::application::http::{
    health::HealthApiDoc, ingredients::router::IngredientsApiDoc,
    meal_plan::router::MealPlanApiDoc, translation::router::TranslationApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Platewise API"
    ),
    nest(
        (path = "/meal-plans", api = MealPlanApiDoc),
        (path = "/ingredients", api = IngredientsApiDoc),
        (path = "/translations", api = TranslationApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
