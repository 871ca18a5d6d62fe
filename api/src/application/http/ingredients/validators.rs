use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExtractIngredientsValidator {
    #[validate(length(min = 1, max = 100, message = "between 1 and 100 meals are required"))]
    pub meals: Vec<String>,
}
