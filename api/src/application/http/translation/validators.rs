use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateValidator {
    #[validate(length(min = 1, max = 5000, message = "text must be 1 to 5000 characters"))]
    pub text: String,

    #[validate(length(min = 2, max = 16, message = "targetLanguage is required"))]
    pub target_language: String,

    /// Detected upstream when absent.
    #[serde(default)]
    #[validate(length(min = 2, max = 16))]
    pub source_language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateBatchValidator {
    #[validate(length(max = 200, message = "at most 200 texts per batch"))]
    pub texts: Vec<String>,

    #[validate(length(min = 2, max = 16, message = "targetLanguage is required"))]
    pub target_language: String,

    #[serde(default)]
    #[validate(length(min = 2, max = 16))]
    pub source_language: Option<String>,
}
