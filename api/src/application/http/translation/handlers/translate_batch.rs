use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::translation::validators::TranslateBatchValidator;
use axum::extract::State;
use platewise_core::domain::translation::ports::TranslationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TranslatedTexts {
    /// Same order and length as the request.
    pub translations: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TranslateBatchResponse {
    pub data: TranslatedTexts,
}

#[utoipa::path(
    post,
    path = "/batch",
    tag = "translation",
    summary = "Translate several texts",
    description = "Translates texts in order. Repeated texts are sent upstream once and cached.",
    responses(
        (status = 200, body = TranslateBatchResponse),
        (status = 400, description = "Batch too large"),
        (status = 502, description = "Translation API unavailable")
    ),
    request_body = TranslateBatchValidator
)]
pub async fn translate_batch(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<TranslateBatchValidator>,
) -> Result<Response<TranslateBatchResponse>, ApiError> {
    let translations = state
        .service
        .translate_batch(
            payload.texts,
            payload.target_language,
            payload.source_language,
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(TranslateBatchResponse {
        data: TranslatedTexts { translations },
    }))
}
