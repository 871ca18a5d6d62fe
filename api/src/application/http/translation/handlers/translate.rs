use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::translation::validators::TranslateValidator;
use axum::extract::State;
use platewise_core::domain::translation::ports::TranslationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedText {
    pub translated_text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TranslateResponse {
    pub data: TranslatedText,
}

#[utoipa::path(
    post,
    path = "",
    tag = "translation",
    summary = "Translate text",
    description = "Translates a single text, answering from the cache when the same text and languages were seen before.",
    responses(
        (status = 200, body = TranslateResponse),
        (status = 502, description = "Translation API unavailable")
    ),
    request_body = TranslateValidator
)]
pub async fn translate(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<TranslateValidator>,
) -> Result<Response<TranslateResponse>, ApiError> {
    let translated_text = state
        .service
        .translate(
            payload.text,
            payload.target_language,
            payload.source_language,
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(TranslateResponse {
        data: TranslatedText { translated_text },
    }))
}
