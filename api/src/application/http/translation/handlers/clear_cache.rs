use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use platewise_core::domain::translation::entities::TranslationCacheStats;
use platewise_core::domain::translation::ports::TranslationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClearCacheResponse {
    pub data: TranslationCacheStats,
}

#[utoipa::path(
    delete,
    path = "/cache",
    tag = "translation",
    summary = "Clear the translation cache",
    description = "Drops every cached translation and returns the stats after clearing.",
    responses(
        (status = 200, body = ClearCacheResponse)
    )
)]
pub async fn clear_cache(
    State(state): State<AppState>,
) -> Result<Response<ClearCacheResponse>, ApiError> {
    state.service.clear_cache();

    Ok(Response::OK(ClearCacheResponse {
        data: state.service.cache_stats(),
    }))
}
