use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use platewise_core::domain::translation::entities::TranslationCacheStats;
use platewise_core::domain::translation::ports::TranslationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CacheStatsResponse {
    pub data: TranslationCacheStats,
}

#[utoipa::path(
    get,
    path = "/cache",
    tag = "translation",
    summary = "Translation cache stats",
    responses(
        (status = 200, body = CacheStatsResponse)
    )
)]
pub async fn get_cache_stats(
    State(state): State<AppState>,
) -> Result<Response<CacheStatsResponse>, ApiError> {
    Ok(Response::OK(CacheStatsResponse {
        data: state.service.cache_stats(),
    }))
}
