use super::handlers::{
    clear_cache::{__path_clear_cache, clear_cache},
    get_cache_stats::{__path_get_cache_stats, get_cache_stats},
    translate::{__path_translate, translate},
    translate_batch::{__path_translate_batch, translate_batch},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(translate, translate_batch, get_cache_stats, clear_cache))]
pub struct TranslationApiDoc;

pub fn translation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/translations", state.args.server.root_path),
            post(translate),
        )
        .route(
            &format!("{}/translations/batch", state.args.server.root_path),
            post(translate_batch),
        )
        .route(
            &format!("{}/translations/cache", state.args.server.root_path),
            get(get_cache_stats).delete(clear_cache),
        )
}
