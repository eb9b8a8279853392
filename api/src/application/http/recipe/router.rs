use super::handlers::{
    generate_recipe::{__path_generate_recipe, generate_recipe},
    get_options::{__path_get_options, get_options},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, get_options))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate-recipe", state.args.server.root_path),
            post(generate_recipe).options(|| async { StatusCode::OK }),
        )
        .route(
            &format!("{}/options", state.args.server.root_path),
            get(get_options),
        )
}
