use axum::extract::State;
use pantry_chef_core::domain::recipe::{
    entities::{GeneratedPayload, Recipe},
    ports::RecipeService,
};
use tracing::{Instrument, info_span};
use uuid::Uuid;

use crate::application::http::{
    recipe::validators::GenerateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/generate-recipe",
    tag = "recipe",
    summary = "Generate a recipe or weekly meal plan",
    description = "Builds a prompt from the pantry ingredients and preferences, asks the text model for a recipe (or a Monday to Sunday plan when planType is weekly) and, for single recipes, attaches a generated dish photo when one could be produced.",
    responses(
        (status = 200, body = Recipe, description = "Single recipe with `imageUrl`, or an object keyed by weekday for weekly plans"),
        (status = 400, body = ErrorBody, description = "No ingredients or malformed body"),
        (status = 402, body = ErrorBody, description = "Provider credits exhausted"),
        (status = 429, body = ErrorBody, description = "Provider rate limit reached"),
        (status = 500, body = ErrorBody, description = "Provider failure or unparseable output")
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GeneratedPayload>, ApiError> {
    let span = info_span!(
        "generate_recipe",
        request_id = %Uuid::now_v7(),
        plan_type = ?payload.plan_type,
        ingredients = payload.ingredients.len(),
    );

    let payload = state
        .service
        .generate_recipe(payload.into())
        .instrument(span)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(payload))
}
