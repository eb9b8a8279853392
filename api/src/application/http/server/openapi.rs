use crate::application::http::{health::HealthApiDoc, recipe::router::RecipeApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Pantry Chef API",
    description = "Recipe and weekly meal plan generation from pantry ingredients"
))]
pub struct ApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
        .merge_from(RecipeApiDoc::openapi())
        .merge_from(HealthApiDoc::openapi())
}
