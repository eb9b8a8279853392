use axum::Json;
use pantry_chef_core::domain::recipe::{
    catalog::{CUISINES, MEAL_TYPES},
    entities::Weekday,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub cuisines: Vec<String>,
    pub meal_types: Vec<String>,
    pub weekdays: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/options",
    tag = "recipe",
    summary = "List preset preferences",
    description = "Cuisines and meal types offered by the recipe form, plus the weekday keys of weekly plans. Free-form values are accepted as well.",
    responses(
        (status = 200, body = OptionsResponse)
    )
)]
pub async fn get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        cuisines: CUISINES.iter().map(|c| c.to_string()).collect(),
        meal_types: MEAL_TYPES.iter().map(|m| m.to_string()).collect(),
        weekdays: Weekday::ALL.iter().map(|d| d.to_string()).collect(),
    })
}
