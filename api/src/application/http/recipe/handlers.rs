pub mod generate_recipe;
pub mod get_options;
