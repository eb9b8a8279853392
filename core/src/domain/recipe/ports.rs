use std::future::Future;

use crate::domain::recipe::{
    entities::{GeneratedPayload, GenerationError},
    value_objects::GenerationRequest,
};

/// Chat-completion provider used for both recipe text and dish photos.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends a system + user turn and returns the raw text of the first choice.
    fn generate_text(
        &self,
        system_instruction: String,
        prompt: String,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;

    /// Returns the first inline image reference, or `None` when the provider sent none.
    fn generate_image(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<Option<String>, GenerationError>> + Send;
}

/// Service trait for recipe and meal plan generation
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<GeneratedPayload, GenerationError>> + Send;
}
