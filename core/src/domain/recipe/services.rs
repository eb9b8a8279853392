use crate::domain::{
    common::services::Service,
    recipe::{
        entities::{GeneratedPayload, GenerationError},
        normalize::{parse_recipe, parse_weekly_plan},
        ports::{LLMClient, RecipeService},
        prompt::{SYSTEM_INSTRUCTION, build_prompt, image_prompt},
        value_objects::{GenerationRequest, PlanType},
    },
};

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_recipe(
        &self,
        request: GenerationRequest,
    ) -> Result<GeneratedPayload, GenerationError> {
        // 1. Validate before any provider call
        if request.normalized_ingredients().is_empty() {
            tracing::warn!(stage = "validating", "Rejected request without ingredients");
            return Err(GenerationError::Validation(
                "No ingredients provided".to_string(),
            ));
        }

        // 2. Generate recipe text
        let prompt = build_prompt(&request);
        tracing::info!(
            stage = "text_generating",
            plan_type = ?request.plan_type,
            "Calling text model"
        );
        tracing::debug!(prompt = %prompt, "Built generation prompt");

        let raw_response = self
            .llm_client
            .generate_text(SYSTEM_INSTRUCTION.to_string(), prompt)
            .await
            .inspect_err(|e| {
                tracing::error!(stage = "text_generating", error = %e, "Text generation failed");
            })?;

        // 3. Parse, then 4. attach the dish photo for single recipes
        match request.plan_type {
            PlanType::Weekly => {
                let plan = parse_weekly_plan(&raw_response).inspect_err(|e| {
                    tracing::error!(stage = "parsing", error = %e, "Failed to parse weekly plan");
                })?;

                let missing_days = plan.missing_days();
                if !missing_days.is_empty() {
                    tracing::warn!(?missing_days, "Weekly plan is missing days");
                }

                tracing::info!(stage = "assembled", days = plan.len(), "Weekly plan generated");
                Ok(GeneratedPayload::Weekly(plan))
            }
            PlanType::Single => {
                let recipe = parse_recipe(&raw_response).inspect_err(|e| {
                    tracing::error!(stage = "parsing", error = %e, "Failed to parse recipe");
                })?;

                let image_url = self.dish_image(&recipe.name).await;

                tracing::info!(
                    stage = "assembled",
                    recipe = %recipe.name,
                    has_image = image_url.is_some(),
                    "Recipe generated"
                );
                Ok(GeneratedPayload::Single(recipe.with_image_url(image_url)))
            }
        }
    }
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    /// Best effort: any failure is logged and yields `None`.
    async fn dish_image(&self, recipe_name: &str) -> Option<String> {
        tracing::info!(stage = "image_generating", recipe = %recipe_name, "Calling image model");

        match self
            .llm_client
            .generate_image(image_prompt(recipe_name))
            .await
        {
            Ok(Some(image_url)) => Some(image_url),
            Ok(None) => {
                tracing::warn!(stage = "image_generating", "Image response carried no image");
                None
            }
            Err(e) => {
                tracing::warn!(
                    stage = "image_generating",
                    error = %e,
                    "Image generation failed, continuing without image"
                );
                None
            }
        }
    }
}
