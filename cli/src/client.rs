use std::sync::atomic::{AtomicBool, Ordering};

use pantry_chef_core::domain::recipe::{
    GeneratedPayload, GenerationRequest, PlanType, Recipe, WeeklyPlan,
};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("A generation is already in progress")]
    Busy,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Credits required")]
    QuotaExceeded,

    #[error("Generation failed: {0}")]
    Failed(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Caller of the generate-recipe endpoint. Allows one generation at a time.
#[derive(Debug)]
pub struct PantryClient {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag when the request finishes, however it finishes.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl PantryClient {
    pub fn new(server_url: &str, api_key: Option<String>) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/generate-recipe", server_url.trim_end_matches('/')),
            api_key,
            in_flight: AtomicBool::new(false),
        })
    }

    fn acquire(&self) -> Result<InFlight<'_>, ClientError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlight(&self.in_flight))
            .map_err(|_| ClientError::Busy)
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPayload, ClientError> {
        let _in_flight = self.acquire()?;

        let mut builder = self.http.post(&self.endpoint).json(request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        tracing::debug!(endpoint = %self.endpoint, plan_type = ?request.plan_type, "Requesting generation");
        let response = builder.send().await?;

        let status = response.status();
        match status {
            StatusCode::TOO_MANY_REQUESTS => return Err(ClientError::RateLimited),
            StatusCode::PAYMENT_REQUIRED => return Err(ClientError::QuotaExceeded),
            _ if !status.is_success() => {
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .map(|body| body.error)
                    .unwrap_or_else(|_| status.to_string());
                tracing::warn!(%status, "Generation failed: {}", message);
                return Err(ClientError::Failed(message));
            }
            _ => {}
        }

        let payload = match request.plan_type {
            PlanType::Single => GeneratedPayload::Single(response.json::<Recipe>().await?),
            PlanType::Weekly => GeneratedPayload::Weekly(response.json::<WeeklyPlan>().await?),
        };

        Ok(payload)
    }
}
