use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantry_chef_core::domain::recipe::entities::GenerationError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    TooManyRequests(String),

    #[error("{0}")]
    PaymentRequired(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<GenerationError> for ApiError {
    fn from(error: GenerationError) -> Self {
        match error {
            GenerationError::Validation(message) => ApiError::BadRequest(message),
            GenerationError::RateLimited => ApiError::TooManyRequests(
                "Rate limit exceeded. Please try again later.".to_string(),
            ),
            GenerationError::QuotaExceeded => ApiError::PaymentRequired(
                "Payment required. Please add credits to your workspace.".to_string(),
            ),
            GenerationError::Upstream { .. } => {
                ApiError::InternalServerError("Failed to generate recipe".to_string())
            }
            GenerationError::MalformedResponse(_) => {
                ApiError::InternalServerError("Failed to parse generated recipe".to_string())
            }
        }
    }
}

/// JSON extractor that also runs the payload's `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(first_message(&errors)))?;

        Ok(ValidateJson(value))
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .errors()
        .iter()
        .find_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(field_errors) => field_errors.first().map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            }),
            ValidationErrorsKind::Struct(nested) => Some(first_message(nested)),
            ValidationErrorsKind::List(items) => {
                items.values().next().map(|nested| first_message(nested))
            }
        })
        .unwrap_or_else(|| errors.to_string())
}
