use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Validation(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Payment required")]
    QuotaExceeded,

    #[error("Upstream error (status {status:?}): {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }
}
