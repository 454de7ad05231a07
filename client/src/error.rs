use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the remote collaborator services.
///
/// Each failure is terminal for that attempt: no retry, no backoff, no
/// queueing. The view layer surfaces it and the user retries manually.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication required or credentials rejected")]
    Unauthorized,
    #[error("forbidden: {message}")]
    Forbidden {
        message: String,
        user_role: Option<String>,
    },
    #[error("service unavailable")]
    ServiceUnavailable,
    #[error("upstream timed out")]
    GatewayTimeout,
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}
