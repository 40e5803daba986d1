// errors.rs
use crate::domain::normalize::NormalizeError;
use astra::Response;
use thiserror::Error;

/// Errors originating from request handling. Upstream failures never show
/// up here: the review source resolves them with the fallback dataset.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    /// Malformed input. The message is safe to show to the caller.
    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Anything else. The detail is logged, never rendered.
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Internal(_) => 500,
        }
    }

    /// Message suitable for the response body.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::NotFound => "Not Found".to_string(),
            ServerError::BadRequest(msg) => msg.clone(),
            ServerError::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}

impl From<NormalizeError> for ServerError {
    fn from(err: NormalizeError) -> Self {
        ServerError::Internal(err.to_string())
    }
}
