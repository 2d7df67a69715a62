use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZoneBatchError>;

#[derive(Error, Debug)]
pub enum ZoneBatchError {
    /// Local validation failed; nothing was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The DNS API rejected the request. `message` is the provider's text as returned.
    #[error("provider error ({status}): {message}")]
    Provider {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// No response came back from the provider.
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ZoneBatchError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<aws_sdk_route53::error::BuildError> for ZoneBatchError {
    fn from(e: aws_sdk_route53::error::BuildError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
