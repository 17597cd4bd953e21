use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while fetching or adapting pipeline data.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The request could not be sent or the body could not be read.
    #[error("failed to fetch pipeline data: {0}")]
    Request(#[from] reqwest::Error),

    /// The pipeline answered with a non-success status.
    #[error("pipeline request failed with status {status}")]
    Status { status: StatusCode },

    /// The body was not the expected `{categories, topics, posts}` shape.
    #[error("invalid pipeline response shape: {0}")]
    InvalidShape(String),

    #[error("invalid pipeline URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl PipelineError {
    pub(crate) fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShape(msg.into())
    }
}
