use thiserror::Error;

/// Failures of a single generation attempt
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The API answered with a non-200 status
    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamFailure { status: u16, body: String },

    /// Network error, timeout, or an unreadable response body
    #[error("Transport failure: {message}")]
    TransportFailure { message: String },
}

impl GenerationError {
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamFailure {
            status,
            body: body.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFailure {
            message: message.into(),
        }
    }
}
