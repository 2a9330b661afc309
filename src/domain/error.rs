use thiserror::Error;

/// Fallback message when the predictor rejects a request without saying why.
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Failed to get prediction";

/// Fallback message when the predictor cannot be reached or talks garbage.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Failed to process prediction";

/// Failures of the upstream prediction call.
///
/// Both variants collapse to the same wire shape at the API boundary. The
/// split exists so logs and tests can tell a predictor that said "no" from
/// a predictor that never answered.
#[derive(Debug, Error)]
pub enum PredictorError {
    /// The predictor answered with a non-success status.
    #[error("upstream predictor error: {message}")]
    Upstream { message: String },

    /// The call never produced a usable answer: connection failure or an
    /// unparseable response body.
    #[error("predictor transport error: {message}")]
    Transport { message: String },
}

impl PredictorError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// The message to relay to the caller, without the variant prefix that
    /// [`std::fmt::Display`] adds for logs.
    pub fn message(&self) -> &str {
        match self {
            Self::Upstream { message } | Self::Transport { message } => message,
        }
    }
}
