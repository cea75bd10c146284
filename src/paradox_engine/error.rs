use thiserror::Error;

/// Errors surfaced by the probability engine.
///
/// Out-of-order session actions are not errors: the state machine ignores
/// them, see [`crate::paradox_engine::session`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid {what}: {reason}")]
    InvalidInput { what: &'static str, reason: String },
    #[error("probability never reaches {target} for group sizes up to {searched_up_to:?}")]
    ThresholdNotFound {
        target: f64,
        /// Last group size scanned, `None` for an empty series.
        searched_up_to: Option<u32>,
    },
}

impl EngineError {
    pub(crate) fn invalid(what: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput { what, reason: reason.into() }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse explorer config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid explorer config: {0}")]
    Invalid(String),
}
