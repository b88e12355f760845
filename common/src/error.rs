use thiserror::Error;

/// Invalid caller input, surfaced before any probe is dispatched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("no target provided")]
    EmptyTarget,
    #[error("invalid target '{input}': {reason}")]
    InvalidTarget { input: String, reason: String },
}

impl UsageError {
    pub fn invalid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
