/// Convenience result type used across scrollscrub.
pub type ScrubResult<T> = Result<T, ScrubError>;

/// Errors surfaced while building an engine.
///
/// Per-frame evaluation and seeking never fail: missing metadata, rejected seeks and an
/// unconfirmed activation all degrade to "keep the current valid state".
#[derive(thiserror::Error, Debug)]
pub enum ScrubError {
    /// A configuration value violates an invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// The configuration document is malformed or inconsistent as a whole.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrubError {
    /// Build a [`ScrubError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrubError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrubError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrubError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
