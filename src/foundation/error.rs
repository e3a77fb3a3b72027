/// Convenience result type used across the planner.
pub type BujoResult<T> = Result<T, BujoError>;

/// Top-level error taxonomy used by planner APIs.
#[derive(thiserror::Error, Debug)]
pub enum BujoError {
    /// Rejected configuration or out-of-range calendar input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Anchor wiring violated: unallocated target, double bind, or dangling link.
    #[error("anchor error: {0}")]
    Anchor(String),

    /// Misuse of the drawing surface or failure to encode page content.
    #[error("draw error: {0}")]
    Draw(String),

    /// Failure to serialize or write the finished document.
    #[error("output error: {0}")]
    Output(String),

    /// Errors when deserializing layout profiles.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BujoError {
    /// Build a [`BujoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BujoError::Anchor`] value.
    pub fn anchor(msg: impl Into<String>) -> Self {
        Self::Anchor(msg.into())
    }

    /// Build a [`BujoError::Draw`] value.
    pub fn draw(msg: impl Into<String>) -> Self {
        Self::Draw(msg.into())
    }

    /// Build a [`BujoError::Output`] value.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// Build a [`BujoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
