/// Convenience result type used across rawscope.
pub type RawscopeResult<T> = Result<T, RawscopeError>;

/// Top-level error taxonomy used by simulator APIs.
#[derive(thiserror::Error, Debug)]
pub enum RawscopeError {
    /// Unknown variant, unit or color-mode key, or an invalid configuration block.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Failures raised by a drawing surface while executing draw operations.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RawscopeError {
    /// Build a [`RawscopeError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`RawscopeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RawscopeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
