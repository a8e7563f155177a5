/// Convenience result type used across shutter.
pub type ShutterResult<T> = Result<T, ShutterError>;

/// Error taxonomy for the orchestration layer.
///
/// There is no I/O on the hot path, so most variants describe programmer errors or bad
/// configuration rather than recoverable runtime conditions.
#[derive(thiserror::Error, Debug)]
pub enum ShutterError {
    /// Operation requested on a controller that already reached a terminal or killed state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Lookup of an id that is not part of the current view.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid user-provided configuration or animation data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShutterError {
    /// Build a [`ShutterError::InvalidState`] value.
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Build a [`ShutterError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`ShutterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShutterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
