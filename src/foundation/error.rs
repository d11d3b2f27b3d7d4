/// Convenience result type used across linesquare.
pub type LinesquareResult<T> = Result<T, LinesquareError>;

/// Top-level error taxonomy for the host-facing layers.
///
/// The animation core itself is infallible; errors only come from validating host input,
/// rasterizing frames and writing them out.
#[derive(thiserror::Error, Debug)]
pub enum LinesquareError {
    /// Invalid user-provided configuration (canvas, tap script, encoder settings).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a display list.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while handing frames to an encoder or image writer.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LinesquareError {
    /// Build a [`LinesquareError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LinesquareError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LinesquareError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`LinesquareError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
