/// Convenience result type used across hexglow.
pub type HexResult<T> = Result<T, HexError>;

/// Top-level error taxonomy used by the frame pipeline.
#[derive(thiserror::Error, Debug)]
pub enum HexError {
    /// Invalid numeric input (frame counts, fps, cursor positions).
    #[error("validation error: {0}")]
    Validation(String),

    /// Memory could not be reserved for a frame or a frame store.
    #[error("resource error: {0}")]
    Resource(String),

    /// Pixel map does not agree with the canvas geometry.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// The rasterizer failed to produce a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Playback configuration could not be read or is inconsistent.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HexError {
    /// Build a [`HexError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HexError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Build a [`HexError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`HexError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HexError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<std::collections::TryReserveError> for HexError {
    fn from(err: std::collections::TryReserveError) -> Self {
        Self::Resource(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
