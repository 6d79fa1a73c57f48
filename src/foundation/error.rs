/// Convenience result type used across barrel-forge.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Top-level error taxonomy used by library APIs.
///
/// Geometry resolution itself is total; errors only arise at the edges (config
/// input, override parsing, rasterization and IO).
#[derive(thiserror::Error, Debug)]
pub enum ForgeError {
    /// Invalid user-provided configuration or parameter data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or encoding a rendered barrel.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ForgeError {
    /// Build a [`ForgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ForgeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ForgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
