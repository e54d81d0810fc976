/// Convenience result type used across the portal.
pub type PortalResult<T> = Result<T, PortalError>;

/// Top-level error taxonomy used by the portal APIs.
///
/// Only `Initialization` is fatal for the binary. `AssetMissing` is reported and the dependent
/// visual feature is dropped; the view state machine itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum PortalError {
    /// The window host, render surface or output could not be created.
    #[error("initialization error: {0}")]
    Initialization(String),

    /// A font or image could not be loaded.
    #[error("asset missing: {0}")]
    AssetMissing(String),

    /// Invalid user-provided script or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a render backend while rasterizing a draw list.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PortalError {
    /// Build a [`PortalError::Initialization`] value.
    pub fn initialization(msg: impl Into<String>) -> Self {
        Self::Initialization(msg.into())
    }

    /// Build a [`PortalError::AssetMissing`] value.
    pub fn asset_missing(msg: impl Into<String>) -> Self {
        Self::AssetMissing(msg.into())
    }

    /// Build a [`PortalError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PortalError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PortalError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error must abort the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Initialization(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
