//! Core value types and the error taxonomy shared by every other module.

/// Frame clock types, colors and geometry re-exports.
pub mod core;
/// Error type and result alias.
pub mod error;
