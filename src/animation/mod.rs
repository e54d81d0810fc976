//! Per-frame animation primitives.
//!
//! Everything here advances by explicit `step` calls driven from the frame loop; nothing reads a
//! clock on its own.

/// Ease-toward scalars.
pub mod ease;
/// Staged injection notification.
pub mod notification;
/// Loading spinner geometry.
pub mod spinner;
