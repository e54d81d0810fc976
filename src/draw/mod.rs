//! Backend-agnostic draw commands emitted by the portal each frame.

/// Draw list and ops.
pub mod list;
/// Text measurement seam.
pub mod text;
