//! Asset loading: fonts, the background image, and the status the portal sees.
//!
//! All IO happens in [`store::PreparedAssets::load`]. Missing files are reported and the
//! dependent feature is switched off; loading never aborts.

/// Cover-crop math for the background.
pub mod background;
/// Image decoding into premultiplied RGBA8.
pub mod decode;
/// Parley-backed font registry and text layout cache.
pub mod fonts;
/// File names and asset root resolution.
pub mod manifest;
/// Prepared assets and their status.
pub mod store;
