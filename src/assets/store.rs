use std::path::Path;

use anyhow::Context;

use crate::assets::decode::{self, PreparedImage};
use crate::assets::fonts::{FontBook, FontFace};
use crate::assets::manifest::AssetManifest;
use crate::foundation::error::{PortalError, PortalResult};

/// What loaded, as seen by the view layer.
///
/// Views only need the background's pixel size (for cover cropping) and whether it exists at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetStatus {
    pub background: Option<(u32, u32)>,
    pub fonts: Vec<FontFace>,
    pub missing: Vec<String>,
}

/// Decoded assets shared by every frame of a session.
#[derive(Debug, Default)]
pub struct PreparedAssets {
    pub background: Option<PreparedImage>,
    pub fonts: FontBook,
    status: AssetStatus,
}

impl PreparedAssets {
    /// No fonts and no background: text is measured with fixed advances and not drawn.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every asset named by `manifest` from `root`.
    ///
    /// Missing or undecodable files are logged and skipped; this never fails.
    #[tracing::instrument(skip(manifest), fields(root = %root.display()))]
    pub fn load(root: &Path, manifest: &AssetManifest) -> Self {
        let mut out = Self::empty();

        for face in FontFace::ALL {
            let file = manifest.font_file(face);
            let loaded =
                read_bytes(root, manifest, file).and_then(|bytes| out.fonts.register(face, bytes));
            match loaded {
                Ok(()) => {
                    tracing::debug!(?face, file, "font loaded");
                    out.status.fonts.push(face);
                }
                Err(err) => out.report_missing(file, &err),
            }
        }

        let background = read_bytes(root, manifest, &manifest.background)
            .and_then(|bytes| decode::decode_image(&bytes));
        match background {
            Ok(img) => {
                tracing::debug!(width = img.width, height = img.height, "background loaded");
                out = out.with_background(img);
            }
            Err(err) => out.report_missing(&manifest.background, &err),
        }

        out
    }

    /// Replace the background with an already decoded image.
    pub fn with_background(mut self, img: PreparedImage) -> Self {
        self.status.background = Some((img.width, img.height));
        self.background = Some(img);
        self
    }

    pub fn status(&self) -> &AssetStatus {
        &self.status
    }

    fn report_missing(&mut self, file: &str, err: &PortalError) {
        let err = PortalError::asset_missing(format!("{file}: {err}"));
        tracing::warn!(%err, "asset unavailable");
        self.status.missing.push(file.to_string());
    }
}

fn read_bytes(root: &Path, manifest: &AssetManifest, file: &str) -> PortalResult<Vec<u8>> {
    let path = manifest.resolve(root, file)?;
    std::fs::read(&path)
        .with_context(|| format!("read asset bytes from '{}'", path.display()))
        .map_err(PortalError::from)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
