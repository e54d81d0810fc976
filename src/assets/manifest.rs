use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::assets::fonts::FontFace;
use crate::foundation::error::{PortalError, PortalResult};

/// Environment variable naming the asset directory.
pub const ASSETS_ENV: &str = "MEHDIFFER_ASSETS";

/// File names of every asset, relative to an asset root.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub body_font: String,
    pub bold_font: String,
    pub icon_font: String,
    pub nav_font: String,
    pub background: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            body_font: "segoeui.ttf".to_string(),
            bold_font: "segoeuib.ttf".to_string(),
            icon_font: "icons.ttf".to_string(),
            nav_font: "Inter-Medium.ttf".to_string(),
            background: "background.png".to_string(),
        }
    }
}

impl AssetManifest {
    /// Parse a manifest from JSON. Missing keys keep their default file names.
    pub fn from_reader<R: std::io::Read>(r: R) -> PortalResult<Self> {
        let manifest: AssetManifest = serde_json::from_reader(r)
            .map_err(|e| PortalError::serde(format!("parse asset manifest JSON: {e}")))?;
        for file in [
            &manifest.body_font,
            &manifest.bold_font,
            &manifest.icon_font,
            &manifest.nav_font,
            &manifest.background,
        ] {
            normalize_rel_path(file)?;
        }
        Ok(manifest)
    }

    pub fn from_path(path: impl AsRef<Path>) -> PortalResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PortalError::initialization(format!("open asset manifest '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn font_file(&self, face: FontFace) -> &str {
        match face {
            FontFace::Body => &self.body_font,
            FontFace::Bold => &self.bold_font,
            FontFace::Icons => &self.icon_font,
            FontFace::Nav => &self.nav_font,
        }
    }

    /// Resolve `file` under `root`, rejecting absolute paths and parent traversals.
    pub fn resolve(&self, root: &Path, file: &str) -> PortalResult<PathBuf> {
        let rel = normalize_rel_path(file)?;
        Ok(root.join(Path::new(&rel)))
    }
}

/// Normalize and validate manifest-relative paths.
///
/// The result uses `/` separators and has `.` segments removed.
pub fn normalize_rel_path(source: &str) -> PortalResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(PortalError::validation("asset paths must be relative"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(PortalError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(PortalError::validation("asset path must contain a file name"));
    }
    Ok(out.join("/"))
}

/// Asset root when none is given: `$MEHDIFFER_ASSETS`, else the executable's directory, else the
/// working directory.
pub fn default_asset_root() -> PathBuf {
    if let Some(dir) = std::env::var_os(ASSETS_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/manifest.rs"]
mod tests;
