use std::io::Cursor;
use std::path::PathBuf;

use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mehdiffer-store-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn empty_directory_reports_every_asset_missing() {
    let dir = scratch_dir("empty");
    let manifest = AssetManifest::default();
    let assets = PreparedAssets::load(&dir, &manifest);

    assert!(assets.background.is_none());
    assert!(assets.fonts.loaded_faces().is_empty());
    let status = assets.status();
    assert_eq!(status.background, None);
    assert!(status.fonts.is_empty());
    assert_eq!(status.missing.len(), 5);
    assert!(status.missing.contains(&manifest.background));
    assert!(status.missing.contains(&manifest.body_font));
}

#[test]
fn background_loads_without_fonts() {
    let dir = scratch_dir("background");
    let img = image::RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(dir.join("background.png"), buf).unwrap();

    let assets = PreparedAssets::load(&dir, &AssetManifest::default());
    assert_eq!(assets.status().background, Some((4, 3)));
    assert_eq!(assets.background.as_ref().map(|b| b.width), Some(4));
    assert_eq!(assets.status().missing.len(), 4);
}

#[test]
fn corrupt_font_is_reported_not_fatal() {
    let dir = scratch_dir("corrupt");
    std::fs::write(dir.join("segoeui.ttf"), b"not a font").unwrap();

    let assets = PreparedAssets::load(&dir, &AssetManifest::default());
    assert!(!assets.fonts.has_face(FontFace::Body));
    assert!(assets.status().missing.iter().any(|m| m == "segoeui.ttf"));
}

#[test]
fn empty_assets_have_default_status() {
    assert_eq!(PreparedAssets::empty().status(), &AssetStatus::default());
}
