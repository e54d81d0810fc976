use super::*;

#[test]
fn defaults_name_the_stock_files() {
    let m = AssetManifest::default();
    assert_eq!(m.font_file(FontFace::Body), "segoeui.ttf");
    assert_eq!(m.font_file(FontFace::Bold), "segoeuib.ttf");
    assert_eq!(m.font_file(FontFace::Icons), "icons.ttf");
    assert_eq!(m.font_file(FontFace::Nav), "Inter-Medium.ttf");
    assert_eq!(m.background, "background.png");
}

#[test]
fn partial_json_keeps_defaults() {
    let m = AssetManifest::from_reader(r#"{ "background": "bg.jpg" }"#.as_bytes()).unwrap();
    assert_eq!(m.background, "bg.jpg");
    assert_eq!(m.body_font, "segoeui.ttf");
}

#[test]
fn normalize_rel_path_rules() {
    assert_eq!(normalize_rel_path("./fonts\\a.ttf").unwrap(), "fonts/a.ttf");
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn resolve_joins_under_root() {
    let m = AssetManifest::default();
    let p = m.resolve(Path::new("assets"), "fonts/./icons.ttf").unwrap();
    assert_eq!(p, Path::new("assets").join("fonts/icons.ttf"));
}

#[test]
fn manifest_json_errors() {
    let err = AssetManifest::from_reader("[1, 2]".as_bytes()).unwrap_err();
    assert!(matches!(err, PortalError::Serde(_)));

    let err = AssetManifest::from_reader(r#"{ "body_font": "../secret.ttf" }"#.as_bytes())
        .unwrap_err();
    assert!(matches!(err, PortalError::Validation(_)));

    let err = AssetManifest::from_path("/definitely/not/here/manifest.json").unwrap_err();
    assert!(err.is_fatal());
}
