use super::*;

#[test]
fn roles_map_to_faces() {
    assert_eq!(FontFace::for_role(FontRole::Body), FontFace::Body);
    assert_eq!(FontFace::for_role(FontRole::Logo), FontFace::Bold);
    assert_eq!(FontFace::for_role(FontRole::Heading), FontFace::Bold);
    assert_eq!(FontFace::for_role(FontRole::ExitIcon), FontFace::Icons);
    assert_eq!(FontFace::for_role(FontRole::Nav), FontFace::Nav);
}

#[test]
fn empty_book_measures_with_fixed_advance() {
    let mut book = FontBook::new();
    assert!(book.loaded_faces().is_empty());
    assert_eq!(book.resolve(FontRole::Heading), None);
    assert!(book.layout("Login", FontRole::Body).is_none());
    assert_eq!(
        book.measure("Login", FontRole::Body),
        FixedAdvance.measure("Login", FontRole::Body)
    );
}

#[test]
fn garbage_font_bytes_are_rejected() {
    let mut book = FontBook::new();
    let err = book
        .register(FontFace::Body, b"definitely not a font".to_vec())
        .unwrap_err();
    assert!(matches!(err, PortalError::Validation(_)));
    assert!(!book.has_face(FontFace::Body));
}
