use super::*;

#[test]
fn fixed_advance_scales_with_chars_and_role() {
    let mut m = FixedAdvance;
    let a = m.measure("MEHDIFFER", FontRole::Heading);
    assert!((a.x - 9.0 * 21.0 * 0.55).abs() < 1e-9);
    assert_eq!(a.y, 21.0);
    assert_eq!(m.measure("", FontRole::Body).x, 0.0);
    // Counts chars, not bytes.
    assert_eq!(
        m.measure("\u{e05b}", FontRole::NavIcon).x,
        m.measure("x", FontRole::NavIcon).x
    );
}
