use super::*;

#[test]
fn rotation_accumulates_unbounded() {
    let mut s = Spinner::default();
    for _ in 0..600 {
        s.advance(1.0 / 60.0);
    }
    assert!((s.rotation() - 30.0).abs() < 1e-9);
}

#[test]
fn segments_form_a_connected_arc_on_the_radius() {
    let s = Spinner::default();
    let c = Point::new(300.0, 180.0);
    let segs: Vec<_> = s.segments(c).collect();
    assert_eq!(segs.len(), SPINNER_SEGMENTS);
    for w in segs.windows(2) {
        assert_eq!(w[0].1, w[1].0);
    }
    for (a, _) in &segs {
        assert!(((*a - c).hypot() - SPINNER_RADIUS).abs() < 1e-9);
    }
    // Starts at angle 0 and ends three quarters of a turn later.
    assert!((segs[0].0.x - (c.x + SPINNER_RADIUS)).abs() < 1e-9);
    let end = segs[SPINNER_SEGMENTS - 1].1;
    assert!((end.y - (c.y - SPINNER_RADIUS)).abs() < 1e-6);
}
