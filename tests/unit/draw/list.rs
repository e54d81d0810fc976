use super::*;

#[test]
fn ops_keep_insertion_order() {
    let mut list = DrawList::new(Canvas::new(400, 400));
    list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, Rgba::gray8(14));
    list.text(Point::new(1.0, 2.0), "Login", FontRole::Body, Rgba::gray8(255));
    list.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 5.0, Rgba::gray8(21));

    assert!(matches!(list.ops[0], DrawOp::FillRect { .. }));
    assert!(matches!(list.ops[1], DrawOp::Text { .. }));
    assert!(matches!(list.ops[2], DrawOp::StrokeRect { width, .. } if width == 1.0));
}

#[test]
fn text_queries() {
    let mut list = DrawList::new(Canvas::new(600, 400));
    list.text(Point::ORIGIN, "Products", FontRole::Nav, Rgba::gray8(255));
    list.text(Point::ORIGIN, "Updates", FontRole::Nav, Rgba::gray8(140));
    assert_eq!(list.texts().collect::<Vec<_>>(), ["Products", "Updates"]);
    assert!(list.contains_text("Updates"));
    assert!(!list.contains_text("Update"));
    assert!(list.find_text("Products").is_some());
}

#[test]
fn role_sizes() {
    assert_eq!(FontRole::Logo.size_px(), 38.0);
    assert_eq!(FontRole::ALL.len(), 6);
}
