use super::*;
use crate::foundation::core::Canvas;

fn backend() -> CpuBackend {
    CpuBackend::new(RenderSettings::default())
}

fn solid_background(w: u32, h: u32, rgba: [u8; 4]) -> PreparedImage {
    PreparedImage {
        width: w,
        height: h,
        rgba8_premul: Arc::new(rgba.repeat((w * h) as usize)),
    }
}

#[test]
fn empty_list_clears_to_black() {
    let list = DrawList::new(Canvas::new(8, 4));
    let frame = backend()
        .render(&list, &mut PreparedAssets::empty())
        .unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert_eq!(frame.pixel(3, 2), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(8, 0), None);
}

#[test]
fn no_clear_leaves_transparent_pixels() {
    let mut b = CpuBackend::new(RenderSettings { clear_rgba: None });
    let frame = b
        .render(&DrawList::new(Canvas::new(4, 4)), &mut PreparedAssets::empty())
        .unwrap();
    assert!(frame.data.iter().all(|&v| v == 0));
}

#[test]
fn fill_rect_covers_its_interior_only() {
    let mut list = DrawList::new(Canvas::new(32, 32));
    list.fill_rect(
        Rect::new(4.0, 4.0, 20.0, 20.0),
        0.0,
        Rgba::from_rgb8(200, 10, 10),
    );
    let frame = backend()
        .render(&list, &mut PreparedAssets::empty())
        .unwrap();
    assert_eq!(frame.pixel(10, 10), Some([200, 10, 10, 255]));
    assert_eq!(frame.pixel(25, 25), Some([0, 0, 0, 255]));
}

#[test]
fn line_is_stroked() {
    let mut list = DrawList::new(Canvas::new(32, 32));
    list.line(
        Point::new(0.0, 16.0),
        Point::new(32.0, 16.0),
        Rgba::gray8(255),
        4.0,
    );
    let frame = backend()
        .render(&list, &mut PreparedAssets::empty())
        .unwrap();
    let [r, _, _, _] = frame.pixel(16, 16).unwrap();
    assert!(r > 200, "line pixel was {r}");
    assert_eq!(frame.pixel(16, 2), Some([0, 0, 0, 255]));
}

#[test]
fn image_without_background_is_skipped() {
    let mut list = DrawList::new(Canvas::new(8, 8));
    list.image(
        Rect::new(0.0, 0.0, 8.0, 8.0),
        Point::ZERO,
        Point::new(1.0, 1.0),
        1.0,
    );
    let frame = backend()
        .render(&list, &mut PreparedAssets::empty())
        .unwrap();
    assert_eq!(frame.pixel(4, 4), Some([0, 0, 0, 255]));
}

#[test]
fn background_patch_respects_opacity() {
    let mut assets = PreparedAssets::empty().with_background(solid_background(
        4,
        4,
        [0, 200, 0, 255],
    ));
    let mut list = DrawList::new(Canvas::new(16, 16));
    list.image(
        Rect::new(0.0, 0.0, 16.0, 16.0),
        Point::ZERO,
        Point::new(1.0, 1.0),
        1.0,
    );
    list.image(
        Rect::new(0.0, 0.0, 16.0, 8.0),
        Point::ZERO,
        Point::new(1.0, 0.5),
        0.0,
    );
    let frame = backend().render(&list, &mut assets).unwrap();
    assert_eq!(frame.pixel(8, 12), Some([0, 200, 0, 255]));
    assert_eq!(frame.pixel(8, 4), Some([0, 200, 0, 255]));

    let mut half = DrawList::new(Canvas::new(16, 16));
    half.image(
        Rect::new(0.0, 0.0, 16.0, 16.0),
        Point::ZERO,
        Point::new(1.0, 1.0),
        0.5,
    );
    let frame = backend().render(&half, &mut assets).unwrap();
    let [_, g, _, a] = frame.pixel(8, 8).unwrap();
    assert_eq!(a, 255);
    assert!((90..=110).contains(&g), "half-opacity green was {g}");
}

#[test]
fn text_without_fonts_draws_nothing() {
    let mut list = DrawList::new(Canvas::new(64, 32));
    list.text(
        Point::new(2.0, 2.0),
        "Login",
        FontRole::Body,
        Rgba::gray8(255),
    );
    let frame = backend()
        .render(&list, &mut PreparedAssets::empty())
        .unwrap();
    assert!(frame.data.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
}

#[test]
fn empty_canvas_is_an_initialization_error() {
    let err = backend()
        .render(&DrawList::new(Canvas::new(0, 10)), &mut PreparedAssets::empty())
        .unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn context_is_reused_across_sizes() {
    let mut b = backend();
    let mut assets = PreparedAssets::empty();
    b.render(&DrawList::new(Canvas::new(10, 10)), &mut assets)
        .unwrap();
    let frame = b
        .render(&DrawList::new(Canvas::new(20, 5)), &mut assets)
        .unwrap();
    assert_eq!((frame.width, frame.height), (20, 5));
}
