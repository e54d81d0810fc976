use crate::foundation::core::Point;

/// UV rectangle that covers a `view_w x view_h` area with a `img_w x img_h` image without
/// distortion, cropping the excess symmetrically along one axis.
pub fn cover_uv(view_w: f64, view_h: f64, img_w: u32, img_h: u32) -> (Point, Point) {
    let (iw, ih) = (f64::from(img_w), f64::from(img_h));
    if view_w <= 0.0 || view_h <= 0.0 || iw <= 0.0 || ih <= 0.0 {
        return (Point::ORIGIN, Point::new(1.0, 1.0));
    }

    if view_w / view_h > iw / ih {
        let scaled_h = ih * (view_w / iw);
        let min_y = (1.0 - view_h / scaled_h) * 0.5;
        (Point::new(0.0, min_y), Point::new(1.0, 1.0 - min_y))
    } else {
        let scaled_w = iw * (view_h / ih);
        let min_x = (1.0 - view_w / scaled_w) * 0.5;
        (Point::new(min_x, 0.0), Point::new(1.0 - min_x, 1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/background.rs"]
mod tests;
