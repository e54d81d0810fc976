use crate::foundation::core::Point;

/// Number of straight segments approximating the arc.
pub const SPINNER_SEGMENTS: usize = 36;
/// Angular length of the arc (three quarters of a turn).
pub const SPINNER_ARC: f64 = 4.71238898;
pub const SPINNER_RADIUS: f64 = 18.0;
pub const SPINNER_THICKNESS: f64 = 3.0;
/// Angular speed in radians per second.
pub const SPINNER_SPEED: f64 = 3.0;

/// Rotating three-quarter arc shown while credentials are "verified".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spinner {
    rotation: f64,
}

impl Spinner {
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Accumulate rotation for one frame. The angle is never wrapped.
    pub fn advance(&mut self, delta_time: f64) {
        self.rotation += delta_time * SPINNER_SPEED;
    }

    /// Segment endpoints of the arc around `center`, in drawing order.
    pub fn segments(&self, center: Point) -> impl Iterator<Item = (Point, Point)> + '_ {
        let at = move |i: usize| {
            let a = self.rotation + (i as f64 / SPINNER_SEGMENTS as f64) * SPINNER_ARC;
            Point::new(
                center.x + a.cos() * SPINNER_RADIUS,
                center.y + a.sin() * SPINNER_RADIUS,
            )
        };
        (0..SPINNER_SEGMENTS).map(move |i| (at(i), at(i + 1)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spinner.rs"]
mod tests;
