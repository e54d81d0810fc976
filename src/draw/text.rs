use crate::draw::list::FontRole;
use crate::foundation::core::Vec2;

/// Source of text extents for layout.
///
/// The portal never shapes text itself; it asks the caller for `(width, height)` of a single line
/// in a given role and positions ops from that.
pub trait TextMeasure {
    fn measure(&mut self, text: &str, role: FontRole) -> Vec2;
}

/// Horizontal advance per character as a fraction of the font size.
const ADVANCE_EM: f64 = 0.55;

/// Deterministic metrics: every character advances by the same amount, line height equals the
/// font size. Used when no fonts are available and in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedAdvance;

impl TextMeasure for FixedAdvance {
    fn measure(&mut self, text: &str, role: FontRole) -> Vec2 {
        let size = f64::from(role.size_px());
        Vec2::new(text.chars().count() as f64 * size * ADVANCE_EM, size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/text.rs"]
mod tests;
