use crate::foundation::core::{Canvas, Point, Rect, Rgba};

/// Font roles used by the portal views.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    /// Regular UI text, 16 px.
    Body,
    /// Bold menu header logo, 21 px.
    Heading,
    /// Bold login logo, 38 px.
    Logo,
    /// Icon glyphs in the navigation list, 13 px.
    NavIcon,
    /// Logout glyph, 18 px.
    ExitIcon,
    /// Navigation labels and card titles, 15 px.
    Nav,
}

impl FontRole {
    pub const ALL: [FontRole; 6] = [
        FontRole::Body,
        FontRole::Heading,
        FontRole::Logo,
        FontRole::NavIcon,
        FontRole::ExitIcon,
        FontRole::Nav,
    ];

    /// Nominal pixel size.
    pub fn size_px(self) -> f32 {
        match self {
            FontRole::Body => 16.0,
            FontRole::Heading => 21.0,
            FontRole::Logo => 38.0,
            FontRole::NavIcon => 13.0,
            FontRole::ExitIcon => 18.0,
            FontRole::Nav => 15.0,
        }
    }
}

/// A single draw command. Coordinates are window-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        radius: f64,
        color: Rgba,
    },
    StrokeRect {
        rect: Rect,
        radius: f64,
        color: Rgba,
        width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
    /// Background image patch; `uv_min`/`uv_max` select the normalized source region.
    Image {
        rect: Rect,
        uv_min: Point,
        uv_max: Point,
        opacity: f32,
    },
    /// Text with its top-left corner at `origin`.
    Text {
        origin: Point,
        text: String,
        role: FontRole,
        color: Rgba,
    },
}

/// Ordered draw commands for one frame. Later ops paint over earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawList {
    pub canvas: Canvas,
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, radius: f64, color: Rgba) {
        self.ops.push(DrawOp::FillRect {
            rect,
            radius,
            color,
        });
    }

    /// 1 px outline.
    pub fn stroke_rect(&mut self, rect: Rect, radius: f64, color: Rgba) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            radius,
            color,
            width: 1.0,
        });
    }

    pub fn line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    pub fn image(&mut self, rect: Rect, uv_min: Point, uv_max: Point, opacity: f32) {
        self.ops.push(DrawOp::Image {
            rect,
            uv_min,
            uv_max,
            opacity,
        });
    }

    pub fn text(&mut self, origin: Point, text: impl Into<String>, role: FontRole, color: Rgba) {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.into(),
            role,
            color,
        });
    }

    /// All text strings in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }

    /// First text op with exactly this string.
    pub fn find_text(&self, needle: &str) -> Option<&DrawOp> {
        self.ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text, .. } if text == needle))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/list.rs"]
mod tests;
