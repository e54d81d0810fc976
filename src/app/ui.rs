use crate::app::input::{CursorIcon, FrameInput};
use crate::app::state::{Control, HoverSet};
use crate::app::theme;
use crate::assets::background::cover_uv;
use crate::assets::store::AssetStatus;
use crate::draw::list::{DrawList, FontRole};
use crate::draw::text::TextMeasure;
use crate::foundation::core::{Point, Rect, Rgba, Vec2};

/// Per-frame drawing context shared by the views.
pub(crate) struct Ui<'a> {
    pub(crate) draw: DrawList,
    pub(crate) input: &'a FrameInput,
    pub(crate) cursor: CursorIcon,
    measure: &'a mut dyn TextMeasure,
    hovers: &'a mut HoverSet,
    assets: &'a AssetStatus,
}

impl<'a> Ui<'a> {
    pub(crate) fn new(
        draw: DrawList,
        input: &'a FrameInput,
        measure: &'a mut dyn TextMeasure,
        hovers: &'a mut HoverSet,
        assets: &'a AssetStatus,
    ) -> Self {
        Self {
            draw,
            input,
            cursor: CursorIcon::Arrow,
            measure,
            hovers,
            assets,
        }
    }

    pub(crate) fn now(&self) -> f64 {
        self.input.time
    }

    pub(crate) fn hovered(&self, rect: Rect) -> bool {
        rect.contains(self.input.pointer)
    }

    /// Advance the hover alpha of `control` for `rect`; returns `(alpha, clicked)`.
    pub(crate) fn hover(&mut self, control: Control, rect: Rect) -> (f64, bool) {
        let hovered = self.hovered(rect);
        let alpha = self.hovers.step(control, hovered);
        (alpha, hovered && self.input.clicked)
    }

    pub(crate) fn text_size(&mut self, text: &str, role: FontRole) -> Vec2 {
        self.measure.measure(text, role)
    }

    pub(crate) fn text(&mut self, x: f64, y: f64, text: &str, role: FontRole, color: Rgba) {
        self.draw.text(Point::new(x, y), text, role, color);
    }

    /// Draw `text` horizontally centered in `[x, x + width)` at `y`.
    pub(crate) fn text_centered(
        &mut self,
        x: f64,
        width: f64,
        y: f64,
        text: &str,
        role: FontRole,
        color: Rgba,
    ) {
        let size = self.text_size(text, role);
        self.text(x + (width - size.x) * 0.5, y, text, role, color);
    }

    /// Draw `text` centered in both axes inside `rect`.
    pub(crate) fn text_in(&mut self, rect: Rect, text: &str, role: FontRole, color: Rgba) {
        let size = self.text_size(text, role);
        self.text(
            rect.x0 + (rect.width() - size.x) * 0.5,
            rect.y0 + (rect.height() - size.y) * 0.5,
            text,
            role,
            color,
        );
    }

    pub(crate) fn separator(&mut self, from: Point, to: Point) {
        self.draw.line(from, to, theme::EDGE, 1.0);
    }

    /// Two-tone "MEHDIFFER" wordmark with its top-left at `(x, y)`.
    pub(crate) fn wordmark(&mut self, x: f64, y: f64, role: FontRole) {
        let red_w = self.text_size("MEH", role).x;
        self.text(x, y, "MEH", role, theme::RED);
        self.text(x + red_w, y, "DIFFER", role, theme::PRIMARY);
    }

    /// Cover-cropped background over the whole view, if one was loaded.
    pub(crate) fn background(&mut self, width: f64, height: f64) {
        if let Some((bw, bh)) = self.assets.background {
            let (uv_min, uv_max) = cover_uv(width, height, bw, bh);
            self.draw
                .image(Rect::new(0.0, 0.0, width, height), uv_min, uv_max, 1.0);
        }
    }

    /// Background patch behind `rect`, sampled with UVs relative to a `view` sized surface.
    pub(crate) fn background_patch(&mut self, rect: Rect, view: Vec2, opacity: f32) {
        if self.assets.background.is_some() {
            self.draw.image(
                rect,
                Point::new(rect.x0 / view.x, rect.y0 / view.y),
                Point::new(rect.x1 / view.x, rect.y1 / view.y),
                opacity,
            );
        }
    }

    pub(crate) fn finish(self) -> (DrawList, CursorIcon) {
        (self.draw, self.cursor)
    }
}
