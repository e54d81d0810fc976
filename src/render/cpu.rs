use std::sync::Arc;

use kurbo::Shape;

use crate::assets::decode::PreparedImage;
use crate::assets::fonts::FontBook;
use crate::assets::store::PreparedAssets;
use crate::draw::list::{DrawList, DrawOp, FontRole};
use crate::foundation::core::{Affine, Point, Rect, Rgba};
use crate::foundation::error::{PortalError, PortalResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};

const TOLERANCE: f64 = 0.1;

struct ImagePaint {
    source: Arc<Vec<u8>>,
    paint: vello_cpu::Image,
    w: u32,
    h: u32,
}

/// Draw-list rasterizer built on `vello_cpu`.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
    background: Option<ImagePaint>,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
            background: None,
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> PortalResult<R>,
    ) -> PortalResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    /// Paint for the background image; rebuilt only when the decoded pixels change.
    fn background_paint(&mut self, img: &PreparedImage) -> PortalResult<&ImagePaint> {
        let stale = self
            .background
            .as_ref()
            .is_none_or(|p| !Arc::ptr_eq(&p.source, &img.rgba8_premul));
        if stale {
            let pixmap = pixmap_from_premul_bytes(&img.rgba8_premul, img.width, img.height)?;
            self.background = Some(ImagePaint {
                source: Arc::clone(&img.rgba8_premul),
                paint: vello_cpu::Image {
                    image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                    sampler: vello_cpu::peniko::ImageSampler::default(),
                },
                w: img.width,
                h: img.height,
            });
        }
        self.background
            .as_ref()
            .ok_or_else(|| PortalError::render("background paint missing"))
    }

    fn draw_op(
        &mut self,
        op: &DrawOp,
        assets: &mut PreparedAssets,
        ctx: &mut vello_cpu::RenderContext,
    ) -> PortalResult<()> {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::FillRect {
                rect,
                radius,
                color,
            } => {
                ctx.set_paint(paint_color(*color));
                ctx.fill_path(&rounded_rect_path(*rect, *radius));
            }
            DrawOp::StrokeRect {
                rect,
                radius,
                color,
                width,
            } => {
                ctx.set_paint(paint_color(*color));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.stroke_path(&rounded_rect_path(*rect, *radius));
            }
            DrawOp::Line {
                from,
                to,
                color,
                width,
            } => {
                let mut p = vello_cpu::kurbo::BezPath::new();
                p.move_to(point_to_cpu(*from));
                p.line_to(point_to_cpu(*to));
                ctx.set_paint(paint_color(*color));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.stroke_path(&p);
            }
            DrawOp::Image {
                rect,
                uv_min,
                uv_max,
                opacity,
            } => {
                let Some(img) = assets.background.as_ref() else {
                    return Ok(());
                };
                let paint = self.background_paint(img)?;
                let (w, h) = (f64::from(paint.w), f64::from(paint.h));
                let src = Rect::new(uv_min.x * w, uv_min.y * h, uv_max.x * w, uv_max.y * h);
                if src.width() <= 0.0 || src.height() <= 0.0 || rect.is_zero_area() {
                    return Ok(());
                }
                let tr = Affine::translate((rect.x0, rect.y0))
                    * Affine::scale_non_uniform(
                        rect.width() / src.width(),
                        rect.height() / src.height(),
                    )
                    * Affine::translate((-src.x0, -src.y0));

                ctx.set_transform(affine_to_cpu(tr));
                ctx.set_paint(paint.paint.clone());
                let layered = *opacity < 1.0;
                if layered {
                    ctx.push_opacity_layer(opacity.clamp(0.0, 1.0));
                }
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(src.x0, src.y0, src.x1, src.y1));
                if layered {
                    ctx.pop_layer();
                }
            }
            DrawOp::Text {
                origin,
                text,
                role,
                color,
            } => draw_text(ctx, &mut assets.fonts, *origin, text, *role, *color),
        }
        Ok(())
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(level = "trace", skip_all, fields(ops = list.ops.len()))]
    fn render(&mut self, list: &DrawList, assets: &mut PreparedAssets) -> PortalResult<FrameRGBA> {
        let canvas = list.canvas.validate()?;
        let (w, h) = (canvas.width as u16, canvas.height as u16);

        self.with_ctx_mut(w, h, |this, ctx| {
            if let Some([r, g, b, a]) = this.settings.clear_rgba {
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(w),
                    f64::from(h),
                ));
            }
            for op in &list.ops {
                this.draw_op(op, assets, ctx)?;
            }

            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);

            Ok(FrameRGBA {
                width: canvas.width,
                height: canvas.height,
                data: pixmap.data_as_u8_slice().to_vec(),
                premultiplied: true,
            })
        })
    }
}

/// Text with a missing font is skipped; layout already fell back to fixed metrics.
fn draw_text(
    ctx: &mut vello_cpu::RenderContext,
    fonts: &mut FontBook,
    origin: Point,
    text: &str,
    role: FontRole,
    color: Rgba,
) {
    if text.is_empty() || color.a <= 0.0 {
        return;
    }
    let Some(font) = fonts.resolve(role).and_then(|f| fonts.font_data(f)).cloned() else {
        return;
    };
    let Some(layout) = fonts.layout(text, role) else {
        return;
    };

    ctx.set_transform(affine_to_cpu(Affine::translate((origin.x, origin.y))));
    ctx.set_paint(paint_color(color));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn paint_color(c: Rgba) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn rounded_rect_path(rect: Rect, radius: f64) -> vello_cpu::kurbo::BezPath {
    let mut p = vello_cpu::kurbo::BezPath::new();
    let rr = kurbo::RoundedRect::from_rect(rect, radius.max(0.0));
    for el in rr.path_elements(TOLERANCE) {
        p.push(path_el_to_cpu(el));
    }
    p
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn path_el_to_cpu(el: kurbo::PathEl) -> vello_cpu::kurbo::PathEl {
    use kurbo::PathEl;
    use vello_cpu::kurbo::PathEl as CpuEl;

    match el {
        PathEl::MoveTo(p) => CpuEl::MoveTo(point_to_cpu(p)),
        PathEl::LineTo(p) => CpuEl::LineTo(point_to_cpu(p)),
        PathEl::QuadTo(p1, p2) => CpuEl::QuadTo(point_to_cpu(p1), point_to_cpu(p2)),
        PathEl::CurveTo(p1, p2, p3) => {
            CpuEl::CurveTo(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3))
        }
        PathEl::ClosePath => CpuEl::ClosePath,
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> PortalResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| PortalError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| PortalError::render("image height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(PortalError::render("image byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
