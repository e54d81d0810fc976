use crate::assets::store::PreparedAssets;
use crate::draw::list::DrawList;
use crate::foundation::error::PortalResult;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are premultiplied alpha. The `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Rasterizes a frame's [`DrawList`].
///
/// Takes the assets mutably because shaped text layouts are cached in the font book.
pub trait RenderBackend {
    fn render(&mut self, list: &DrawList, assets: &mut PreparedAssets) -> PortalResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// If set, the frame is cleared to this straight RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_rgba: Some([0, 0, 0, 255]),
        }
    }
}

pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> PortalResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}
