use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{PortalError, PortalResult};
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
///
/// `width`/`height` describe the initial window; frames change size while the window eases, so
/// sinks must read dimensions from each [`FrameRGBA`].
#[derive(Debug, Clone)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
}

/// Consumer of rendered frames.
///
/// `push_frame` is called in strictly increasing [`FrameIndex`] order.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> PortalResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> PortalResult<()>;
    fn end(&mut self) -> PortalResult<()>;

    /// Whether pushed frames are thrown away, so callers can skip rasterizing them.
    fn discards_frames(&self) -> bool {
        false
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> PortalResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> PortalResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> PortalResult<()> {
        Ok(())
    }
}

/// Discards frames. Used when a session only needs its report.
#[derive(Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn begin(&mut self, _cfg: SinkConfig) -> PortalResult<()> {
        Ok(())
    }

    fn discards_frames(&self) -> bool {
        true
    }

    fn push_frame(&mut self, _idx: FrameIndex, _frame: &FrameRGBA) -> PortalResult<()> {
        Ok(())
    }

    fn end(&mut self) -> PortalResult<()> {
        Ok(())
    }
}

/// Writes each frame as `frame_000123.png` into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:06}.png", idx.0))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> PortalResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            PortalError::initialization(format!(
                "create output dir '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> PortalResult<()> {
        let path = self.frame_path(idx);
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> PortalResult<()> {
        tracing::info!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence written"
        );
        Ok(())
    }
}

/// Encode one frame as PNG, creating parent directories as needed.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> PortalResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/session/sink.rs"]
mod tests;
