//! MEHDIFFER portal: a login screen, a loading animation and a menu with product pages, driven by
//! a frame-stepped view/animation state machine.
//!
//! The portal itself only turns [`FrameInput`] into a [`DrawList`]. Everything else is a host:
//!
//! - [`PreparedAssets`] loads fonts and the background once
//! - a [`RenderBackend`] rasterizes each draw list on the CPU
//! - a [`Session`] replays an [`InputScript`] against a headless window and streams frames into a
//!   [`FrameSink`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod app;
pub mod assets;
pub mod draw;
pub mod foundation;
pub mod render;
pub mod session;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, Point, Rect, Rgba, Vec2};
pub use crate::foundation::error::{PortalError, PortalResult};

pub use crate::app::input::{CursorIcon, FrameInput, FrameOutput, KeyInput};
pub use crate::app::portal::App;
pub use crate::app::state::ViewKind;
pub use crate::app::window::{HeadlessWindow, WindowFrame, WindowHost};
pub use crate::assets::manifest::AssetManifest;
pub use crate::assets::store::{AssetStatus, PreparedAssets};
pub use crate::draw::list::{DrawList, DrawOp, FontRole};
pub use crate::draw::text::{FixedAdvance, TextMeasure};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::session::runner::{Session, SessionReport, Transition};
pub use crate::session::script::{InputScript, ScriptAction, ScriptEvent, ScriptKey};
pub use crate::session::sink::{FrameSink, InMemorySink, NullSink, PngSequenceSink, SinkConfig};
