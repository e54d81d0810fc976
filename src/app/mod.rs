//! The portal view/animation state machine.
//!
//! [`portal::App`] consumes one [`input::FrameInput`] per frame, talks to a
//! [`window::WindowHost`] for resizes and drags, and returns a draw list.

/// Static product and update-log data.
pub mod catalog;
/// Per-frame input and output types.
pub mod input;
/// The `App` driver.
pub mod portal;
/// View, menu, form and hover state.
pub mod state;
/// Colors and fixed geometry.
pub mod theme;
/// Window host seam and the headless implementation.
pub mod window;

mod loading;
mod login;
mod menu;
mod ui;
