use crate::draw::list::DrawList;
use crate::foundation::core::Point;

/// Keyboard event delivered to the focused login field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Enter,
    Tab,
}

/// Input sampled once per frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Monotonic seconds since the session started.
    pub time: f64,
    /// Seconds since the previous frame.
    pub delta_time: f64,
    /// Pointer in window-local pixels.
    pub pointer: Point,
    /// Pointer in screen pixels.
    pub pointer_screen: Point,
    /// Primary button level.
    pub mouse_down: bool,
    /// Primary button went down this frame.
    pub clicked: bool,
    pub keys: Vec<KeyInput>,
}

/// Cursor shape the host should show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorIcon {
    #[default]
    Arrow,
    TextInput,
}

/// Everything the portal produces for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub draw: DrawList,
    pub exit_requested: bool,
    pub cursor: CursorIcon,
}
