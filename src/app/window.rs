use crate::foundation::core::Point;

/// Outer window rectangle in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WindowFrame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowFrame {
    /// Integer horizontal center, `(left + right) / 2`.
    pub fn center_x(&self) -> i32 {
        let right = self.x + self.width as i32;
        (self.x + right) / 2
    }

    pub fn top_left(&self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// Convert a window-local point to screen coordinates.
    pub fn to_screen(&self, local: Point) -> Point {
        local + self.top_left().to_vec2()
    }
}

/// Window operations the portal needs from its host.
pub trait WindowHost {
    fn frame(&self) -> WindowFrame;
    /// Change the size; the top-left corner stays where it is.
    fn resize(&mut self, width: u32, height: u32);
    /// Move the top-left corner.
    fn reposition(&mut self, x: i32, y: i32);
}

/// A call made on a [`HeadlessWindow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCall {
    Resize { width: u32, height: u32 },
    Reposition { x: i32, y: i32 },
}

pub const SCREEN_WIDTH: u32 = 1920;
pub const SCREEN_HEIGHT: u32 = 1080;

/// In-memory window on a virtual screen that records every call it receives.
#[derive(Clone, Debug)]
pub struct HeadlessWindow {
    frame: WindowFrame,
    calls: Vec<HostCall>,
}

impl HeadlessWindow {
    pub fn new(frame: WindowFrame) -> Self {
        Self {
            frame,
            calls: Vec::new(),
        }
    }

    /// `width x height` window centered on the 1920x1080 virtual screen.
    pub fn centered(width: u32, height: u32) -> Self {
        let x = (SCREEN_WIDTH as i32 - width as i32) / 2;
        let y = (SCREEN_HEIGHT as i32 - height as i32) / 2;
        Self::new(WindowFrame {
            x,
            y,
            width,
            height,
        })
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn resize_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Resize { .. }))
            .count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl WindowHost for HeadlessWindow {
    fn frame(&self) -> WindowFrame {
        self.frame
    }

    fn resize(&mut self, width: u32, height: u32) {
        tracing::debug!(width, height, "window resize");
        self.frame.width = width;
        self.frame.height = height;
        self.calls.push(HostCall::Resize { width, height });
    }

    fn reposition(&mut self, x: i32, y: i32) {
        self.frame.x = x;
        self.frame.y = y;
        self.calls.push(HostCall::Reposition { x, y });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/window.rs"]
mod tests;
