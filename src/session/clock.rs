use crate::foundation::core::{Fps, FrameIndex};

/// Timing for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub index: FrameIndex,
    /// Seconds since the session started.
    pub time: f64,
    /// Seconds since the previous frame; the first frame reports one frame duration.
    pub delta_time: f64,
}

/// Frame `i` happens at `i / fps`. Time never depends on wall clock or render cost.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    fps: Fps,
    next: u64,
}

impl FrameClock {
    pub fn new(fps: Fps) -> Self {
        Self { fps, next: 0 }
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Number of frames already handed out.
    pub fn frames_elapsed(&self) -> u64 {
        self.next
    }

    /// Time of the next frame without advancing.
    pub fn peek_time(&self) -> f64 {
        self.fps.frames_to_secs(self.next)
    }

    pub fn tick(&mut self) -> FrameTick {
        let index = FrameIndex(self.next);
        self.next += 1;
        FrameTick {
            index,
            time: self.fps.frames_to_secs(index.0),
            delta_time: self.fps.frame_duration_secs(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/clock.rs"]
mod tests;
