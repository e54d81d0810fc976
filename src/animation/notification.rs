use crate::animation::ease::ease_toward;

/// One phase of the injection notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotificationStage {
    /// Elapsed seconds (since the notification started) at which this stage ends.
    pub threshold: f64,
    /// Glyph from the icon font.
    pub icon: &'static str,
    pub text: &'static str,
    /// Extra horizontal gap between icon and text, in pixels.
    pub extra_spacing: f64,
}

pub const NOTIFICATION_STAGES: [NotificationStage; 4] = [
    NotificationStage {
        threshold: 1.5,
        icon: "\u{e064}",
        text: "Connecting..",
        extra_spacing: 0.0,
    },
    NotificationStage {
        threshold: 3.0,
        icon: "\u{e007}",
        text: "Resolving imports..",
        extra_spacing: 0.0,
    },
    NotificationStage {
        threshold: 4.5,
        icon: "S",
        text: "Resolved imports [100%]",
        extra_spacing: 2.0,
    },
    NotificationStage {
        threshold: 6.0,
        icon: "S",
        text: "Injected successfully!",
        extra_spacing: 2.0,
    },
];

const FADE_IN_END: f64 = 0.2;
const HOLD_END: f64 = 1.3;
const FADE_OUT_END: f64 = 1.5;
const FADE_SECS: f64 = 0.2;

/// Vertical slide distance in pixels.
pub const NOTIFICATION_SLIDE: f64 = 20.0;
const SLIDE_RATE: f64 = 0.15;

/// Stage index for `elapsed` seconds since the notification started, `None` once past the last
/// threshold.
pub fn stage_at(elapsed: f64) -> Option<usize> {
    NOTIFICATION_STAGES
        .iter()
        .position(|stage| elapsed < stage.threshold)
}

/// Result of advancing a notification by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationTick {
    Visible,
    /// Entered a new stage this frame; alpha and offset were reset.
    StageChanged { from: usize, to: usize },
    /// Past the last threshold; the notification must be dropped.
    Finished,
}

/// Staged progress toast started by the "Inject" button.
///
/// The stage is a pure function of elapsed time. Alpha follows a fixed fade-in, hold, fade-out
/// envelope per stage and the card slides up by [`NOTIFICATION_SLIDE`] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InjectionNotification {
    started_at: f64,
    stage: usize,
    stage_started_at: f64,
    alpha: f64,
    y_offset: f64,
}

impl InjectionNotification {
    pub fn start(now: f64) -> Self {
        Self {
            started_at: now,
            stage: 0,
            stage_started_at: now,
            alpha: 0.0,
            y_offset: 0.0,
        }
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn stage_info(&self) -> &'static NotificationStage {
        &NOTIFICATION_STAGES[self.stage]
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn y_offset(&self) -> f64 {
        self.y_offset
    }

    /// Advance to time `now` (seconds, same clock as [`Self::start`]).
    pub fn update(&mut self, now: f64) -> NotificationTick {
        let Some(stage) = stage_at(now - self.started_at) else {
            return NotificationTick::Finished;
        };

        let mut tick = NotificationTick::Visible;
        if stage != self.stage {
            tick = NotificationTick::StageChanged {
                from: self.stage,
                to: stage,
            };
            self.stage = stage;
            self.stage_started_at = now;
            self.alpha = 0.0;
            self.y_offset = 0.0;
        }

        let e = now - self.stage_started_at;
        if e < FADE_IN_END {
            self.alpha = e / FADE_SECS;
        } else if e < HOLD_END {
            self.alpha = 1.0;
        } else if e < FADE_OUT_END {
            self.alpha = (FADE_OUT_END - e) / FADE_SECS;
        }

        if self.y_offset < NOTIFICATION_SLIDE {
            self.y_offset = ease_toward(self.y_offset, NOTIFICATION_SLIDE, SLIDE_RATE);
        }

        tick
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/notification.rs"]
mod tests;
