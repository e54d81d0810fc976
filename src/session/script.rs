use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::app::input::KeyInput;
use crate::foundation::core::Fps;
use crate::foundation::error::{PortalError, PortalResult};

/// Non-character keys a script can press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptKey {
    Enter,
    Tab,
    Backspace,
}

impl From<ScriptKey> for KeyInput {
    fn from(key: ScriptKey) -> Self {
        match key {
            ScriptKey::Enter => KeyInput::Enter,
            ScriptKey::Tab => KeyInput::Tab,
            ScriptKey::Backspace => KeyInput::Backspace,
        }
    }
}

/// One scripted input. Pointer coordinates are window-local at the moment the event fires.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptAction {
    Move { x: f64, y: f64 },
    Press,
    Release,
    /// Move, press this frame, release on the next.
    Click { x: f64, y: f64 },
    Type { text: String },
    Key { key: ScriptKey },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptEvent {
    /// Seconds since session start; fires on the first frame whose time is `>= at`.
    pub at: f64,
    #[serde(flatten)]
    pub action: ScriptAction,
}

impl ScriptEvent {
    pub fn new(at: f64, action: ScriptAction) -> Self {
        Self { at, action }
    }
}

/// Timed input for a headless session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputScript {
    #[serde(default)]
    pub fps: Fps,
    pub duration_s: f64,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl InputScript {
    /// Parse a script from JSON. Events are stably sorted by time.
    pub fn from_reader<R: std::io::Read>(r: R) -> PortalResult<Self> {
        let mut script: InputScript = serde_json::from_reader(r)
            .map_err(|e| PortalError::serde(format!("parse input script JSON: {e}")))?;
        script.validate()?;
        script.sort_events();
        Ok(script)
    }

    pub fn from_path(path: impl AsRef<Path>) -> PortalResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PortalError::initialization(format!("open input script '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> PortalResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PortalError::serde(format!("serialize input script: {e}")))
    }

    pub fn validate(&self) -> PortalResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.duration_s.is_finite() || self.duration_s <= 0.0 {
            return Err(PortalError::validation("duration_s must be finite and > 0"));
        }
        for (i, ev) in self.events.iter().enumerate() {
            if !ev.at.is_finite() || ev.at < 0.0 {
                return Err(PortalError::validation(format!(
                    "event {i}: 'at' must be finite and >= 0"
                )));
            }
            if let ScriptAction::Move { x, y } | ScriptAction::Click { x, y } = ev.action
                && !(x.is_finite() && y.is_finite())
            {
                return Err(PortalError::validation(format!(
                    "event {i}: pointer coordinates must be finite"
                )));
            }
        }
        Ok(())
    }

    pub fn sort_events(&mut self) {
        self.events.sort_by(|a, b| a.at.total_cmp(&b.at));
    }

    /// Total frames the script spans.
    pub fn frame_count(&self) -> u64 {
        self.fps.secs_to_frames_floor(self.duration_s)
    }

    /// Built-in walkthrough: log in, open the first product, inject, go back, browse updates and
    /// log out.
    pub fn demo() -> Self {
        use ScriptAction::*;

        let ev = ScriptEvent::new;
        Self {
            fps: Fps::default(),
            duration_s: 14.0,
            events: vec![
                ev(0.2, Click { x: 200.0, y: 190.0 }),
                ev(
                    0.3,
                    Type {
                        text: "admin".to_string(),
                    },
                ),
                ev(0.5, Click { x: 200.0, y: 264.0 }),
                ev(
                    0.6,
                    Type {
                        text: "123".to_string(),
                    },
                ),
                ev(
                    0.8,
                    Key {
                        key: ScriptKey::Enter,
                    },
                ),
                ev(3.8, Move { x: 535.0, y: 97.0 }),
                ev(4.0, Click { x: 535.0, y: 97.0 }),
                ev(4.6, Click { x: 535.0, y: 367.0 }),
                ev(11.0, Click { x: 170.0, y: 367.0 }),
                ev(11.5, Click { x: 60.0, y: 105.0 }),
                ev(12.5, Click { x: 578.0, y: 25.0 }),
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
