use crate::app::input::{FrameInput, FrameOutput, KeyInput};
use crate::app::portal::App;
use crate::app::state::ViewKind;
use crate::app::theme;
use crate::app::window::{HeadlessWindow, WindowHost};
use crate::assets::store::PreparedAssets;
use crate::foundation::core::{FrameIndex, Point};
use crate::foundation::error::{PortalError, PortalResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::session::clock::{FrameClock, FrameTick};
use crate::session::script::{InputScript, ScriptAction};
use crate::session::sink::{FrameSink, SinkConfig};

/// A view change observed by the session.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Transition {
    pub at: f64,
    pub from: ViewKind,
    pub to: ViewKind,
}

/// Summary of a [`Session::run`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SessionReport {
    pub frames: u64,
    pub rendered: u64,
    pub transitions: Vec<Transition>,
    pub exited: bool,
    /// Highest injection stage shown, if the notification appeared.
    pub max_notification_stage: Option<usize>,
    pub final_view: Option<ViewKind>,
}

/// Pointer and button state carried between frames.
///
/// The pointer is tracked in screen space like a physical mouse, so dragging the window does not
/// drag the pointer with it.
#[derive(Clone, Copy, Debug, Default)]
struct PointerState {
    screen: Point,
    down: bool,
    release_next: bool,
}

/// Headless portal run: frame clock, scripted input, window host, app and renderer.
pub struct Session {
    script: InputScript,
    clock: FrameClock,
    app: App,
    host: HeadlessWindow,
    assets: PreparedAssets,
    backend: Box<dyn RenderBackend>,
    pointer: PointerState,
    next_event: usize,
    last_output: Option<FrameOutput>,
}

impl Session {
    pub fn new(
        mut script: InputScript,
        assets: PreparedAssets,
        backend: Box<dyn RenderBackend>,
    ) -> PortalResult<Self> {
        script.validate()?;
        script.sort_events();

        let host = HeadlessWindow::centered(
            theme::LOGIN_WIDTH as u32,
            theme::WINDOW_HEIGHT as u32,
        );
        let pointer = PointerState {
            screen: host.frame().to_screen(Point::new(-1.0, -1.0)),
            ..PointerState::default()
        };
        Ok(Self {
            clock: FrameClock::new(script.fps),
            app: App::new(assets.status().clone()),
            script,
            host,
            assets,
            backend,
            pointer,
            next_event: 0,
            last_output: None,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn host(&self) -> &HeadlessWindow {
        &self.host
    }

    pub fn script(&self) -> &InputScript {
        &self.script
    }

    pub fn is_finished(&self) -> bool {
        self.app.exit_requested() || self.clock.frames_elapsed() >= self.script.frame_count()
    }

    /// Run one frame: apply due script events, update the app and keep its output.
    pub fn step(&mut self) -> (FrameTick, &FrameOutput) {
        let tick = self.clock.tick();
        let input = self.frame_input(&tick);
        let out = self
            .app
            .update(&input, &mut self.host, &mut self.assets.fonts);
        (tick, self.last_output.insert(out))
    }

    /// Rasterize the most recent frame's draw list.
    pub fn render_last(&mut self) -> PortalResult<FrameRGBA> {
        let out = self
            .last_output
            .as_ref()
            .ok_or_else(|| PortalError::render("no frame has been stepped yet"))?;
        self.backend.render(&out.draw, &mut self.assets)
    }

    /// Step to the frame at `at` seconds and render it.
    ///
    /// Stepping stops early when the app exits or the script ends; `at` past the script's
    /// duration is rejected.
    pub fn render_at(&mut self, at: f64) -> PortalResult<FrameRGBA> {
        if !at.is_finite() || at < 0.0 {
            return Err(PortalError::validation("frame time must be finite and >= 0"));
        }
        if at > self.script.duration_s {
            return Err(PortalError::validation(format!(
                "frame time {at}s is past the script duration of {}s",
                self.script.duration_s
            )));
        }
        let target = self.script.fps.secs_to_frames_floor(at);
        loop {
            let (tick, out) = self.step();
            let reached = tick.index.0 >= target || out.exit_requested;
            if reached || self.is_finished() {
                break;
            }
        }
        self.render_last()
    }

    /// Run the script to completion, pushing every `every`th frame into `sink`.
    #[tracing::instrument(skip(self, sink), fields(fps = self.script.fps.as_f64()))]
    pub fn run(&mut self, sink: &mut dyn FrameSink, every: u32) -> PortalResult<SessionReport> {
        if every == 0 {
            return Err(PortalError::validation("frame stride must be > 0"));
        }

        let frame = self.host.frame();
        sink.begin(SinkConfig {
            width: frame.width,
            height: frame.height,
            fps: self.script.fps,
        })?;

        let render = !sink.discards_frames();
        let mut report = SessionReport::default();
        while !self.is_finished() {
            let before = self.app.view_kind();
            let (tick, out) = self.step();
            let exited = out.exit_requested;
            report.frames += 1;

            let after = self.app.view_kind();
            if after != before {
                report.transitions.push(Transition {
                    at: tick.time,
                    from: before,
                    to: after,
                });
            }
            if let Some(stage) = self.app.notification().map(|n| n.stage()) {
                report.max_notification_stage = report.max_notification_stage.max(Some(stage));
            }

            if render && (tick.index.0 % u64::from(every) == 0 || exited) {
                let rgba = self.render_last()?;
                sink.push_frame(tick.index, &rgba)?;
                report.rendered += 1;
            }
        }
        sink.end()?;

        report.exited = self.app.exit_requested();
        report.final_view = Some(self.app.view_kind());
        tracing::info!(
            frames = report.frames,
            rendered = report.rendered,
            transitions = report.transitions.len(),
            exited = report.exited,
            "session finished"
        );
        Ok(report)
    }

    fn frame_input(&mut self, tick: &FrameTick) -> FrameInput {
        let mut clicked = false;
        let mut keys = Vec::new();
        if std::mem::take(&mut self.pointer.release_next) {
            self.pointer.down = false;
        }

        while let Some(ev) = self.script.events.get(self.next_event) {
            if ev.at > tick.time {
                break;
            }
            let frame = self.host.frame();
            match &ev.action {
                ScriptAction::Move { x, y } => {
                    self.pointer.screen = frame.to_screen(Point::new(*x, *y));
                }
                ScriptAction::Press => {
                    clicked |= !self.pointer.down;
                    self.pointer.down = true;
                }
                ScriptAction::Release => self.pointer.down = false,
                ScriptAction::Click { x, y } => {
                    self.pointer.screen = frame.to_screen(Point::new(*x, *y));
                    clicked |= !self.pointer.down;
                    self.pointer.down = true;
                    self.pointer.release_next = true;
                }
                ScriptAction::Type { text } => keys.extend(text.chars().map(KeyInput::Char)),
                ScriptAction::Key { key } => keys.push((*key).into()),
            }
            self.next_event += 1;
        }

        let top_left = self.host.frame().top_left();
        FrameInput {
            time: tick.time,
            delta_time: tick.delta_time,
            pointer: self.pointer.screen - top_left.to_vec2(),
            pointer_screen: self.pointer.screen,
            mouse_down: self.pointer.down,
            clicked,
            keys,
        }
    }

    /// Index the next [`Session::step`] will produce.
    pub fn next_frame(&self) -> FrameIndex {
        FrameIndex(self.clock.frames_elapsed())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/runner.rs"]
mod tests;
