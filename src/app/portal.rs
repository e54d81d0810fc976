use crate::animation::ease::{AnimatedScalar, EaseStep};
use crate::animation::notification::InjectionNotification;
use crate::animation::spinner::Spinner;
use crate::app::input::{CursorIcon, FrameInput, FrameOutput};
use crate::app::loading::loading_view;
use crate::app::login::login_view;
use crate::app::menu::menu_view;
use crate::app::state::{
    Control, DragState, HoverSet, LoadingSession, LoginForm, MenuSelection, ViewKind, ViewState,
};
use crate::app::theme;
use crate::app::ui::Ui;
use crate::app::window::WindowHost;
use crate::assets::store::AssetStatus;
use crate::draw::list::DrawList;
use crate::draw::text::TextMeasure;
use crate::foundation::core::{Canvas, Rect};

const WIDTH_RATE: f64 = 0.08;
const WIDTH_SNAP: f64 = 0.5;
const LOADING_ALPHA_RATE: f64 = 0.15;

/// The portal: login form, loading screen and menu, advanced one frame at a time.
///
/// All state lives here. [`App::update`] is the only mutating entry point and never fails.
#[derive(Debug)]
pub struct App {
    view: ViewState,
    menu: MenuSelection,
    login: LoginForm,
    drag: DragState,
    width: AnimatedScalar,
    loading_alpha: AnimatedScalar,
    spinner: Spinner,
    notification: Option<InjectionNotification>,
    hovers: HoverSet,
    assets: AssetStatus,
    exited: bool,
}

impl App {
    pub fn new(assets: AssetStatus) -> Self {
        Self {
            view: ViewState::Login,
            menu: MenuSelection::default(),
            login: LoginForm::default(),
            drag: DragState::default(),
            width: AnimatedScalar::new(theme::LOGIN_WIDTH, WIDTH_RATE).with_snap(WIDTH_SNAP),
            loading_alpha: AnimatedScalar::new(0.0, LOADING_ALPHA_RATE),
            spinner: Spinner::default(),
            notification: None,
            hovers: HoverSet::default(),
            assets,
            exited: false,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_kind(&self) -> ViewKind {
        self.view.kind()
    }

    pub fn selection(&self) -> MenuSelection {
        self.menu
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    /// Direct access for hosts that feed text from elsewhere (and for tests).
    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn notification(&self) -> Option<&InjectionNotification> {
        self.notification.as_ref()
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn loading_alpha(&self) -> f64 {
        self.loading_alpha.current()
    }

    pub fn current_width(&self) -> f64 {
        self.width.current()
    }

    pub fn target_width(&self) -> f64 {
        self.width.target()
    }

    pub fn hover_alpha(&self, control: Control) -> f64 {
        self.hovers.get(control)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn exit_requested(&self) -> bool {
        self.exited
    }

    fn view_width(&self) -> f64 {
        match self.view {
            ViewState::Login => theme::LOGIN_WIDTH,
            ViewState::Loading(_) | ViewState::Menu => theme::MENU_WIDTH,
        }
    }

    /// Advance one frame.
    pub fn update(
        &mut self,
        input: &FrameInput,
        host: &mut dyn WindowHost,
        measure: &mut dyn TextMeasure,
    ) -> FrameOutput {
        if self.exited {
            let frame = host.frame();
            return FrameOutput {
                draw: DrawList::new(Canvas::new(frame.width, frame.height)),
                exit_requested: true,
                cursor: CursorIcon::Arrow,
            };
        }

        let view_width = self.view_width();
        self.width.set_target(view_width);
        self.ease_width(host);
        drag_window(&mut self.drag, input, host, view_width);

        let frame = host.frame();
        let mut ui = Ui::new(
            DrawList::new(Canvas::new(frame.width, frame.height)),
            input,
            measure,
            &mut self.hovers,
            &self.assets,
        );
        ui.background(view_width, theme::WINDOW_HEIGHT);

        let mut next = None;
        match self.view {
            ViewState::Login => {
                if login_view(&mut ui, &mut self.login) {
                    next = Some(ViewState::Loading(LoadingSession {
                        started_at: input.time,
                    }));
                }
            }
            ViewState::Loading(session) => {
                if loading_view(
                    &mut ui,
                    &session,
                    &mut self.spinner,
                    &mut self.loading_alpha,
                ) {
                    next = Some(ViewState::Menu);
                }
            }
            ViewState::Menu => {
                if menu_view(&mut ui, &mut self.menu, &mut self.notification) {
                    tracing::info!(at = input.time, "exit requested");
                    self.exited = true;
                }
            }
        }
        let (draw, cursor) = ui.finish();

        if let Some(next) = next {
            self.enter(next, input.time);
        }

        FrameOutput {
            draw,
            exit_requested: self.exited,
            cursor,
        }
    }

    fn enter(&mut self, next: ViewState, now: f64) {
        tracing::info!(from = %self.view.kind(), to = %next.kind(), at = now, "view transition");
        if let ViewState::Loading(_) = next {
            self.loading_alpha.reset(0.0);
        }
        self.view = next;
        self.width.set_target(self.view_width());
    }

    /// Step the window width toward its target, resizing about the current horizontal center.
    fn ease_width(&mut self, host: &mut dyn WindowHost) {
        if self.width.step() != EaseStep::Moved {
            return;
        }
        let frame = host.frame();
        let width = self.width.current() as i32;
        let x = frame.center_x() - width / 2;
        if x != frame.x {
            host.reposition(x, frame.y);
        }
        host.resize(width.max(1) as u32, theme::WINDOW_HEIGHT as u32);
    }
}

fn drag_window(
    drag: &mut DragState,
    input: &FrameInput,
    host: &mut dyn WindowHost,
    view_width: f64,
) {
    let title_bar = Rect::new(0.0, 0.0, view_width, theme::TITLE_BAR_HEIGHT);
    if input.clicked && title_bar.contains(input.pointer) {
        drag.begin(input.pointer_screen, host.frame().top_left());
    }

    if let Some(offset) = drag.offset {
        if input.mouse_down {
            let corner = input.pointer_screen - offset;
            host.reposition(corner.x.round() as i32, corner.y.round() as i32);
        } else {
            drag.end();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/portal.rs"]
mod tests;
