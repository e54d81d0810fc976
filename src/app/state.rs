use std::collections::HashMap;

use crate::animation::ease::AnimatedScalar;
use crate::foundation::core::{Point, Vec2};

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "123";
pub const USERNAME_CAPACITY: usize = 32;
pub const PASSWORD_CAPACITY: usize = 62;

/// Seconds from login to the menu.
pub const LOADING_DURATION: f64 = 2.5;
/// Seconds before the spinner appears.
pub const LOADING_REVEAL: f64 = 0.3;

/// The screen currently shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewState {
    Login,
    Loading(LoadingSession),
    Menu,
}

impl ViewState {
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewState::Login => ViewKind::Login,
            ViewState::Loading(_) => ViewKind::Loading,
            ViewState::Menu => ViewKind::Menu,
        }
    }
}

/// Data-free view tag for reports and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Login,
    Loading,
    Menu,
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ViewKind::Login => "login",
            ViewKind::Loading => "loading",
            ViewKind::Menu => "menu",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingSession {
    pub started_at: f64,
}

impl LoadingSession {
    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.started_at
    }

    pub fn is_done(&self, now: f64) -> bool {
        self.elapsed(now) >= LOADING_DURATION
    }

    pub fn shows_content(&self, now: f64) -> bool {
        self.elapsed(now) >= LOADING_REVEAL
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItem {
    #[default]
    Products,
    Updates,
}

/// Which menu page is shown and which product (if any) is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuSelection {
    pub item: MenuItem,
    pub product: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    pub fn capacity(self) -> usize {
        match self {
            LoginField::Username => USERNAME_CAPACITY,
            LoginField::Password => PASSWORD_CAPACITY,
        }
    }

    fn next(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

/// Text buffers and focus of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: Option<LoginField>,
}

impl LoginForm {
    pub fn buffer(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        }
    }

    fn buffer_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// Append to the focused field; ignored when nothing is focused, at capacity, or for control
    /// characters.
    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.focus else {
            return;
        };
        if c.is_control() {
            return;
        }
        let buf = self.buffer_mut(field);
        if buf.chars().count() < field.capacity() {
            buf.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focus {
            self.buffer_mut(field).pop();
        }
    }

    pub fn tab(&mut self) {
        self.focus = Some(self.focus.map_or(LoginField::Username, LoginField::next));
    }

    /// Exact, case-sensitive match against the fixed credentials.
    pub fn credentials_match(&self) -> bool {
        self.username == USERNAME && self.password == PASSWORD
    }
}

/// Window drag in progress: cursor offset from the window's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub offset: Option<Vec2>,
}

impl DragState {
    pub fn begin(&mut self, cursor_screen: Point, window_top_left: Point) {
        self.offset = Some(cursor_screen - window_top_left);
    }

    pub fn end(&mut self) {
        self.offset = None;
    }

    pub fn is_active(&self) -> bool {
        self.offset.is_some()
    }
}

/// Controls with an eased hover alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    LoginButton,
    ForgotPassword,
    NavProducts,
    NavUpdates,
    Logout,
    Inject,
    Back,
    View(usize),
}

impl Control {
    pub fn hover_rate(self) -> f64 {
        match self {
            Control::LoginButton | Control::ForgotPassword => 0.10,
            _ => 0.15,
        }
    }
}

/// Hover alphas keyed by control, created lazily at zero.
#[derive(Clone, Debug, Default)]
pub struct HoverSet {
    alphas: HashMap<Control, AnimatedScalar>,
}

impl HoverSet {
    /// Ease `control` toward 1 if `hovered`, else toward 0, and return the new alpha.
    pub fn step(&mut self, control: Control, hovered: bool) -> f64 {
        self.alphas
            .entry(control)
            .or_insert_with(|| AnimatedScalar::new(0.0, control.hover_rate()))
            .step_hover(hovered)
    }

    pub fn get(&self, control: Control) -> f64 {
        self.alphas.get(&control).map_or(0.0, AnimatedScalar::current)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/state.rs"]
mod tests;
