use crate::app::input::{CursorIcon, KeyInput};
use crate::app::state::{Control, LoginField, LoginForm};
use crate::app::theme;
use crate::app::ui::Ui;
use crate::draw::list::FontRole;
use crate::foundation::core::Rect;

const LOGO_Y: f64 = 60.0;
const SUBTITLE_Y: f64 = LOGO_Y + 31.0;
const CONTENT_WIDTH: f64 = 320.0;
const USERNAME_LABEL_Y: f64 = 150.0;
const USERNAME_INPUT_Y: f64 = USERNAME_LABEL_Y + 23.0;
const PASSWORD_LABEL_Y: f64 = USERNAME_INPUT_Y + 50.0;
const PASSWORD_INPUT_Y: f64 = PASSWORD_LABEL_Y + 23.0;
const BUTTON_Y: f64 = PASSWORD_INPUT_Y + 58.0;
const BUTTON_HEIGHT: f64 = 42.0;

const USERNAME_HINT: &str = "user123";
const PASSWORD_HINT: &str = "**********";

fn content_x() -> f64 {
    (theme::LOGIN_WIDTH - CONTENT_WIDTH) * 0.5
}

fn input_height() -> f64 {
    f64::from(FontRole::Body.size_px()) + 2.0 * theme::FRAME_PAD_Y
}

pub(crate) fn input_rect(field: LoginField) -> Rect {
    let y = match field {
        LoginField::Username => USERNAME_INPUT_Y,
        LoginField::Password => PASSWORD_INPUT_Y,
    };
    let x = content_x();
    Rect::new(x, y, x + CONTENT_WIDTH, y + input_height())
}

pub(crate) fn button_rect() -> Rect {
    let x = content_x();
    Rect::new(x, BUTTON_Y, x + CONTENT_WIDTH, BUTTON_Y + BUTTON_HEIGHT)
}

/// Draw the login form and apply this frame's clicks and keys.
///
/// Returns `true` when a submit happened with matching credentials.
pub(crate) fn login_view(ui: &mut Ui<'_>, form: &mut LoginForm) -> bool {
    let width = theme::LOGIN_WIDTH;
    let x = content_x();

    let logo_w =
        ui.text_size("MEH", FontRole::Logo).x + ui.text_size("DIFFER", FontRole::Logo).x;
    ui.wordmark((width - logo_w) * 0.5, LOGO_Y, FontRole::Logo);
    ui.text_centered(
        0.0,
        width,
        SUBTITLE_Y,
        "Authentication Portal",
        FontRole::Body,
        theme::SECONDARY,
    );

    if ui.input.clicked {
        form.focus = [LoginField::Username, LoginField::Password]
            .into_iter()
            .find(|f| ui.hovered(input_rect(*f)));
    }

    let mut submit = false;
    for key in &ui.input.keys {
        match *key {
            KeyInput::Char(c) => form.push_char(c),
            KeyInput::Backspace => form.backspace(),
            KeyInput::Tab => form.tab(),
            KeyInput::Enter => submit |= form.focus.is_some(),
        }
    }

    ui.text(x, USERNAME_LABEL_Y, "Username", FontRole::Body, theme::SECONDARY);
    text_input(ui, form, LoginField::Username);

    ui.text(x, PASSWORD_LABEL_Y, "Password", FontRole::Body, theme::SECONDARY);
    forgot_password(ui, x + CONTENT_WIDTH);
    text_input(ui, form, LoginField::Password);

    let button = button_rect();
    let (alpha, clicked) = ui.hover(Control::LoginButton, button);
    let fill = theme::BUTTON_BG.lerp_opaque(theme::BUTTON_HOVER, alpha as f32);
    ui.draw.fill_rect(button, theme::FRAME_ROUNDING, fill);
    ui.draw
        .stroke_rect(button, theme::FRAME_ROUNDING, theme::BUTTON_BORDER);
    ui.text_in(button, "Login", FontRole::Body, theme::PRIMARY);
    submit |= clicked;

    submit && form.credentials_match()
}

/// Right-aligned link; hover only.
fn forgot_password(ui: &mut Ui<'_>, right: f64) {
    const LABEL: &str = "Forgot Password?";
    let size = ui.text_size(LABEL, FontRole::Body);
    let rect = Rect::new(
        right - size.x,
        PASSWORD_LABEL_Y,
        right,
        PASSWORD_LABEL_Y + size.y,
    );
    let (alpha, _) = ui.hover(Control::ForgotPassword, rect);
    let color = theme::LINK_TEXT.lerp_opaque(theme::LINK_HOVER, alpha as f32);
    ui.text(rect.x0, rect.y0, LABEL, FontRole::Body, color);
}

fn text_input(ui: &mut Ui<'_>, form: &LoginForm, field: LoginField) {
    let rect = input_rect(field);
    if ui.hovered(rect) {
        ui.cursor = CursorIcon::TextInput;
    }

    ui.draw
        .fill_rect(rect, theme::FRAME_ROUNDING, theme::INPUT_BG);
    ui.draw
        .stroke_rect(rect, theme::FRAME_ROUNDING, theme::INPUT_BORDER);

    let value = form.buffer(field);
    let tx = rect.x0 + theme::FRAME_PAD_X;
    let ty = rect.y0 + theme::FRAME_PAD_Y;
    if value.is_empty() {
        let hint = match field {
            LoginField::Username => USERNAME_HINT,
            LoginField::Password => PASSWORD_HINT,
        };
        ui.text(tx, ty, hint, FontRole::Body, theme::SECONDARY);
    } else if field == LoginField::Password {
        let masked = "*".repeat(value.chars().count());
        ui.text(tx, ty, &masked, FontRole::Body, theme::PRIMARY);
    } else {
        ui.text(tx, ty, value, FontRole::Body, theme::PRIMARY);
    }

    if form.focus == Some(field) {
        ui.draw
            .stroke_rect(rect, theme::FRAME_ROUNDING, theme::INPUT_BORDER_ACTIVE);
    }
}
