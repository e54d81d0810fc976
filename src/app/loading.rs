use crate::animation::ease::AnimatedScalar;
use crate::animation::spinner::{SPINNER_THICKNESS, Spinner};
use crate::app::state::LoadingSession;
use crate::app::theme;
use crate::app::ui::Ui;
use crate::draw::list::FontRole;
use crate::foundation::core::Point;

const CAPTION: &str = "Verifying credentials";
/// Spinner sits this far above the view center, the caption this far below.
const CENTER_OFFSET: f64 = 20.0;

/// Spin, fade in once revealed, and report whether the loading time is over.
///
/// The frame that reports `true` still draws its content.
pub(crate) fn loading_view(
    ui: &mut Ui<'_>,
    session: &LoadingSession,
    spinner: &mut Spinner,
    content_alpha: &mut AnimatedScalar,
) -> bool {
    let (width, height) = (theme::MENU_WIDTH, theme::WINDOW_HEIGHT);
    let now = ui.now();

    spinner.advance(ui.input.delta_time);
    let done = session.is_done(now);

    if session.shows_content(now) {
        let alpha = content_alpha.step_toward(1.0) as f32;
        let color = theme::SECONDARY.with_alpha(alpha);

        let center = Point::new(width * 0.5, height * 0.5 - CENTER_OFFSET);
        for (from, to) in spinner.segments(center) {
            ui.draw.line(from, to, color, SPINNER_THICKNESS);
        }
        ui.text_centered(
            0.0,
            width,
            height * 0.5 + CENTER_OFFSET,
            CAPTION,
            FontRole::Body,
            color,
        );
    }

    done
}
