//! Palette and fixed geometry.

use crate::foundation::core::Rgba;

pub const BACKGROUND: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
pub const PRIMARY: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
pub const SECONDARY: Rgba = Rgba::new(0.55, 0.55, 0.55, 1.0);
pub const RED: Rgba = Rgba::new(0.90, 0.20, 0.20, 1.0);

pub const BUTTON_BG: Rgba = Rgba::gray8(14);
pub const BUTTON_BORDER: Rgba = Rgba::gray8(21);
pub const BUTTON_HOVER: Rgba = Rgba::gray8(16);

pub const INPUT_BG: Rgba = Rgba::gray8(11);
pub const INPUT_BORDER: Rgba = Rgba::gray8(18);
pub const INPUT_BORDER_ACTIVE: Rgba = Rgba::gray8(25);

pub const LINK_TEXT: Rgba = Rgba::new(0.60, 0.60, 0.60, 1.0);
pub const LINK_HOVER: Rgba = Rgba::new(0.80, 0.80, 0.80, 1.0);

/// Card outlines and separators.
pub const EDGE: Rgba = Rgba::gray8(14);
/// Small button outlines.
pub const BUTTON_EDGE: Rgba = Rgba::gray8(20);

pub const LOGOUT: Rgba = Rgba::from_rgb8(216, 20, 59);
pub const LOGOUT_HOVER: Rgba = Rgba::from_rgb8(186, 15, 49);

pub const STATUS_OK: Rgba = Rgba::new(0.0, 0.8, 0.0, 1.0);
pub const STATUS_WARN: Rgba = Rgba::new(1.0, 0.6, 0.0, 1.0);

/// Gray levels of the integer hover ramp used by "View" and "Inject".
pub const RAMP_BASE: u8 = 14;
pub const RAMP_HOVER: u8 = 16;

/// `14 + trunc(2 * alpha)`.
pub fn ramp_gray(alpha: f64) -> Rgba {
    let step = (f64::from(RAMP_HOVER - RAMP_BASE) * alpha) as u8;
    Rgba::gray8(RAMP_BASE.saturating_add(step))
}

pub const WINDOW_HEIGHT: f64 = 400.0;
pub const LOGIN_WIDTH: f64 = 400.0;
pub const MENU_WIDTH: f64 = 600.0;
pub const TITLE_BAR_HEIGHT: f64 = 35.0;

pub const FRAME_ROUNDING: f64 = 5.0;
pub const CARD_ROUNDING: f64 = 8.0;
/// Inner padding of text inputs and buttons.
pub const FRAME_PAD_X: f64 = 14.0;
pub const FRAME_PAD_Y: f64 = 10.0;
