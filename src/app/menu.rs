use crate::animation::notification::{InjectionNotification, NotificationTick};
use crate::app::catalog::{PRODUCTS, Product, UPDATES, UpdateEntry};
use crate::app::state::{Control, MenuItem, MenuSelection};
use crate::app::theme;
use crate::app::ui::Ui;
use crate::draw::list::FontRole;
use crate::foundation::core::{Point, Rect, Vec2};

const LOGO_POS: (f64, f64) = (14.5, 12.0);
const LOGOUT_GLYPH: &str = "=";
const LOGOUT_Y: f64 = 15.5;
const LOGOUT_SLOP: f64 = 5.0;
const HEADER_SEPARATOR_Y: f64 = 47.0;

const NAV_START_Y: f64 = 66.0;
const NAV_PITCH: f64 = 32.0;
const NAV_X: f64 = 23.0;
const ICON_GAP: f64 = 8.0;

const CONTENT_TOP: f64 = HEADER_SEPARATOR_Y + 20.0;
const CARD_PAD: f64 = 15.0;
const LIST_CARD_HEIGHT: f64 = 100.0;
const LIST_CARD_GAP: f64 = 15.0;
const UPDATE_CARD_HEIGHT: f64 = 135.0;
const VIEW_BUTTON: (f64, f64) = (60.0, 30.0);

const BOTTOM_BAR_Y: f64 = theme::WINDOW_HEIGHT - 50.0;
const ACTION_BUTTON: (f64, f64) = (100.0, 35.0);

const NOTIFICATION_HEIGHT: f64 = 50.0;
const NOTIFICATION_X: f64 = 5.0;

/// Horizontal layout shared by every menu page.
#[derive(Clone, Copy, Debug)]
struct Columns {
    /// x of the vertical separator between navigation and content.
    separator: f64,
    content_x: f64,
    content_width: f64,
}

impl Columns {
    fn content_right(&self) -> f64 {
        self.content_x + self.content_width
    }
}

/// Draw the menu and apply clicks. Returns `true` when the logout glyph was clicked.
pub(crate) fn menu_view(
    ui: &mut Ui<'_>,
    selection: &mut MenuSelection,
    notification: &mut Option<InjectionNotification>,
) -> bool {
    let logout = header(ui);

    let heading_w = ui.text_size("MEHDIFFER", FontRole::Heading).x;
    let separator = LOGO_POS.0 + heading_w + 13.5;
    ui.separator(
        Point::new(separator, HEADER_SEPARATOR_Y),
        Point::new(separator, theme::WINDOW_HEIGHT),
    );
    let cols = Columns {
        separator,
        content_x: separator + 20.0,
        content_width: theme::MENU_WIDTH - separator - 40.0,
    };

    navigation(ui, selection, separator);

    match (selection.item, selection.product) {
        (MenuItem::Products, Some(index)) => {
            if let Some(product) = PRODUCTS.get(index) {
                let action = product_detail(ui, cols, product);
                if action.inject {
                    *notification = Some(InjectionNotification::start(ui.now()));
                    tracing::info!(product = product.name, "injection notification started");
                }
                if action.back {
                    selection.product = None;
                }
            } else {
                selection.product = None;
            }
        }
        (MenuItem::Products, None) => {
            if let Some(index) = product_list(ui, cols) {
                selection.product = Some(index);
            }
        }
        (MenuItem::Updates, _) => update_log(ui, cols),
    }

    let now = ui.now();
    match notification.as_mut().map(|n| n.update(now)) {
        Some(NotificationTick::Finished) => {
            tracing::debug!("injection notification finished");
            *notification = None;
        }
        Some(tick) => {
            if let NotificationTick::StageChanged { from, to } = tick {
                tracing::debug!(from, to, "notification stage changed");
            }
            if let Some(n) = notification.as_ref() {
                draw_notification(ui, n);
            }
        }
        None => {}
    }

    logout
}

fn header(ui: &mut Ui<'_>) -> bool {
    ui.wordmark(LOGO_POS.0, LOGO_POS.1, FontRole::Heading);

    let size = ui.text_size(LOGOUT_GLYPH, FontRole::ExitIcon);
    let x = theme::MENU_WIDTH - size.x - LOGO_POS.0;
    let hit = Rect::new(
        x - LOGOUT_SLOP,
        LOGOUT_Y - LOGOUT_SLOP,
        x + size.x + LOGOUT_SLOP,
        LOGOUT_Y + size.y + LOGOUT_SLOP,
    );
    let (alpha, clicked) = ui.hover(Control::Logout, hit);
    let color = theme::LOGOUT.lerp_opaque(theme::LOGOUT_HOVER, alpha as f32);
    ui.text(x, LOGOUT_Y, LOGOUT_GLYPH, FontRole::ExitIcon, color);

    ui.separator(
        Point::new(0.0, HEADER_SEPARATOR_Y),
        Point::new(theme::MENU_WIDTH, HEADER_SEPARATOR_Y),
    );
    clicked
}

fn navigation(ui: &mut Ui<'_>, selection: &mut MenuSelection, separator: f64) {
    // (item, control, icon, label, hit-rect top, icon y, label y)
    let entries = [
        (
            MenuItem::Products,
            Control::NavProducts,
            "\u{e05b}",
            "Products",
            NAV_START_Y - 5.0,
            NAV_START_Y - 3.0,
            NAV_START_Y - 5.0,
        ),
        (
            MenuItem::Updates,
            Control::NavUpdates,
            "x",
            "Updates",
            NAV_START_Y + NAV_PITCH - 8.0,
            NAV_START_Y + NAV_PITCH - 6.0,
            NAV_START_Y + NAV_PITCH - 8.0,
        ),
    ];

    for (item, control, icon, label, top, icon_y, label_y) in entries {
        let hit = Rect::new(NAV_X, top, separator, top + NAV_PITCH);
        let (alpha, clicked) = ui.hover(control, hit);
        if clicked && selection.item != item {
            tracing::info!(?item, "menu page selected");
            selection.item = item;
        }

        let base = if selection.item == item {
            theme::PRIMARY
        } else {
            theme::SECONDARY
        };
        let color = base.lerp_opaque(theme::PRIMARY, (alpha * 0.5) as f32);

        let icon_w = ui.text_size(icon, FontRole::NavIcon).x;
        ui.text(NAV_X, icon_y, icon, FontRole::NavIcon, color);
        ui.text(NAV_X + icon_w + ICON_GAP, label_y, label, FontRole::Nav, color);
    }
}

fn ramp_button(ui: &mut Ui<'_>, control: Control, rect: Rect, label: &str) -> bool {
    let (alpha, clicked) = ui.hover(control, rect);
    ui.draw
        .fill_rect(rect, theme::FRAME_ROUNDING, theme::ramp_gray(alpha));
    ui.draw
        .stroke_rect(rect, theme::FRAME_ROUNDING, theme::BUTTON_EDGE);
    ui.text_in(rect, label, FontRole::Body, theme::PRIMARY);
    clicked
}

/// Returns the index of the product whose "View" button was clicked.
fn product_list(ui: &mut Ui<'_>, cols: Columns) -> Option<usize> {
    let mut opened = None;
    let label_h = ui.text_size("Last Updated:", FontRole::Body);

    for (i, product) in PRODUCTS.iter().enumerate() {
        let y = CONTENT_TOP + i as f64 * (LIST_CARD_HEIGHT + LIST_CARD_GAP);
        let card = Rect::new(cols.content_x, y, cols.content_right(), y + LIST_CARD_HEIGHT);
        ui.draw.stroke_rect(card, theme::CARD_ROUNDING, theme::EDGE);

        let tx = cols.content_x + CARD_PAD;
        ui.text(tx, y + CARD_PAD, product.list_title, FontRole::Nav, theme::PRIMARY);
        ui.text(
            tx,
            y + CARD_PAD + 25.0,
            product.list_status,
            FontRole::Body,
            product.status_color,
        );

        let sep_y = y + LIST_CARD_HEIGHT - 30.0;
        ui.separator(Point::new(card.x0, sep_y), Point::new(card.x1, sep_y));

        let line_y = y + LIST_CARD_HEIGHT - 15.0 - label_h.y * 0.5 - 1.0;
        ui.text(tx, line_y, "Last Updated:", FontRole::Body, theme::PRIMARY);
        ui.text(
            tx + label_h.x,
            line_y,
            product.last_updated,
            FontRole::Body,
            theme::SECONDARY,
        );

        let button = Rect::new(
            card.x1 - VIEW_BUTTON.0 - CARD_PAD,
            y + CARD_PAD,
            card.x1 - CARD_PAD,
            y + CARD_PAD + VIEW_BUTTON.1,
        );
        if ramp_button(ui, Control::View(i), button, "View") {
            opened = Some(i);
        }
    }

    opened
}

#[derive(Clone, Copy, Debug, Default)]
struct DetailAction {
    inject: bool,
    back: bool,
}

fn product_detail(ui: &mut Ui<'_>, cols: Columns, product: &Product) -> DetailAction {
    let mut action = DetailAction::default();
    let Columns {
        content_x,
        content_width,
        ..
    } = cols;

    let title_y = CONTENT_TOP - 4.0;
    let card_x = content_x - 1.0;
    let wide = |top: f64, height: f64| {
        Rect::new(card_x - 4.0, top, card_x + content_width + 6.0, top + height)
    };

    ui.draw
        .stroke_rect(wide(title_y, 70.0), theme::FRAME_ROUNDING, theme::EDGE);
    let name_y = title_y + 15.0;
    let name_h = ui.text_size(product.name, FontRole::Heading).y;
    ui.text_centered(
        content_x,
        content_width,
        name_y,
        product.name,
        FontRole::Heading,
        theme::PRIMARY,
    );
    ui.text_centered(
        content_x,
        content_width,
        name_y + name_h + 5.0,
        product.version,
        FontRole::Body,
        theme::SECONDARY,
    );

    let dates_y = title_y + 70.0 + 8.0;
    let date_card_w = (content_width - 4.0) * 0.5;
    // Two 18 px lines with a 4 px gap, centered in a 60 px card.
    let pad_y = (60.0 - (18.0 + 4.0 + 18.0)) * 0.5;
    let date_cards = [
        (card_x, "Subscription", product.subscription),
        (card_x + date_card_w + 10.0, "Expiration", product.expiration),
    ];
    for (x, label, value) in date_cards {
        let rect = Rect::new(x - 4.0, dates_y, x + date_card_w, dates_y + 60.0);
        ui.draw
            .stroke_rect(rect, theme::FRAME_ROUNDING, theme::EDGE);
        ui.text(x + CARD_PAD, dates_y + pad_y, label, FontRole::Body, theme::SECONDARY);
        ui.text(
            x + CARD_PAD,
            dates_y + pad_y + 22.0,
            value,
            FontRole::Body,
            theme::PRIMARY,
        );
    }

    let features_y = dates_y + 60.0 + 8.0;
    ui.draw
        .stroke_rect(wide(features_y, 110.0), theme::FRAME_ROUNDING, theme::EDGE);
    let fx = card_x + CARD_PAD;
    ui.text(fx, features_y + CARD_PAD, "Features", FontRole::Body, theme::PRIMARY);
    let list_y = features_y + CARD_PAD + 25.0;
    for (i, feature) in product.features.iter().enumerate() {
        ui.text(
            fx,
            list_y + i as f64 * 20.0,
            feature,
            FontRole::Body,
            theme::SECONDARY,
        );
    }

    ui.separator(
        Point::new(cols.separator, BOTTOM_BAR_Y - 16.0),
        Point::new(theme::MENU_WIDTH, BOTTOM_BAR_Y - 16.0),
    );

    let (bw, bh) = ACTION_BUTTON;
    let inject_x = theme::MENU_WIDTH - bw - 15.0;
    let inject = Rect::new(inject_x, BOTTOM_BAR_Y, inject_x + bw, BOTTOM_BAR_Y + bh);
    action.inject = ramp_button(ui, Control::Inject, inject, "Inject");

    let status = ui.text_size(product.status, FontRole::Body);
    ui.text(
        inject_x - status.x - 20.0,
        BOTTOM_BAR_Y + (bh - status.y) * 0.5,
        product.status,
        FontRole::Body,
        product.status_color,
    );

    const BACK_ICON: &str = "l";
    const BACK_LABEL: &str = " Go Back";
    let icon = ui.text_size(BACK_ICON, FontRole::NavIcon);
    let label = ui.text_size(BACK_LABEL, FontRole::Body);
    let bx = content_x - 5.0;
    let back = Rect::new(bx, BOTTOM_BAR_Y, bx + icon.x + label.x, BOTTOM_BAR_Y + bh);
    let (alpha, clicked) = ui.hover(Control::Back, back);
    let color = theme::SECONDARY.lerp_opaque(theme::PRIMARY, alpha as f32);
    ui.text(
        bx,
        BOTTOM_BAR_Y + (bh - icon.y) * 0.5,
        BACK_ICON,
        FontRole::NavIcon,
        color,
    );
    ui.text(
        bx + icon.x,
        BOTTOM_BAR_Y + (bh - label.y) * 0.5,
        BACK_LABEL,
        FontRole::Body,
        color,
    );
    action.back = clicked;

    action
}

fn update_log(ui: &mut Ui<'_>, cols: Columns) {
    for (i, entry) in UPDATES.iter().enumerate() {
        let y = CONTENT_TOP + i as f64 * (UPDATE_CARD_HEIGHT + LIST_CARD_GAP);
        update_card(ui, cols, y, entry);
    }
}

fn update_card(ui: &mut Ui<'_>, cols: Columns, y: f64, entry: &UpdateEntry) {
    let right = cols.content_right();
    let card = Rect::new(cols.content_x, y, right, y + UPDATE_CARD_HEIGHT);
    ui.draw.stroke_rect(card, theme::CARD_ROUNDING, theme::EDGE);

    let (pad_x, pad_y) = (10.0, 5.0);
    let badge = ui.text_size(entry.badge, FontRole::Body);
    let badge_rect = Rect::new(
        right - badge.x - pad_x * 2.0 - CARD_PAD,
        y + CARD_PAD,
        right - CARD_PAD,
        y + CARD_PAD + badge.y + pad_y * 2.0,
    );
    ui.draw.stroke_rect(badge_rect, 4.0, theme::EDGE);
    ui.text(
        right - badge.x - pad_x - CARD_PAD,
        y + CARD_PAD + pad_y,
        entry.badge,
        FontRole::Body,
        theme::SECONDARY,
    );

    let tx = cols.content_x + CARD_PAD;
    let top = y + CARD_PAD;
    ui.text(tx, top, entry.version, FontRole::Nav, theme::PRIMARY);
    ui.text(tx + 60.0, top, entry.date, FontRole::Body, theme::SECONDARY);
    ui.text(tx, top + 30.0, entry.title, FontRole::Body, theme::PRIMARY);
    for (bullet, dy) in entry.bullets.iter().zip([52.0, 70.0, 88.0]) {
        ui.text(tx, top + dy, bullet, FontRole::Body, theme::SECONDARY);
    }
}

fn draw_notification(ui: &mut Ui<'_>, n: &InjectionNotification) {
    let stage = n.stage_info();
    let alpha = n.alpha() as f32;

    // the icon is laid out with body metrics, then drawn in the icon face
    let icon = ui.text_size(stage.icon, FontRole::Body);
    let text = ui.text_size(stage.text, FontRole::Body);
    let width = CARD_PAD + icon.x + ICON_GAP + text.x + CARD_PAD;
    let y = theme::WINDOW_HEIGHT - NOTIFICATION_HEIGHT + 15.0 - n.y_offset();
    let rect = Rect::new(
        NOTIFICATION_X,
        y,
        NOTIFICATION_X + width,
        y + NOTIFICATION_HEIGHT,
    );

    ui.background_patch(
        rect,
        Vec2::new(theme::MENU_WIDTH, theme::WINDOW_HEIGHT),
        alpha,
    );
    ui.draw
        .stroke_rect(rect, theme::CARD_ROUNDING, theme::EDGE.with_alpha(alpha));

    let color = theme::PRIMARY.with_alpha(alpha);
    let icon_x = NOTIFICATION_X + CARD_PAD;
    ui.text(
        icon_x,
        y + (NOTIFICATION_HEIGHT - icon.y) * 0.5,
        stage.icon,
        FontRole::NavIcon,
        color,
    );
    ui.text(
        icon_x + icon.x + ICON_GAP + stage.extra_spacing,
        y + (NOTIFICATION_HEIGHT - text.y) * 0.5 - 2.0,
        stage.text,
        FontRole::Body,
        color,
    );
}
