use super::*;

#[test]
fn only_exact_credentials_match() {
    let cases = [
        ("admin", "123", true),
        ("Admin", "123", false),
        ("admin", "1234", false),
        ("admin ", "123", false),
        ("", "", false),
        ("123", "admin", false),
    ];
    for (u, p, ok) in cases {
        let form = LoginForm {
            username: u.to_string(),
            password: p.to_string(),
            focus: None,
        };
        assert_eq!(form.credentials_match(), ok, "{u:?}/{p:?}");
    }
}

#[test]
fn typing_respects_focus_and_capacity() {
    let mut form = LoginForm::default();
    form.push_char('x');
    assert!(form.username.is_empty());

    form.focus = Some(LoginField::Username);
    for _ in 0..40 {
        form.push_char('a');
    }
    assert_eq!(form.username.chars().count(), USERNAME_CAPACITY);
    form.backspace();
    assert_eq!(form.username.chars().count(), USERNAME_CAPACITY - 1);

    form.tab();
    assert_eq!(form.focus, Some(LoginField::Password));
    for _ in 0..70 {
        form.push_char('1');
    }
    assert_eq!(form.password.chars().count(), PASSWORD_CAPACITY);
    form.tab();
    assert_eq!(form.focus, Some(LoginField::Username));
}

#[test]
fn loading_session_thresholds() {
    let s = LoadingSession { started_at: 1.0 };
    assert!(!s.shows_content(1.29));
    assert!(s.shows_content(1.3));
    assert!(!s.is_done(1.0 + 2.4999));
    assert!(s.is_done(1.0 + 2.5001));
}

#[test]
fn hover_set_uses_per_control_rates() {
    let mut h = HoverSet::default();
    assert_eq!(h.get(Control::Logout), 0.0);
    assert!((h.step(Control::LoginButton, true) - 0.10).abs() < 1e-12);
    assert!((h.step(Control::View(1), true) - 0.15).abs() < 1e-12);
    assert!((h.get(Control::LoginButton) - 0.10).abs() < 1e-12);
}

#[test]
fn drag_offset_is_cursor_minus_corner() {
    let mut d = DragState::default();
    d.begin(Point::new(800.0, 350.0), Point::new(760.0, 340.0));
    assert_eq!(d.offset, Some(Vec2::new(40.0, 10.0)));
    d.end();
    assert!(!d.is_active());
}
