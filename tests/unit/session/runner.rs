use super::*;
use crate::app::window::HostCall;
use crate::foundation::core::Fps;
use crate::render::backend::{BackendKind, RenderSettings, create_backend};
use crate::session::script::{ScriptEvent, ScriptKey};
use crate::session::sink::{InMemorySink, NullSink};

fn session(script: InputScript) -> Session {
    let backend = create_backend(BackendKind::Cpu, &RenderSettings::default()).unwrap();
    Session::new(script, PreparedAssets::empty(), backend).unwrap()
}

fn script(duration_s: f64, events: Vec<ScriptEvent>) -> InputScript {
    InputScript {
        fps: Fps::default(),
        duration_s,
        events,
    }
}

#[test]
fn demo_logs_in_injects_and_exits() {
    let mut s = session(InputScript::demo());
    let mut sink = InMemorySink::new();
    let report = s.run(&mut sink, 60).unwrap();

    assert!(report.exited);
    assert_eq!(report.final_view, Some(ViewKind::Menu));
    assert_eq!(report.max_notification_stage, Some(3));

    let path: Vec<_> = report.transitions.iter().map(|t| (t.from, t.to)).collect();
    assert_eq!(
        path,
        vec![
            (ViewKind::Login, ViewKind::Loading),
            (ViewKind::Loading, ViewKind::Menu),
        ]
    );
    let loading_at = report.transitions[0].at;
    let menu_at = report.transitions[1].at;
    assert!((0.8..0.85).contains(&loading_at), "{loading_at}");
    assert!(menu_at - loading_at >= 2.5);
    assert!(menu_at - loading_at < 2.5 + 2.0 / 60.0);

    assert!(report.frames < InputScript::demo().frame_count());
    assert_eq!(sink.config().map(|c| (c.width, c.height)), Some((400, 400)));
    let (last_idx, last) = sink.frames().last().unwrap();
    assert_eq!(last_idx.0 + 1, report.frames);
    assert!((599..=600).contains(&last.width), "{}", last.width);
    assert_eq!(last.height, 400);
    assert_eq!(sink.frames()[0].1.width, 400);
    assert_eq!(report.rendered as usize, sink.frames().len());
}

#[test]
fn zero_stride_is_rejected() {
    let mut s = session(script(1.0, vec![]));
    let err = s.run(&mut InMemorySink::new(), 0).unwrap_err();
    assert!(matches!(err, PortalError::Validation(_)));
}

#[test]
fn idle_script_runs_to_its_end() {
    let mut s = session(script(0.5, vec![]));
    let mut sink = InMemorySink::new();
    let report = s.run(&mut sink, 10).unwrap();
    assert_eq!(report.frames, 30);
    assert_eq!(report.rendered, 3);
    assert!(!report.exited);
    assert!(report.transitions.is_empty());
    assert!(s.is_finished());
}

#[test]
fn render_at_steps_to_requested_frame() {
    let mut s = session(script(1.0, vec![]));
    let frame = s.render_at(0.5).unwrap();
    assert_eq!((frame.width, frame.height), (400, 400));
    assert_eq!(s.next_frame(), FrameIndex(31));
    assert!(s.render_at(f64::NAN).is_err());
}

#[test]
fn render_before_step_is_an_error() {
    let mut s = session(script(1.0, vec![]));
    assert!(matches!(
        s.render_last().unwrap_err(),
        PortalError::Render(_)
    ));
}

#[test]
fn typed_credentials_reach_the_form() {
    let mut s = session(script(
        0.5,
        vec![
            ScriptEvent::new(0.0, ScriptAction::Click { x: 200.0, y: 190.0 }),
            ScriptEvent::new(
                0.1,
                ScriptAction::Type {
                    text: "adminx".into(),
                },
            ),
            ScriptEvent::new(
                0.2,
                ScriptAction::Key {
                    key: ScriptKey::Backspace,
                },
            ),
        ],
    ));
    s.run(&mut InMemorySink::new(), 100).unwrap();
    assert_eq!(s.app().login_form().username, "admin");
    assert_eq!(s.app().view_kind(), ViewKind::Login);
}

#[test]
fn scripted_drag_moves_window_by_pointer_delta() {
    let mut s = session(script(
        0.5,
        vec![
            ScriptEvent::new(0.0, ScriptAction::Move { x: 100.0, y: 10.0 }),
            ScriptEvent::new(0.1, ScriptAction::Press),
            ScriptEvent::new(0.2, ScriptAction::Move { x: 150.0, y: 40.0 }),
            ScriptEvent::new(0.3, ScriptAction::Release),
        ],
    ));
    let start = s.host().frame();
    s.run(&mut InMemorySink::new(), 100).unwrap();

    let end = s.host().frame();
    assert_eq!((end.x - start.x, end.y - start.y), (50, 30));
    assert!(!s.app().is_dragging());
    assert!(
        s.host()
            .calls()
            .iter()
            .all(|c| matches!(c, HostCall::Reposition { .. }))
    );
}

#[test]
fn render_at_never_steps_past_the_script() {
    let mut s = session(script(1.0, vec![]));
    let err = s.render_at(5.0).unwrap_err();
    assert!(matches!(err, PortalError::Validation(_)));
    assert_eq!(s.next_frame(), FrameIndex(0));

    let frame = s.render_at(1.0).unwrap();
    assert_eq!(frame.width, 400);
    assert!(s.next_frame().0 <= s.script().frame_count());
}

#[test]
fn discarding_sink_skips_rasterization() {
    let mut kept = session(InputScript::demo());
    let full = kept.run(&mut InMemorySink::new(), 1).unwrap();

    let mut s = session(InputScript::demo());
    let report = s.run(&mut NullSink, 1).unwrap();
    assert_eq!(report.rendered, 0);
    assert_eq!(report.frames, full.frames);
    assert_eq!(report.transitions, full.transitions);
    assert_eq!(report.max_notification_stage, full.max_notification_stage);
    assert!(report.exited);
}
