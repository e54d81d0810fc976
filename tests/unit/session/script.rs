use super::*;

#[test]
fn parses_flattened_actions() {
    let json = r#"{
        "fps": {"num": 30, "den": 1},
        "duration_s": 2.0,
        "events": [
            {"at": 1.0, "action": "key", "key": "enter"},
            {"at": 0.5, "action": "click", "x": 10, "y": 20},
            {"at": 0.5, "action": "type", "text": "admin"},
            {"at": 0.7, "action": "press"}
        ]
    }"#;
    let script = InputScript::from_reader(json.as_bytes()).unwrap();
    assert_eq!(script.fps, Fps::new(30, 1).unwrap());
    assert_eq!(script.frame_count(), 60);

    let actions: Vec<_> = script.events.iter().map(|e| e.action.clone()).collect();
    assert_eq!(
        actions,
        vec![
            ScriptAction::Click { x: 10.0, y: 20.0 },
            ScriptAction::Type {
                text: "admin".into()
            },
            ScriptAction::Press,
            ScriptAction::Key {
                key: ScriptKey::Enter
            },
        ]
    );
}

#[test]
fn fps_defaults_to_sixty() {
    let script = InputScript::from_reader(r#"{"duration_s": 1.0}"#.as_bytes()).unwrap();
    assert_eq!(script.fps, Fps::default());
    assert!(script.events.is_empty());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = InputScript::from_reader("{".as_bytes()).unwrap_err();
    assert!(matches!(err, PortalError::Serde(_)));

    let err = InputScript::from_reader(
        r#"{"duration_s": 1.0, "events": [{"at": 0, "action": "jump"}]}"#.as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(err, PortalError::Serde(_)));
}

#[test]
fn invalid_values_are_rejected() {
    for json in [
        r#"{"duration_s": 0}"#,
        r#"{"duration_s": -1}"#,
        r#"{"fps": {"num": 0, "den": 1}, "duration_s": 1}"#,
        r#"{"duration_s": 1, "events": [{"at": -0.1, "action": "press"}]}"#,
    ] {
        let err = InputScript::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)), "{json}");
    }
}

#[test]
fn missing_file_is_an_initialization_error() {
    let err = InputScript::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn demo_survives_json() {
    let demo = InputScript::demo();
    demo.validate().unwrap();
    let json = demo.to_json_pretty().unwrap();
    assert!(json.contains("\"action\": \"click\""));
    assert_eq!(InputScript::from_reader(json.as_bytes()).unwrap(), demo);
}

#[test]
fn script_keys_map_to_key_input() {
    assert_eq!(KeyInput::from(ScriptKey::Enter), KeyInput::Enter);
    assert_eq!(KeyInput::from(ScriptKey::Tab), KeyInput::Tab);
    assert_eq!(KeyInput::from(ScriptKey::Backspace), KeyInput::Backspace);
}
