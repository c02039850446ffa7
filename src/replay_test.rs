use std::io::Cursor;

use super::*;
use crate::geometry::Rect;

fn parse(text: &str) -> Vec<ReplayEvent> {
    parse_events(Cursor::new(text)).unwrap()
}

// =============================================================
// parse_events
// =============================================================

#[test]
fn parses_each_event_type() {
    let events = parse(
        r#"{"type":"add_shape","kind":"circle"}
{"type":"add_regular_polygon","n":6}
{"type":"pointer_down","x":1,"y":2,"button":"secondary","modifiers":{"alt":true}}
{"type":"pointer_move","x":3,"y":4}
{"type":"pointer_up"}
{"type":"wheel","x":5,"y":6,"dy":-1}
{"type":"key","key":"Delete"}
"#,
    );
    assert_eq!(events.len(), 7);
    assert_eq!(events[0], ReplayEvent::AddShape { kind: ShapeKind::Circle });
    assert_eq!(events[1], ReplayEvent::AddRegularPolygon { n: 6 });
    assert_eq!(
        events[2],
        ReplayEvent::PointerDown {
            x: 1.0,
            y: 2.0,
            button: Button::Secondary,
            modifiers: Modifiers { alt: true, ..Default::default() },
        }
    );
    assert_eq!(events[4], ReplayEvent::PointerUp);
    assert_eq!(events[5], ReplayEvent::Wheel { x: 5.0, y: 6.0, dx: 0.0, dy: -1.0 });
    assert_eq!(events[6], ReplayEvent::Key { key: "Delete".into(), modifiers: Modifiers::default() });
}

#[test]
fn pointer_down_defaults_to_primary_without_modifiers() {
    let events = parse(r#"{"type":"pointer_down","x":0,"y":0}"#);
    assert_eq!(
        events[0],
        ReplayEvent::PointerDown { x: 0.0, y: 0.0, button: Button::Primary, modifiers: Modifiers::default() }
    );
}

#[test]
fn skips_blank_lines_and_comments() {
    let events = parse("\n# setup\n   \n{\"type\":\"pointer_up\"}\n");
    assert_eq!(events, vec![ReplayEvent::PointerUp]);
}

#[test]
fn malformed_line_reports_line_number() {
    let err = parse_events(Cursor::new("{\"type\":\"pointer_up\"}\n\n{\"type\":\"teleport\"}\n")).unwrap_err();
    match err {
        ReplayError::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
}

// =============================================================
// run
// =============================================================

#[test]
fn replay_resize_scenario() {
    let events = parse(
        r#"{"type":"add_shape","kind":"rectangle"}
{"type":"pointer_down","x":150,"y":140}
{"type":"pointer_up"}
{"type":"pointer_down","x":220,"y":180}
{"type":"pointer_move","x":270,"y":210}
{"type":"pointer_up"}
"#,
    );
    let mut core = EngineCore::new();
    let actions = run(&mut core, &events);
    let id = core.selection().unwrap();
    assert_eq!(core.shape(id).unwrap().bounds(), Rect::new(100.0, 100.0, 170.0, 110.0));
    assert!(actions.iter().any(|a| matches!(a, Action::ShapeUpdated { .. })));
}

#[test]
fn replay_is_deterministic() {
    let events = parse(
        r#"{"type":"add_shape","kind":"circle"}
{"type":"add_regular_polygon","n":5}
{"type":"wheel","x":300,"y":120,"dy":-1}
{"type":"pointer_down","x":330,"y":160}
{"type":"pointer_move","x":360,"y":190}
{"type":"pointer_up"}
{"type":"pointer_down","x":400,"y":400,"button":"secondary"}
{"type":"pointer_move","x":380,"y":420}
{"type":"pointer_up"}
"#,
    );
    let mut first = EngineCore::new();
    let mut second = EngineCore::new();
    run(&mut first, &events);
    run(&mut second, &events);

    let a: Vec<Rect> = first.scene.shapes().map(crate::shape::Shape::bounds).collect();
    let b: Vec<Rect> = second.scene.shapes().map(crate::shape::Shape::bounds).collect();
    assert_eq!(a, b);
    assert_eq!(first.camera(), second.camera());
}

#[test]
fn zoom_event_steps_about_view_center() {
    let events = parse(r#"{"type":"zoom","zoom_in":true,"width":800,"height":600}"#);
    assert_eq!(events[0], ReplayEvent::Zoom { zoom_in: true, width: 800.0, height: 600.0 });
    let mut core = EngineCore::new();
    let center = crate::geometry::Point::new(400.0, 300.0);
    let before = core.camera().screen_to_world(center);
    let actions = run(&mut core, &events);
    assert!(actions.iter().any(|a| matches!(a, Action::ViewChanged { .. })));
    let after = core.camera().screen_to_world(center);
    assert!((before.x - after.x).abs() < 1e-9);
    assert!((core.camera().zoom - 1.1).abs() < 1e-12);
}

#[test]
fn summary_reflects_core() {
    let mut core = EngineCore::new();
    core.add_shape(ShapeKind::Ellipse);
    core.add_regular_polygon(2);
    let summary = Summary::of(&core);
    assert_eq!(summary.shapes, 1);
    assert!(summary.selected.is_none());
    assert!((summary.zoom - 1.0).abs() < f64::EPSILON);
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"shapes\":1"));
}
