//! Connection gestures, port resolution, and validity rules.

use umlboard::element::{PortSide, Shape, ShapeKind};
use umlboard::{DrawCommand, Tool};

use crate::helpers::{TestEditorBuilder, drag, pt};

#[test]
fn nearest_port_resolution_is_deterministic() {
    let shape = Shape::new(1, ShapeKind::Class, pt(0.0, 0.0));
    // Ports: top (50,0), bottom (50,120), left (0,60), right (100,60).
    assert_eq!(shape.nearest_port(pt(48.0, 20.0)), PortSide::Top);
    assert_eq!(shape.nearest_port(pt(10.0, 58.0)), PortSide::Left);
    assert_eq!(shape.nearest_port(pt(95.0, 70.0)), PortSide::Right);

    // (25,30) is exactly equidistant from the top and left ports; the scan
    // order breaks the tie the same way every time.
    for _ in 0..3 {
        assert_eq!(shape.nearest_port(pt(25.0, 30.0)), PortSide::Top);
    }
}

#[test]
fn drag_between_shapes_creates_a_line_on_the_nearest_ports() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_use_case(300.0, 50.0)
        .build();
    editor.set_tool(Tool::Association);

    // Press near the class's right port, release near the use case's left.
    drag(&mut editor, pt(140.0, 110.0), pt(310.0, 90.0));

    let lines = editor.scene().lines();
    assert_eq!(lines.len(), 1);
    let line = editor.scene().get(lines[0]).unwrap().as_line().unwrap();
    assert_eq!(line.start().shape, ids[0]);
    assert_eq!(line.start().port, PortSide::Right);
    assert_eq!(line.end().shape, ids[1]);
    assert_eq!(line.end().port, PortSide::Left);
}

#[test]
fn generalization_rejects_any_self_connection() {
    let (mut editor, _) = TestEditorBuilder::new().with_class(50.0, 50.0).build();
    editor.set_tool(Tool::Generalization);

    // Start and end on the same shape, through different ports.
    drag(&mut editor, pt(140.0, 110.0), pt(60.0, 110.0));

    assert!(editor.scene().lines().is_empty());
}

#[test]
fn association_rejects_only_the_same_port() {
    let (mut editor, _) = TestEditorBuilder::new().with_class(50.0, 50.0).build();
    editor.set_tool(Tool::Association);

    // Both endpoints resolve to the right port: rejected.
    drag(&mut editor, pt(140.0, 110.0), pt(145.0, 105.0));
    assert!(editor.scene().lines().is_empty());

    // A self-loop across two different ports is allowed.
    drag(&mut editor, pt(140.0, 110.0), pt(60.0, 110.0));
    assert_eq!(editor.scene().lines().len(), 1);
}

#[test]
fn releasing_over_empty_canvas_creates_nothing_but_still_repaints() {
    let (mut editor, _) = TestEditorBuilder::new().with_class(50.0, 50.0).build();
    editor.set_tool(Tool::Association);
    let redraws = editor.host().redraws.len();

    drag(&mut editor, pt(140.0, 110.0), pt(600.0, 400.0));

    assert!(editor.scene().lines().is_empty());
    // The rubber band still has to be erased.
    assert!(editor.host().redraws.len() > redraws);
}

#[test]
fn rubber_band_guide_is_drawn_during_the_gesture() {
    let (mut editor, _) = TestEditorBuilder::new().with_class(50.0, 50.0).build();
    editor.set_tool(Tool::Association);

    editor.render();
    editor.pointer_pressed(pt(140.0, 110.0));
    editor.pointer_dragged(pt(200.0, 150.0));

    let list = editor.render();
    let guide = list.commands().iter().any(|command| {
        matches!(
            command,
            DrawCommand::Line { from, to, .. }
                if *from == pt(140.0, 110.0) && *to == pt(200.0, 150.0)
        )
    });
    assert!(guide);

    // Releasing over empty canvas abandons the gesture and the guide goes.
    editor.pointer_released(pt(700.0, 500.0));
    let list = editor.render();
    let still_there = list.commands().iter().any(|command| {
        matches!(command, DrawCommand::Line { from, .. } if *from == pt(140.0, 110.0))
    });
    assert!(!still_there);
}
