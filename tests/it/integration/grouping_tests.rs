//! Grouping and ungrouping across full editing sessions.

use umlboard::element::PortSide;
use umlboard::{LineKind, Tool};

use crate::helpers::{TestEditorBuilder, click, connect, drag, pt};

/// Build two connected shapes entirely through tool gestures, box-select
/// everything, and group: the scene graph collapses from three top-level
/// elements to one composite that captured all of them.
#[test]
fn box_select_and_group_collapses_the_scene() {
    let (mut editor, _) = TestEditorBuilder::new().build();

    editor.set_tool(Tool::CreateClass);
    click(&mut editor, pt(50.0, 50.0));
    editor.set_tool(Tool::CreateUseCase);
    click(&mut editor, pt(300.0, 50.0));

    editor.set_tool(Tool::Association);
    drag(&mut editor, pt(140.0, 110.0), pt(310.0, 90.0));
    let lines = editor.scene().lines().to_vec();
    assert_eq!(lines.len(), 1);
    {
        let line = editor.scene().get(lines[0]).unwrap().as_line().unwrap();
        assert_eq!(line.start().port, PortSide::Right);
        assert_eq!(line.end().port, PortSide::Left);
        assert_ne!(line.start().shape, line.end().shape);
    }

    editor.set_tool(Tool::Select);
    drag(&mut editor, pt(0.0, 0.0), pt(500.0, 200.0));
    assert_eq!(editor.scene().selected_top_level().len(), 3);

    editor.group();

    assert_eq!(editor.scene().paint_order().len(), 1);
    let composite_id = editor.scene().paint_order()[0];
    let composite = editor
        .scene()
        .get(composite_id)
        .unwrap()
        .as_composite()
        .unwrap();
    assert!(composite.is_selected());
    assert_eq!(composite.member_lines(), lines.as_slice());
    assert_eq!(composite.member_shapes().len(), 2);
}

#[test]
fn ungroup_restores_members_and_their_relative_order() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_use_case(300.0, 50.0)
        .build();
    let line = connect(&mut editor, LineKind::Association, ids[0], ids[1]);

    drag(&mut editor, pt(0.0, 0.0), pt(500.0, 200.0));
    editor.group();
    assert_eq!(editor.scene().paint_order().len(), 1);

    editor.ungroup();

    assert_eq!(editor.scene().paint_order(), &[ids[0], ids[1], line]);
    assert_eq!(editor.scene().objects(), &[ids[0], ids[1]]);
    assert_eq!(editor.scene().lines(), &[line]);
    // The reinserted members are the new selection.
    assert_eq!(editor.scene().selected_top_level().len(), 3);
}

#[test]
fn lines_with_an_unselected_endpoint_stay_top_level() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_use_case(300.0, 50.0)
        .with_class(550.0, 300.0)
        .build();
    let captured = connect(&mut editor, LineKind::Association, ids[0], ids[1]);
    let dangling = connect(&mut editor, LineKind::Composition, ids[1], ids[2]);

    // Box over the first two shapes and the line between them; the second
    // line's far endpoint sits outside, so it never becomes selected.
    drag(&mut editor, pt(0.0, 0.0), pt(440.0, 200.0));
    let selected = editor.scene().selected_top_level();
    assert!(selected.contains(&captured));
    assert!(!selected.contains(&dangling));

    editor.group();

    let composite_id = *editor.scene().objects().last().unwrap();
    let composite = editor
        .scene()
        .get(composite_id)
        .unwrap()
        .as_composite()
        .unwrap();
    assert_eq!(composite.member_lines(), &[captured]);
    assert_eq!(editor.scene().lines(), &[dangling]);
    assert_eq!(editor.scene().paint_order().last(), Some(&composite_id));
}

#[test]
fn moving_a_group_moves_members_and_attached_lines() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_use_case(300.0, 50.0)
        .with_class(550.0, 300.0)
        .build();
    connect(&mut editor, LineKind::Association, ids[1], ids[2]);

    drag(&mut editor, pt(0.0, 0.0), pt(440.0, 200.0));
    editor.group();
    let composite_id = *editor.scene().objects().last().unwrap();

    // Grab the group in the gap between its members and drag it down.
    drag(&mut editor, pt(230.0, 100.0), pt(250.0, 150.0));

    let a = editor.scene().get(ids[0]).unwrap().as_shape().unwrap().origin();
    let b = editor.scene().get(ids[1]).unwrap().as_shape().unwrap().origin();
    let c = editor.scene().get(ids[2]).unwrap().as_shape().unwrap().origin();
    assert_eq!(a, pt(70.0, 100.0));
    assert_eq!(b, pt(320.0, 100.0));
    // The outside shape does not move.
    assert_eq!(c, pt(550.0, 300.0));

    // The dangling line follows the moved endpoint's port.
    let start = editor
        .scene()
        .port_center(umlboard::Endpoint {
            shape: ids[1],
            port: PortSide::Right,
        })
        .unwrap();
    assert_eq!(start, pt(440.0, 140.0));
    let _ = composite_id;
}

#[test]
fn ungroup_peels_exactly_one_level() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_class(300.0, 50.0)
        .with_class(50.0, 300.0)
        .build();

    drag(&mut editor, pt(0.0, 0.0), pt(440.0, 200.0));
    editor.group();
    let inner = *editor.scene().objects().last().unwrap();

    drag(&mut editor, pt(0.0, 0.0), pt(500.0, 500.0));
    assert_eq!(editor.scene().selected_objects().len(), 2);
    editor.group();
    let outer = *editor.scene().objects().last().unwrap();
    assert_eq!(editor.scene().paint_order(), &[outer]);

    editor.ungroup();

    // One level only: the inner composite survives intact.
    assert_eq!(editor.scene().paint_order(), &[ids[2], inner]);
    assert!(
        editor
            .scene()
            .get(inner)
            .unwrap()
            .as_composite()
            .is_some()
    );
    assert_eq!(editor.scene().selected_objects().len(), 2);
}
