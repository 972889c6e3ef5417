//! Hit testing through the public pointer interface.

use umlboard::LineKind;
use umlboard::editor::Editor;
use umlboard::geometry::Size;

use crate::helpers::{TestEditorBuilder, TestHost, click, connect, pt};

#[test]
fn press_selects_the_topmost_overlapping_shape() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_class(100.0, 100.0)
        .build();
    let (below, above) = (ids[0], ids[1]);

    click(&mut editor, pt(120.0, 120.0));

    assert_eq!(editor.scene().selected_objects(), vec![above]);
    assert!(!editor.scene().get(below).unwrap().is_selected());
}

#[test]
fn press_raises_the_selected_element() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_class(300.0, 50.0)
        .build();

    click(&mut editor, pt(60.0, 60.0));

    assert_eq!(editor.scene().paint_order().last(), Some(&ids[0]));
    assert_eq!(editor.scene().selected_objects(), vec![ids[0]]);
}

#[test]
fn press_within_line_tolerance_selects_the_line() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_class(300.0, 50.0)
        .build();
    // Horizontal shaft from (150,110) to (300,110).
    let line = connect(&mut editor, LineKind::Association, ids[0], ids[1]);

    click(&mut editor, pt(225.0, 110.0));
    assert_eq!(editor.scene().selected_lines(), vec![line]);

    // 11 px perpendicular exceeds tolerance plus half the stroke width, so
    // this press lands on empty canvas and clears the selection.
    click(&mut editor, pt(225.0, 121.0));
    assert!(editor.scene().selected_lines().is_empty());
}

#[test]
fn presses_land_nowhere_before_the_first_render() {
    let mut editor = Editor::new(Size::new(800.0, 600.0), TestHost::new());
    let id = editor
        .scene_mut()
        .add_shape(umlboard::ShapeKind::Class, pt(50.0, 50.0));

    editor.pointer_pressed(pt(100.0, 100.0));
    editor.pointer_released(pt(100.0, 100.0));

    assert!(!editor.scene().get(id).unwrap().is_selected());
}

#[test]
fn press_on_empty_canvas_clears_the_selection() {
    let (mut editor, ids) = TestEditorBuilder::new().with_class(50.0, 50.0).build();
    click(&mut editor, pt(60.0, 60.0));
    assert_eq!(editor.scene().selected_objects(), vec![ids[0]]);

    click(&mut editor, pt(700.0, 500.0));
    assert!(editor.scene().selected_objects().is_empty());
}
