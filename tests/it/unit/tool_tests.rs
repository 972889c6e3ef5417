//! Tool switching and shape creation.

use umlboard::Tool;

use crate::helpers::{TestEditorBuilder, click, drag, pt};

#[test]
fn create_class_click_places_a_shape_at_the_click_point() {
    let (mut editor, _) = TestEditorBuilder::new().build();
    editor.set_tool(Tool::CreateClass);

    click(&mut editor, pt(50.0, 50.0));

    let objects = editor.scene().objects();
    assert_eq!(objects.len(), 1);
    let shape = editor.scene().get(objects[0]).unwrap().as_shape().unwrap();
    assert_eq!(shape.origin(), pt(50.0, 50.0));
}

#[test]
fn created_shapes_are_clamped_inside_the_canvas() {
    let (mut editor, _) = TestEditorBuilder::new().build();

    // Class is 100x120 with 6 px of port overhang on each side.
    editor.set_tool(Tool::CreateClass);
    click(&mut editor, pt(795.0, 595.0));
    click(&mut editor, pt(2.0, 3.0));

    let objects: Vec<_> = editor
        .scene()
        .objects()
        .iter()
        .map(|id| editor.scene().get(*id).unwrap().as_shape().unwrap().origin())
        .collect();
    assert_eq!(objects, vec![pt(694.0, 474.0), pt(6.0, 6.0)]);
}

#[test]
fn dragging_in_a_create_mode_places_nothing() {
    let (mut editor, _) = TestEditorBuilder::new().build();
    editor.set_tool(Tool::CreateUseCase);

    drag(&mut editor, pt(100.0, 100.0), pt(160.0, 140.0));

    assert!(editor.scene().objects().is_empty());
}

#[test]
fn leaving_the_select_tool_clears_the_selection() {
    let (mut editor, ids) = TestEditorBuilder::new().with_class(50.0, 50.0).build();
    click(&mut editor, pt(60.0, 60.0));
    assert_eq!(editor.scene().selected_objects(), vec![ids[0]]);
    let redraws = editor.host().redraws.len();

    editor.set_tool(Tool::Association);

    assert!(editor.scene().selected_objects().is_empty());
    assert_eq!(editor.host().redraws.len(), redraws + 1);
}

#[test]
fn reselecting_the_active_tool_changes_nothing() {
    let (mut editor, ids) = TestEditorBuilder::new().with_class(50.0, 50.0).build();
    click(&mut editor, pt(60.0, 60.0));
    let redraws = editor.host().redraws.len();

    editor.set_tool(Tool::Select);

    assert_eq!(editor.scene().selected_objects(), vec![ids[0]]);
    assert_eq!(editor.host().redraws.len(), redraws);
}
