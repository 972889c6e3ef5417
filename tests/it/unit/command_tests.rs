//! Menu commands: rename, delete, and group preconditions.

use umlboard::{LineKind, Tool};

use crate::helpers::{TestEditorBuilder, click, connect, drag, pt};

#[test]
fn rename_sets_the_name_from_the_prompt() {
    let (mut editor, ids) = TestEditorBuilder::new().with_class(50.0, 50.0).build();
    click(&mut editor, pt(60.0, 60.0));
    editor.host_mut().queue_reply(Some("Order"));

    editor.rename_selected();

    let shape = editor.scene().get(ids[0]).unwrap().as_shape().unwrap();
    assert_eq!(shape.name(), Some("Order"));
    assert_eq!(
        editor.host().prompts,
        vec![("Rename".to_string(), String::new())]
    );
}

#[test]
fn cancelled_or_empty_prompts_change_nothing() {
    let (mut editor, ids) = TestEditorBuilder::new().with_class(50.0, 50.0).build();
    click(&mut editor, pt(60.0, 60.0));

    editor.host_mut().queue_reply(None);
    editor.rename_selected();
    editor.host_mut().queue_reply(Some(""));
    editor.rename_selected();

    let shape = editor.scene().get(ids[0]).unwrap().as_shape().unwrap();
    assert_eq!(shape.name(), None);
}

#[test]
fn rename_seeds_the_prompt_with_the_current_name() {
    let (mut editor, _) = TestEditorBuilder::new().with_class(50.0, 50.0).build();
    click(&mut editor, pt(60.0, 60.0));

    editor.host_mut().queue_reply(Some("Customer"));
    editor.rename_selected();
    editor.host_mut().queue_reply(Some("Account"));
    editor.rename_selected();

    assert_eq!(editor.host().prompts[1].1, "Customer");
}

#[test]
fn rename_requires_exactly_one_selected_object() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_class(300.0, 50.0)
        .build();
    drag(&mut editor, pt(0.0, 0.0), pt(500.0, 250.0));
    assert_eq!(editor.scene().selected_objects().len(), 2);

    editor.rename_selected();

    assert!(editor.host().prompts.is_empty());
}

#[test]
fn deleting_a_shape_takes_its_lines_with_it() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_class(300.0, 50.0)
        .with_class(550.0, 50.0)
        .build();
    connect(&mut editor, LineKind::Association, ids[0], ids[1]);
    connect(&mut editor, LineKind::Generalization, ids[1], ids[2]);

    // Select only the middle shape; both lines hang off it.
    click(&mut editor, pt(310.0, 60.0));
    editor.delete_selected();

    assert_eq!(editor.scene().objects(), &[ids[0], ids[2]]);
    assert!(editor.scene().lines().is_empty());
}

#[test]
fn delete_with_no_selection_is_a_no_op() {
    let (mut editor, ids) = TestEditorBuilder::new().with_class(50.0, 50.0).build();
    let redraws = editor.host().redraws.len();

    editor.delete_selected();

    assert_eq!(editor.scene().objects(), &[ids[0]]);
    assert_eq!(editor.host().redraws.len(), redraws);
}

#[test]
fn group_needs_two_selected_objects() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_class(300.0, 50.0)
        .build();
    click(&mut editor, pt(60.0, 60.0));

    editor.group();

    assert_eq!(editor.scene().paint_order(), &[ids[1], ids[0]]);
    assert_eq!(editor.scene().objects().len(), 2);
}

#[test]
fn group_outside_select_mode_leaves_the_scene_alone() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_class(50.0, 50.0)
        .with_class(300.0, 50.0)
        .build();
    editor.set_tool(Tool::CreateClass);
    editor.scene_mut().set_selected(ids[0], true);
    editor.scene_mut().set_selected(ids[1], true);

    editor.group();

    assert_eq!(editor.scene().paint_order(), &[ids[0], ids[1]]);
}
