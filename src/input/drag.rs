//! Pointer drag handling, per mode.

use crate::constants::{LINE_REPAINT_MARGIN, REPAINT_MARGIN};
use crate::editor::{Editor, Host};
use crate::geometry::{Point, Rect};
use crate::input::state::{Mode, SelectState};

pub(crate) fn handle<H: Host>(editor: &mut Editor<H>, point: Point) {
    let mode = editor.mode.clone();
    match mode {
        Mode::Select(SelectState::Pressed { id, press, last }) => {
            let movable = editor
                .scene
                .get(id)
                .is_some_and(|element| element.is_movable());
            if movable {
                if let Some(bounds) = editor.scene.repaint_bounds_with_lines(id) {
                    editor.damage.add_rect(bounds);
                }
                editor
                    .scene
                    .translate(id, point.x - last.x, point.y - last.y);
                if let Some(bounds) = editor.scene.repaint_bounds_with_lines(id) {
                    editor.damage.add_rect(bounds);
                }
                editor.flush_damage(LINE_REPAINT_MARGIN);
            }
            editor.mode = Mode::Select(SelectState::Pressed {
                id,
                press,
                last: point,
            });
        }
        Mode::Select(SelectState::BoxSelect(mut selection_box)) => {
            // Selection applies on release; dragging just stretches the box.
            editor.damage.add_rect(selection_box.rect());
            selection_box.drag_to(point, editor.scene.canvas());
            editor.damage.add_rect(selection_box.rect());
            editor.mode = Mode::Select(SelectState::BoxSelect(selection_box));
            editor.flush_damage(REPAINT_MARGIN);
        }
        Mode::Select(SelectState::Idle) | Mode::CreateShape(..) => {}
        Mode::CreateConnection(kind, Some(mut gesture)) => {
            editor
                .damage
                .add_rect(Rect::from_diagonal(gesture.press, gesture.current));
            gesture.current = point;
            editor
                .damage
                .add_rect(Rect::from_diagonal(gesture.press, gesture.current));
            editor.mode = Mode::CreateConnection(kind, Some(gesture));
            editor.flush_damage(REPAINT_MARGIN);
        }
        Mode::CreateConnection(_, None) => {}
    }
}
