//! Pointer release handling, per mode.

use tracing::debug;

use crate::constants::{PORT_HALF, REPAINT_MARGIN};
use crate::editor::{Editor, Host};
use crate::element::Endpoint;
use crate::geometry::{Point, Rect};
use crate::input::state::{Mode, SelectState};
use crate::selection;

pub(crate) fn handle<H: Host>(editor: &mut Editor<H>, point: Point) {
    let mode = editor.mode.clone();
    match mode {
        Mode::Select(SelectState::Pressed { id, press, .. }) => {
            // Dragging along a line scrubs past it rather than moving it;
            // ending such a drag drops the line from the selection.
            let movable = editor
                .scene
                .get(id)
                .is_some_and(|element| element.is_movable());
            if !movable && point != press {
                editor.scene.set_selected(id, false);
                if let Some(bounds) = editor.scene.selected_bounds_of(id) {
                    editor.damage.add_rect(bounds);
                }
                editor.flush_damage(REPAINT_MARGIN);
            }
            editor.mode = Mode::Select(SelectState::Idle);
        }
        Mode::Select(SelectState::BoxSelect(selection_box)) => {
            let rect = selection_box.rect();
            editor.damage.add_rect(rect);
            // A box that never left its press point selects nothing.
            if rect.width > 0.0 || rect.height > 0.0 {
                selection::apply_box_selection(&mut editor.scene, &mut editor.damage, &rect);
            }
            editor.mode = Mode::Select(SelectState::Idle);
            editor.flush_damage(REPAINT_MARGIN);
        }
        Mode::Select(SelectState::Idle) => {}
        Mode::CreateShape(kind, Some(press)) => {
            if point == press {
                let canvas = editor.scene.canvas();
                let size = kind.unselected_size();
                // Keep the whole shape, ports included, on the canvas.
                let origin = Point::new(
                    point
                        .x
                        .min(canvas.width - PORT_HALF - size.width)
                        .max(PORT_HALF),
                    point
                        .y
                        .min(canvas.height - PORT_HALF - size.height)
                        .max(PORT_HALF),
                );
                let id = editor.scene.add_shape(kind, origin);
                if let Some(bounds) = editor.scene.selected_bounds_of(id) {
                    editor.damage.add_rect(bounds);
                }
                editor.flush_damage(REPAINT_MARGIN);
            }
            editor.mode = Mode::CreateShape(kind, None);
        }
        Mode::CreateShape(_, None) => {}
        Mode::CreateConnection(kind, Some(gesture)) => {
            // Erase the rubber band whether or not a line materializes.
            editor
                .damage
                .add_rect(Rect::from_diagonal(gesture.press, gesture.current));

            let target = editor.scene.topmost_hit(point).and_then(|id| {
                let shape = editor.scene.get(id)?.as_shape()?;
                Some(Endpoint {
                    shape: id,
                    port: shape.nearest_port(point),
                })
            });
            if let Some(end) = target {
                match editor.scene.add_line(kind, gesture.start, end) {
                    Ok(id) => {
                        if let Some(bounds) = editor.scene.selected_bounds_of(id) {
                            editor.damage.add_rect(bounds);
                        }
                    }
                    Err(error) => debug!(%error, "connection rejected"),
                }
            }
            editor.mode = Mode::CreateConnection(kind, None);
            editor.flush_damage(REPAINT_MARGIN);
        }
        Mode::CreateConnection(_, None) => {}
    }
}
