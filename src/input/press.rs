//! Pointer press handling, per mode.

use tracing::debug;

use crate::constants::REPAINT_MARGIN;
use crate::editor::{Editor, Host};
use crate::element::Endpoint;
use crate::geometry::Point;
use crate::input::state::{ConnectionGesture, Mode, SelectState, SelectionBox};
use crate::selection;

pub(crate) fn handle<H: Host>(editor: &mut Editor<H>, point: Point) {
    let mode = editor.mode.clone();
    match mode {
        Mode::Select(_) => {
            let state = match editor.scene.topmost_hit(point) {
                Some(id) => {
                    selection::press_select(&mut editor.scene, &mut editor.damage, id);
                    SelectState::Pressed {
                        id,
                        press: point,
                        last: point,
                    }
                }
                None => {
                    selection::deselect_except(&mut editor.scene, &mut editor.damage, None);
                    SelectState::BoxSelect(SelectionBox::new(point))
                }
            };
            editor.mode = Mode::Select(state);
            editor.flush_damage(REPAINT_MARGIN);
        }
        Mode::CreateShape(kind, _) => {
            // Creation happens on release, and only if the pointer has not
            // traveled in between.
            editor.mode = Mode::CreateShape(kind, Some(point));
        }
        Mode::CreateConnection(kind, _) => {
            let gesture = editor
                .scene
                .topmost_hit(point)
                .filter(|id| {
                    editor
                        .scene
                        .get(*id)
                        .is_some_and(|element| element.is_connectable())
                })
                .and_then(|id| {
                    let shape = editor.scene.get(id)?.as_shape()?;
                    let start = Endpoint {
                        shape: id,
                        port: shape.nearest_port(point),
                    };
                    debug!(shape = id, port = ?start.port, "started connection gesture");
                    Some(ConnectionGesture {
                        start,
                        press: point,
                        current: point,
                    })
                });
            editor.mode = Mode::CreateConnection(kind, gesture);
        }
    }
}
