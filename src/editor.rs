//! The editor context: one scene, one tool, one host.

use tracing::debug;

use crate::constants::LINE_REPAINT_MARGIN;
use crate::damage::DamageTracker;
use crate::geometry::{Point, Rect, Size};
use crate::input::state::{Mode, SelectState, Tool};
use crate::input::{drag, press, release};
use crate::render::{self, DrawList};
use crate::scene::Scene;
use crate::selection;

/// What the embedding application provides to the editor.
///
/// The editor never paints or opens dialogs itself; it asks the host to
/// repaint a region and to prompt the user for text, and the host decides
/// what that means in its UI stack.
pub trait Host {
    /// A region of the canvas is stale and should be repainted, with the
    /// display list from a fresh [`Editor::render`].
    fn request_redraw(&mut self, region: Rect);

    /// Ask the user for a line of text. `None` means cancelled.
    fn prompt_for_text(&mut self, title: &str, initial: &str) -> Option<String>;
}

/// An editing session over one diagram. Owns everything; there is no shared
/// global state, so multiple editors coexist freely.
pub struct Editor<H: Host> {
    pub(crate) scene: Scene,
    pub(crate) damage: DamageTracker,
    pub(crate) mode: Mode,
    tool: Tool,
    pub(crate) host: H,
}

impl<H: Host> Editor<H> {
    pub fn new(canvas: Size, host: H) -> Self {
        Self {
            scene: Scene::new(canvas),
            damage: DamageTracker::new(),
            mode: Tool::Select.mode(),
            tool: Tool::Select,
            host,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Switches the active tool. Any in-flight gesture is cancelled and the
    /// selection is cleared, so every tool starts from a clean slate.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        debug!(?tool, "switching tool");
        selection::deselect_except(&mut self.scene, &mut self.damage, None);
        self.tool = tool;
        self.mode = tool.mode();
        self.flush_damage(LINE_REPAINT_MARGIN);
    }

    pub fn pointer_pressed(&mut self, point: Point) {
        press::handle(self, point);
    }

    pub fn pointer_dragged(&mut self, point: Point) {
        drag::handle(self, point);
    }

    pub fn pointer_released(&mut self, point: Point) {
        release::handle(self, point);
    }

    /// Produces the display list for the whole canvas: every element back to
    /// front, then the interaction overlay for the gesture in flight. Also
    /// refreshes the cached geometry hit testing reads, so a scene must be
    /// rendered once before pointer events can land on anything.
    pub fn render(&mut self) -> DrawList {
        let mut out = DrawList::new();
        self.scene.draw(&mut out);
        match &self.mode {
            Mode::Select(SelectState::BoxSelect(selection_box)) => {
                render::push_selection_box(&mut out, selection_box.rect());
            }
            Mode::CreateConnection(_, Some(gesture)) => {
                render::push_guide_line(&mut out, gesture.press, gesture.current);
            }
            _ => {}
        }
        out
    }

    /// Hands the accumulated damage to the host as one redraw request,
    /// expanded by `margin` to cover strokes drawn outside exact bounds.
    pub(crate) fn flush_damage(&mut self, margin: f32) {
        if let Some(region) = self.damage.take(margin) {
            self.host.request_redraw(region);
        }
    }
}
