//! Selection transactions.
//!
//! Every selection change funnels through here so damage reporting stays
//! consistent: whoever changes a flag also records the region that needs
//! repainting (the element plus attached lines, since selection restyles
//! both port markers and line color).

use tracing::debug;

use crate::damage::DamageTracker;
use crate::geometry::Rect;
use crate::scene::Scene;

fn damage_element(scene: &Scene, damage: &mut DamageTracker, id: u64) {
    if let Some(bounds) = scene.repaint_bounds_with_lines(id) {
        damage.add_rect(bounds);
    }
}

/// Deselects every selected top-level element except `keep`.
pub fn deselect_except(scene: &mut Scene, damage: &mut DamageTracker, keep: Option<u64>) {
    for id in scene.selected_top_level() {
        if Some(id) == keep {
            continue;
        }
        damage_element(scene, damage, id);
        scene.set_selected(id, false);
    }
}

/// A press landed on an element: it becomes the only selection and rises to
/// the top of the paint order. Already-selected elements other than it are
/// deselected.
pub fn press_select(scene: &mut Scene, damage: &mut DamageTracker, id: u64) {
    deselect_except(scene, damage, Some(id));
    scene.set_selected(id, true);
    scene.raise_to_top(id);
    damage_element(scene, damage, id);
    debug!(id, "press-selected element");
}

/// Selects every element fully contained in the box and raises the whole
/// set to the top of the paint order, preserving its internal order. The
/// press that started the box gesture already cleared the selection.
pub fn apply_box_selection(scene: &mut Scene, damage: &mut DamageTracker, selection_box: &Rect) {
    let contained = scene.contained_in_box(selection_box);
    for id in &contained {
        scene.set_selected(*id, true);
        damage_element(scene, damage, *id);
    }
    scene.raise_many(&contained);
}
