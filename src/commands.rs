//! Edit commands: group, ungroup, rename, delete.
//!
//! Commands are silent no-ops when their preconditions do not hold, so the
//! embedding UI can wire them to menu items and shortcuts without guarding
//! each call.

use std::collections::HashSet;

use tracing::debug;

use crate::constants::{LINE_REPAINT_MARGIN, REPAINT_MARGIN};
use crate::editor::{Editor, Host};
use crate::element::Element;
use crate::scene::Scene;

fn collect_subtree(scene: &Scene, id: u64, out: &mut Vec<u64>) {
    out.push(id);
    if let Some(composite) = scene.get(id).and_then(Element::as_composite) {
        for member in composite.members().to_vec() {
            collect_subtree(scene, member, out);
        }
    }
}

impl<H: Host> Editor<H> {
    /// Groups the selected objects into a composite.
    ///
    /// Requires the select tool and at least two selected objects. Selected
    /// lines are captured into the group only if both their endpoint shapes
    /// are selected; others are quietly deselected and stay top-level. The
    /// new composite replaces the consumed elements, starts selected, and
    /// sits on top of the paint order.
    pub fn group(&mut self) {
        if !self.mode.is_select() {
            return;
        }
        let objects = self.scene.selected_objects();
        if objects.len() < 2 {
            return;
        }

        for line_id in self.scene.selected_lines() {
            let (start, end) = match self.scene.get(line_id).and_then(Element::as_line) {
                Some(line) => (line.start(), line.end()),
                None => continue,
            };
            let both_selected = [start.shape, end.shape].iter().all(|shape| {
                self.scene
                    .get(*shape)
                    .is_some_and(|element| element.is_selected())
            });
            if !both_selected {
                if let Some(bounds) = self.scene.selected_bounds_of(line_id) {
                    self.damage.add_rect(bounds);
                }
                self.scene.set_selected(line_id, false);
            }
        }

        let members = self.scene.selected_top_level();
        let composite = self.scene.make_composite(members);
        self.scene.set_selected(composite, true);
        if let Some(bounds) = self.scene.selected_bounds_of(composite) {
            self.damage.add_rect(bounds);
        }
        debug!(composite, "grouped selection");
        self.flush_damage(REPAINT_MARGIN);
    }

    /// Dissolves the selected composite, one level deep. Its direct members
    /// return to the top level, on top of the paint order, and become the
    /// new selection.
    pub fn ungroup(&mut self) {
        if !self.mode.is_select() {
            return;
        }
        let objects = self.scene.selected_objects();
        let &[target] = objects.as_slice() else {
            return;
        };
        if !self.scene.selected_lines().is_empty() {
            return;
        }
        if self.scene.get(target).and_then(Element::as_composite).is_none() {
            return;
        }

        if let Some(bounds) = self.scene.selected_bounds_of(target) {
            self.damage.add_rect(bounds);
        }
        let members = self.scene.dissolve_composite(target);
        debug!(composite = target, members = members.len(), "ungrouped");
        self.flush_damage(REPAINT_MARGIN);
    }

    /// Prompts the host for a new name for the single selected object.
    ///
    /// The prompt is seeded with the current name; an empty or unchanged
    /// answer, or a cancelled prompt, changes nothing.
    pub fn rename_selected(&mut self) {
        if !self.mode.is_select() {
            return;
        }
        let objects = self.scene.selected_objects();
        let &[target] = objects.as_slice() else {
            return;
        };
        if !self.scene.selected_lines().is_empty() {
            return;
        }

        let current = self
            .scene
            .get(target)
            .and_then(Element::name)
            .unwrap_or("")
            .to_string();
        let Some(name) = self.host.prompt_for_text("Rename", &current) else {
            return;
        };
        if name.is_empty() || name == current {
            return;
        }

        debug!(id = target, name = %name, "renamed element");
        let repaint = match self.scene.get_mut(target) {
            Some(Element::Shape(shape)) => {
                shape.set_name(name);
                true
            }
            Some(Element::Composite(composite)) => {
                // The outline shows no label, nothing to repaint.
                composite.set_name(name);
                false
            }
            _ => false,
        };
        if repaint {
            if let Some(bounds) = self.scene.selected_bounds_of(target) {
                self.damage.add_rect(bounds);
            }
            self.flush_damage(REPAINT_MARGIN);
        }
    }

    /// Deletes the selection: every selected element, everything inside
    /// selected composites, and every line attached to a deleted shape.
    pub fn delete_selected(&mut self) {
        if !self.mode.is_select() {
            return;
        }
        let selected = self.scene.selected_top_level();
        if selected.is_empty() {
            return;
        }

        let mut doomed_shapes = HashSet::new();
        for id in &selected {
            self.scene.collect_shape_ids(*id, &mut doomed_shapes);
        }
        let mut doomed: Vec<u64> = Vec::new();
        for id in &selected {
            collect_subtree(&self.scene, *id, &mut doomed);
        }
        for line in self.scene.lines_touching(&doomed_shapes) {
            if !doomed.contains(&line) {
                doomed.push(line);
            }
        }

        for id in &doomed {
            if let Some(bounds) = self.scene.selected_bounds_of(*id) {
                self.damage.add_rect(bounds);
            }
        }
        for id in doomed {
            self.scene.remove_element(id);
        }
        debug!(count = selected.len(), "deleted selection");
        self.flush_damage(LINE_REPAINT_MARGIN);
    }
}
