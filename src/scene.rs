//! The scene graph: element store, paint order, and geometry queries.
//!
//! Elements live in a flat store keyed by id. Three ordered id lists define
//! the scene structure:
//!
//! * `paint_order` holds the top-level elements back to front. Later entries
//!   paint over earlier ones and win hit testing.
//! * `objects` holds the top-level movable elements (shapes and composites),
//!   in creation order.
//! * `lines` holds the top-level connection lines. A line whose endpoint
//!   shapes both join a composite is captured as a member and leaves this
//!   list; a line with at least one endpoint outside stays top-level.
//!
//! Composite members are removed from the top-level lists but stay in the
//! store; the composite paints and moves them. Selection state lives as a
//! flag on each element and cascades through composites; the "selected
//! objects" and "selected lines" views are always recomputed by filtering,
//! never cached.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

use crate::constants::LINE_ENVELOPE_MARGIN;
use crate::element::{Element, Endpoint, Line, LineKind, Shape, ShapeKind};
use crate::geometry::{Point, Rect, Size};
use crate::render::DrawList;
use crate::spatial::SpatialIndex;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown element {0}")]
    UnknownElement(u64),
    #[error("element {0} does not accept connections")]
    NotConnectable(u64),
    #[error("this line kind does not permit connecting these endpoints")]
    InvalidConnection,
}

pub struct Scene {
    elements: HashMap<u64, Element>,
    paint_order: Vec<u64>,
    objects: Vec<u64>,
    lines: Vec<u64>,
    next_id: u64,
    canvas: Size,
    spatial: SpatialIndex,
}

impl Scene {
    pub fn new(canvas: Size) -> Self {
        Self {
            elements: HashMap::new(),
            paint_order: Vec::new(),
            objects: Vec::new(),
            lines: Vec::new(),
            next_id: 1,
            canvas,
            spatial: SpatialIndex::new(),
        }
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ========================================================================
    // Store access
    // ========================================================================

    pub fn get(&self, id: u64) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn paint_order(&self) -> &[u64] {
        &self.paint_order
    }

    pub fn objects(&self) -> &[u64] {
        &self.objects
    }

    pub fn lines(&self) -> &[u64] {
        &self.lines
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Adds a new shape on top of the paint order and returns its id.
    pub fn add_shape(&mut self, kind: ShapeKind, origin: Point) -> u64 {
        let id = self.allocate_id();
        let shape = Shape::new(id, kind, origin);
        self.spatial.update(id, shape.selected_bounds());
        self.elements.insert(id, Element::Shape(shape));
        self.paint_order.push(id);
        self.objects.push(id);
        debug!(id, ?kind, x = origin.x, y = origin.y, "added shape");
        id
    }

    /// Adds a new connection line on top of the paint order.
    ///
    /// Both endpoints must name existing connectable shapes, and the pair
    /// must be legal for the line kind.
    pub fn add_line(
        &mut self,
        kind: LineKind,
        start: Endpoint,
        end: Endpoint,
    ) -> Result<u64, SceneError> {
        for endpoint in [start, end] {
            let element = self
                .elements
                .get(&endpoint.shape)
                .ok_or(SceneError::UnknownElement(endpoint.shape))?;
            if !element.is_connectable() {
                return Err(SceneError::NotConnectable(endpoint.shape));
            }
        }
        if !kind.permits(start, end) {
            return Err(SceneError::InvalidConnection);
        }

        let id = self.allocate_id();
        self.elements
            .insert(id, Element::Line(Line::new(id, kind, start, end)));
        self.paint_order.push(id);
        self.lines.push(id);
        self.reindex_line(id);
        debug!(id, ?kind, "added line");
        Ok(id)
    }

    /// Collapses the given top-level elements into a new composite, inserted
    /// on top of the paint order. Members keep their relative paint order
    /// inside the group; the captured shape and line subsets and the member
    /// bounding box are snapshotted here, once.
    pub fn make_composite(&mut self, members: Vec<u64>) -> u64 {
        let member_set: HashSet<u64> = members.iter().copied().collect();
        // Preserve back-to-front order among the members.
        let ordered: Vec<u64> = self
            .paint_order
            .iter()
            .copied()
            .filter(|id| member_set.contains(id))
            .collect();
        let shapes: Vec<u64> = ordered
            .iter()
            .copied()
            .filter(|id| self.elements[id].is_movable())
            .collect();
        let captured_lines: Vec<u64> = ordered
            .iter()
            .copied()
            .filter(|id| self.elements[id].as_line().is_some())
            .collect();
        let bounds = shapes
            .iter()
            .filter_map(|id| self.unselected_bounds_of(*id))
            .reduce(|a, b| a.union(&b))
            .unwrap_or_default();

        self.paint_order.retain(|id| !member_set.contains(id));
        self.objects.retain(|id| !member_set.contains(id));
        self.lines.retain(|id| !member_set.contains(id));
        for id in &ordered {
            self.spatial.remove(*id);
        }

        let id = self.allocate_id();
        let composite =
            crate::element::Composite::new(id, ordered, shapes, captured_lines, bounds);
        self.spatial.update(id, composite.selected_bounds());
        self.elements.insert(id, Element::Composite(composite));
        self.paint_order.push(id);
        self.objects.push(id);
        debug!(id, members = members.len(), "created composite");
        id
    }

    /// Dissolves a composite one level deep: the composite disappears and
    /// its direct members return to the top level, on top of the paint
    /// order and in their captured relative order. Returns the member ids.
    pub fn dissolve_composite(&mut self, id: u64) -> Vec<u64> {
        let members = match self.elements.get_mut(&id).and_then(Element::as_composite_mut) {
            Some(composite) => composite.take_members(),
            None => return Vec::new(),
        };
        self.elements.remove(&id);
        self.paint_order.retain(|&other| other != id);
        self.objects.retain(|&other| other != id);
        self.spatial.remove(id);

        for member in &members {
            self.paint_order.push(*member);
            match self.elements.get(member) {
                Some(Element::Line(_)) => self.lines.push(*member),
                Some(_) => self.objects.push(*member),
                None => continue,
            }
            if let Some(bounds) = self.selected_bounds_of(*member) {
                self.spatial.update(*member, bounds);
            }
        }
        debug!(id, members = members.len(), "dissolved composite");
        members
    }

    /// Removes a single element from the store, the ordered lists, and the
    /// spatial index. Composite members are not touched; callers that want
    /// transitive removal collect ids first.
    pub fn remove_element(&mut self, id: u64) {
        self.elements.remove(&id);
        self.paint_order.retain(|&other| other != id);
        self.objects.retain(|&other| other != id);
        self.lines.retain(|&other| other != id);
        self.spatial.remove(id);
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Current center of a shape's port, derived from the shape origin.
    pub fn port_center(&self, endpoint: Endpoint) -> Result<Point, SceneError> {
        let element = self
            .elements
            .get(&endpoint.shape)
            .ok_or(SceneError::UnknownElement(endpoint.shape))?;
        let shape = element
            .as_shape()
            .ok_or(SceneError::NotConnectable(endpoint.shape))?;
        Ok(shape.port_center(endpoint.port))
    }

    /// Bounds used for clamping, damage, and spatial envelopes. Shapes use
    /// their port-inclusive bounds, composites the union of member bounds
    /// plus the outline margin, lines the box spanned by their endpoints
    /// inflated to cover stroke and terminator.
    pub fn selected_bounds_of(&self, id: u64) -> Option<Rect> {
        match self.elements.get(&id)? {
            Element::Shape(shape) => Some(shape.selected_bounds()),
            Element::Composite(composite) => Some(composite.selected_bounds()),
            Element::Line(line) => {
                let start = self.port_center(line.start()).ok()?;
                let end = self.port_center(line.end()).ok()?;
                Some(
                    Rect::from_diagonal(start, end)
                        .expand(2.0 * LINE_ENVELOPE_MARGIN),
                )
            }
        }
    }

    /// The unselected footprint: a shape's frame, or the box captured when
    /// a composite was created. Lines have no footprint of their own.
    pub fn unselected_bounds_of(&self, id: u64) -> Option<Rect> {
        match self.elements.get(&id)? {
            Element::Shape(shape) => Some(shape.unselected_bounds()),
            Element::Composite(composite) => Some(composite.bounds()),
            Element::Line(_) => None,
        }
    }

    /// Every shape id reachable from an element, through nested composites.
    pub fn collect_shape_ids(&self, id: u64, out: &mut HashSet<u64>) {
        match self.elements.get(&id) {
            Some(Element::Shape(shape)) => {
                out.insert(shape.id());
            }
            Some(Element::Composite(composite)) => {
                for member in composite.members() {
                    self.collect_shape_ids(*member, out);
                }
            }
            _ => {}
        }
    }

    /// Ids of lines with at least one endpoint in the given shape set.
    pub fn lines_touching(&self, shapes: &HashSet<u64>) -> Vec<u64> {
        self.lines
            .iter()
            .copied()
            .filter(|id| {
                self.elements
                    .get(id)
                    .and_then(Element::as_line)
                    .is_some_and(|line| {
                        shapes.contains(&line.start().shape) || shapes.contains(&line.end().shape)
                    })
            })
            .collect()
    }

    fn reindex_line(&mut self, id: u64) {
        if let Some(bounds) = self.selected_bounds_of(id) {
            self.spatial.update(id, bounds);
        }
    }

    // ========================================================================
    // Movement
    // ========================================================================

    /// Translates a movable element by at most `(dx, dy)`, clamped so its
    /// bounds stay on the canvas. Composites move all members by the same
    /// clamped offset, so the group never shears. Returns the offset that
    /// was actually applied.
    pub fn translate(&mut self, id: u64, dx: f32, dy: f32) -> (f32, f32) {
        let Some(bounds) = self.selected_bounds_of(id) else {
            return (0.0, 0.0);
        };
        let applied_dx = dx.max(-bounds.x).min(self.canvas.width - bounds.right());
        let applied_dy = dy.max(-bounds.y).min(self.canvas.height - bounds.bottom());
        if applied_dx == 0.0 && applied_dy == 0.0 {
            return (0.0, 0.0);
        }

        self.apply_offset(id, applied_dx, applied_dy);

        // Lines follow their endpoints; refresh their envelopes.
        let mut moved_shapes = HashSet::new();
        self.collect_shape_ids(id, &mut moved_shapes);
        for line in self.lines_touching(&moved_shapes) {
            self.reindex_line(line);
        }
        (applied_dx, applied_dy)
    }

    fn apply_offset(&mut self, id: u64, dx: f32, dy: f32) {
        let members = match self.elements.get_mut(&id) {
            Some(Element::Shape(shape)) => {
                shape.apply_offset(dx, dy);
                None
            }
            Some(Element::Composite(composite)) => {
                composite.apply_offset(dx, dy);
                Some(composite.members().to_vec())
            }
            _ => return,
        };
        if let Some(members) = members {
            for member in members {
                self.apply_offset(member, dx, dy);
            }
        }
        if let Some(bounds) = self.selected_bounds_of(id) {
            self.spatial.update(id, bounds);
        }
    }

    /// Repaint region for an element together with the lines attached to
    /// any shape inside it.
    pub fn repaint_bounds_with_lines(&self, id: u64) -> Option<Rect> {
        let mut region = self.selected_bounds_of(id);
        let mut shapes = HashSet::new();
        self.collect_shape_ids(id, &mut shapes);
        for line in self.lines_touching(&shapes) {
            if let Some(bounds) = self.selected_bounds_of(line) {
                region = Some(match region {
                    Some(current) => current.union(&bounds),
                    None => bounds,
                });
            }
        }
        region
    }

    // ========================================================================
    // Paint order and hit testing
    // ========================================================================

    /// Moves a top-level element to the end of the paint order, on top of
    /// everything else. Relative order of the rest is preserved.
    pub fn raise_to_top(&mut self, id: u64) {
        if let Some(index) = self.paint_order.iter().position(|&other| other == id) {
            self.paint_order.remove(index);
            self.paint_order.push(id);
        }
    }

    /// Moves a set of top-level elements to the top of the paint order,
    /// keeping their relative order among themselves. Used by box selection,
    /// where the whole selected set rises together.
    pub fn raise_many(&mut self, ids: &[u64]) {
        let set: HashSet<u64> = ids.iter().copied().collect();
        let raised: Vec<u64> = self
            .paint_order
            .iter()
            .copied()
            .filter(|id| set.contains(id))
            .collect();
        self.paint_order.retain(|id| !set.contains(id));
        self.paint_order.extend(raised);
    }

    /// Topmost top-level element whose drawn geometry contains the point.
    /// The spatial index prefilters candidates; the precise per-element hit
    /// test decides, scanning the paint order from the top down.
    pub fn topmost_hit(&self, point: Point) -> Option<u64> {
        let candidates: HashSet<u64> = self.spatial.query_point(point).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }
        self.paint_order
            .iter()
            .rev()
            .copied()
            .find(|id| candidates.contains(id) && self.elements[id].is_hit(point))
    }

    /// Top-level elements lying entirely inside the selection box, using
    /// geometry cached by the last draw.
    pub fn contained_in_box(&self, selection_box: &Rect) -> Vec<u64> {
        let candidates: HashSet<u64> =
            self.spatial.query_rect(*selection_box).into_iter().collect();
        self.paint_order
            .iter()
            .copied()
            .filter(|id| candidates.contains(id) && self.elements[id].is_contained_in(selection_box))
            .collect()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Sets an element's selection flag, cascading through composite
    /// members so a grouped shape is always as selected as its group.
    pub fn set_selected(&mut self, id: u64, selected: bool) {
        let members = match self.elements.get_mut(&id) {
            Some(element) => {
                element.set_selected_flag(selected);
                element
                    .as_composite()
                    .map(|composite| composite.members().to_vec())
            }
            None => return,
        };
        if let Some(members) = members {
            for member in members {
                self.set_selected(member, selected);
            }
        }
    }

    pub fn deselect_all(&mut self) {
        for id in self.paint_order.clone() {
            self.set_selected(id, false);
        }
    }

    /// Selected top-level elements, in paint order.
    pub fn selected_top_level(&self) -> Vec<u64> {
        self.paint_order
            .iter()
            .copied()
            .filter(|id| self.elements[id].is_selected())
            .collect()
    }

    /// Selected top-level movable objects, in creation order.
    pub fn selected_objects(&self) -> Vec<u64> {
        self.objects
            .iter()
            .copied()
            .filter(|id| self.elements[id].is_selected())
            .collect()
    }

    /// Selected connection lines.
    pub fn selected_lines(&self) -> Vec<u64> {
        self.lines
            .iter()
            .copied()
            .filter(|id| self.elements[id].is_selected())
            .collect()
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// Paints every top-level element back to front, caching the geometry
    /// hit testing relies on.
    pub fn draw(&mut self, out: &mut DrawList) {
        for id in self.paint_order.clone() {
            self.draw_element(id, out);
        }
    }

    fn draw_element(&mut self, id: u64, out: &mut DrawList) {
        match self.elements.get(&id) {
            Some(Element::Shape(_)) => {
                if let Some(Element::Shape(shape)) = self.elements.get_mut(&id) {
                    shape.draw(out);
                }
            }
            Some(Element::Line(line)) => {
                let (start, end) = (line.start(), line.end());
                let (Ok(start_point), Ok(end_point)) =
                    (self.port_center(start), self.port_center(end))
                else {
                    return;
                };
                if let Some(Element::Line(line)) = self.elements.get_mut(&id) {
                    line.draw(start_point, end_point, out);
                }
            }
            Some(Element::Composite(composite)) => {
                let members = composite.members().to_vec();
                for member in &members {
                    self.draw_element(*member, out);
                }
                if let Some(Element::Composite(composite)) = self.elements.get_mut(&id) {
                    composite.draw(out);
                }
            }
            None => {}
        }
    }
}
