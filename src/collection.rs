use egui::Pos2;
use log::{debug, warn};

use crate::geometry::{ControlPoint, GRAB_RADIUS, find_control_point};
use crate::shape::{Shape, ShapeId, ShapeType};

/// Ordered set of shapes on the canvas.
///
/// Index 0 is the bottom of the z-order and is drawn first. At most one shape
/// is focused; focus is a position into the list and is dropped whenever the
/// shape it points at goes away.
#[derive(Debug, Clone)]
pub struct ShapeCollection {
    shapes: Vec<ShapeType>,
    focused: Option<usize>,
    grab_radius: f32,
}

impl Default for ShapeCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self::with_grab_radius(GRAB_RADIUS)
    }

    /// Collection whose line and control point hit tests use `grab_radius`
    pub fn with_grab_radius(grab_radius: f32) -> Self {
        Self {
            shapes: Vec::new(),
            focused: None,
            grab_radius,
        }
    }

    pub fn grab_radius(&self) -> f32 {
        self.grab_radius
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShapeType> {
        self.shapes.get(index)
    }

    pub fn position(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|shape| shape.id() == id)
    }

    /// Shapes from bottom to top
    pub fn iter(&self) -> std::slice::Iter<'_, ShapeType> {
        self.shapes.iter()
    }

    /// Place a shape on top of the z-order. Focus is left unchanged.
    pub fn add(&mut self, shape: ShapeType) -> ShapeId {
        let id = shape.id();
        debug!("Adding {} {} at z {}", shape.kind().name(), id, self.shapes.len());
        self.shapes.push(shape);
        id
    }

    pub fn is_focused(&self) -> bool {
        self.focused.is_some()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused(&self) -> Option<&ShapeType> {
        self.focused.and_then(|index| self.shapes.get(index))
    }

    /// Mutable access for transforms and property edits on the focused shape
    pub fn focused_mut(&mut self) -> Option<&mut ShapeType> {
        self.focused.and_then(|index| self.shapes.get_mut(index))
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Delete the focused shape and return it
    pub fn remove(&mut self) -> Option<ShapeType> {
        let Some(index) = self.focused.take() else {
            warn!("Remove requested with no focused shape");
            return None;
        };
        let removed = self.shapes.remove(index);
        debug!("Removed {} from z {}", removed.id(), index);
        Some(removed)
    }

    /// Put an independent copy of the focused shape on top.
    /// Focus stays on the original.
    pub fn duplicate(&mut self) -> Option<ShapeId> {
        let copy = self.focused()?.deep_copy();
        Some(self.add(copy))
    }

    pub fn move_up(&mut self) {
        if let Some(index) = self.focused {
            if index + 1 < self.shapes.len() {
                self.shapes.swap(index, index + 1);
                self.focused = Some(index + 1);
            }
        }
    }

    pub fn move_down(&mut self) {
        if let Some(index) = self.focused {
            if index > 0 {
                self.shapes.swap(index, index - 1);
                self.focused = Some(index - 1);
            }
        }
    }

    pub fn move_top(&mut self) {
        if let Some(index) = self.focused {
            let shape = self.shapes.remove(index);
            self.shapes.push(shape);
            self.focused = Some(self.shapes.len() - 1);
        }
    }

    pub fn move_bot(&mut self) {
        if let Some(index) = self.focused {
            let shape = self.shapes.remove(index);
            self.shapes.insert(0, shape);
            self.focused = Some(0);
        }
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} shapes", self.shapes.len());
        self.shapes.clear();
        self.focused = None;
    }

    /// Focus the topmost shape under `pos`, or nothing if no shape is hit
    pub fn set_focus_at(&mut self, pos: Pos2) -> Option<ShapeId> {
        self.focused = self
            .shapes
            .iter()
            .rposition(|shape| shape.hit_test(pos, self.grab_radius));
        let id = self.focused().map(|shape| shape.id());
        debug!("Focus at {:?}: {:?}", pos, id);
        id
    }

    /// Which control point of the focused shape, if any, lies under `pos`
    pub fn focus_control_point_at(&self, pos: Pos2) -> Option<ControlPoint> {
        let points = self.focused()?.control_points();
        find_control_point(pos, &points, self.grab_radius).and_then(ControlPoint::from_index)
    }

    /// Whether a drag starting at `pos` should resize rather than move
    pub fn is_focus_control_point(&self, pos: Pos2) -> bool {
        self.focus_control_point_at(pos).is_some()
    }

    /// Swap the focused shape for a rectangle in the same z slot
    pub fn transform_to_rectangle(&mut self) {
        self.replace_focused(ShapeType::to_rectangle);
    }

    /// Swap the focused shape for an ellipse in the same z slot
    pub fn transform_to_ellipse(&mut self) {
        self.replace_focused(ShapeType::to_ellipse);
    }

    fn replace_focused(&mut self, convert: impl FnOnce(&ShapeType) -> ShapeType) {
        if let Some(index) = self.focused {
            let converted = convert(&self.shapes[index]);
            debug!("Converted {} into {} {}", self.shapes[index].id(), converted.kind().name(), converted.id());
            self.shapes[index] = converted;
        }
    }
}

impl<'a> IntoIterator for &'a ShapeCollection {
    type Item = &'a ShapeType;
    type IntoIter = std::slice::Iter<'a, ShapeType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
