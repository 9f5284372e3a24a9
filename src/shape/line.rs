use egui::{Pos2, Rect, Vec2, vec2};
use log::warn;
use tiny_skia::{Path, PathBuilder};

use super::common::{Appearance, ShapeId, footprint};
use super::{Shape, ShapeKind};
use crate::error::CanvasResult;
use crate::fill::FillDescriptor;
use crate::geometry::{ControlPoint, GRAB_RADIUS, MIN_EXTENT, distance_to_line_segment, normalized_rect};
use crate::surface::Surface;

/// Straight segment drawn with the edge pen. Lines have no interior, so the
/// fill settings are only carried along for conversions.
#[derive(Debug, Clone)]
pub struct Line {
    pub(crate) id: ShapeId,
    start: Pos2,
    end: Pos2,
    pub(crate) appearance: Appearance,
}

fn segment(start: Pos2, end: Pos2) -> Option<Path> {
    let mut builder = PathBuilder::new();
    builder.move_to(start.x, start.y);
    builder.line_to(end.x, end.y);
    builder.finish()
}

impl Line {
    pub fn new(start: Pos2, end: Pos2, appearance: Appearance) -> Self {
        Self {
            id: ShapeId::new(),
            start,
            end,
            appearance,
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub(crate) fn duplicate(&self) -> Self {
        Self {
            id: ShapeId::new(),
            ..self.clone()
        }
    }

    /// Distance from `pos` to the segment
    pub fn distance_to(&self, pos: Pos2) -> f32 {
        distance_to_line_segment(pos, self.start, self.end)
    }

    /// Whether `pos` lies within `tolerance` of the segment
    pub fn is_near(&self, pos: Pos2, tolerance: f32) -> bool {
        self.distance_to(pos) <= tolerance
    }

    /// Bounding box grown so that neither side is too thin to be an area shape
    pub(crate) fn area_bounds(&self) -> Rect {
        let mut rect = normalized_rect(self.start, self.end);
        if rect.width() <= MIN_EXTENT {
            rect.max.x = rect.min.x + 2.0 * MIN_EXTENT;
        }
        if rect.height() <= MIN_EXTENT {
            rect.max.y = rect.min.y + 2.0 * MIN_EXTENT;
        }
        rect
    }

    fn stroke(&self, surface: &mut Surface, start: Pos2, end: Pos2) {
        match segment(start, end) {
            Some(path) => surface.stroke_path(&path, self.appearance.edge.color, self.appearance.edge.width),
            None => warn!("Skipping line {} with no drawable segment", self.id),
        }
    }
}

impl Shape for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn bounds(&self) -> Rect {
        normalized_rect(self.start, self.end)
    }

    fn size(&self) -> [u32; 2] {
        footprint(self.bounds(), self.appearance.edge.width)
    }

    fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    fn fill_descriptor(&self) -> Option<&FillDescriptor> {
        None
    }

    /// Uses the default [`GRAB_RADIUS`]; [`ShapeType::hit_test`] takes the
    /// collection's configured radius instead.
    ///
    /// [`ShapeType::hit_test`]: super::ShapeType::hit_test
    fn contains(&self, pos: Pos2) -> bool {
        self.is_near(pos, GRAB_RADIUS)
    }

    fn control_points(&self) -> [Pos2; 2] {
        [self.start, self.end]
    }

    fn transform_move(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }

    fn transform_scale(&mut self, delta: Vec2, anchor: ControlPoint) {
        match anchor {
            ControlPoint::Start => self.start += delta,
            ControlPoint::End => self.end += delta,
        }
    }

    fn render(&self, surface: &mut Surface) {
        self.stroke(surface, self.start, self.end);
    }

    fn print(&self, surface: &mut Surface, target: Rect) {
        let bounds = self.bounds();
        let factor = (target.width() / bounds.width().max(1.0)).min(target.height() / bounds.height().max(1.0));
        let place = |p: Pos2| target.min + (p - bounds.min) * factor;
        self.stroke(surface, place(self.start), place(self.end));
    }

    fn rasterize(&self) -> CanvasResult<Surface> {
        // A flat line with no pen still needs one pixel row to draw into
        let [width, height] = self.size().map(|extent| extent.max(1));
        let mut surface = Surface::new(width, height)?;
        let inset = (self.appearance.edge.width / 2.0).trunc();
        let offset = vec2(inset, inset) - self.bounds().min.to_vec2();
        self.stroke(&mut surface, self.start + offset, self.end + offset);
        Ok(surface)
    }
}
