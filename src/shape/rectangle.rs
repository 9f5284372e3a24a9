use egui::{Pos2, Rect, Vec2};

use super::common::{Appearance, Body, Outline, ShapeId};
use super::{Shape, ShapeKind};
use crate::error::CanvasResult;
use crate::fill::FillDescriptor;
use crate::geometry::ControlPoint;
use crate::surface::Surface;

/// Axis-aligned filled rectangle
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub(crate) body: Body,
}

impl Rectangle {
    pub fn new(rect: Rect, appearance: Appearance) -> Self {
        Self {
            body: Body::new(rect, appearance),
        }
    }

    pub(crate) fn from_body(body: Body) -> Self {
        Self { body }
    }
}

impl Shape for Rectangle {
    fn id(&self) -> ShapeId {
        self.body.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn bounds(&self) -> Rect {
        self.body.rect
    }

    fn size(&self) -> [u32; 2] {
        self.body.size()
    }

    fn appearance(&self) -> &Appearance {
        &self.body.appearance
    }

    fn fill_descriptor(&self) -> Option<&FillDescriptor> {
        Some(&self.body.fill)
    }

    fn contains(&self, pos: Pos2) -> bool {
        self.body.rect.contains(pos)
    }

    fn control_points(&self) -> [Pos2; 2] {
        self.body.control_points()
    }

    fn transform_move(&mut self, delta: Vec2) {
        self.body.translate(delta);
    }

    fn transform_scale(&mut self, delta: Vec2, anchor: ControlPoint) {
        self.body.scale(delta, anchor);
    }

    fn render(&self, surface: &mut Surface) {
        self.body.render(surface, Outline::Rectangle);
    }

    fn print(&self, surface: &mut Surface, target: Rect) {
        self.body.print(surface, target, Outline::Rectangle);
    }

    fn rasterize(&self) -> CanvasResult<Surface> {
        self.body.rasterize(Outline::Rectangle)
    }
}
