use egui::{Pos2, Rect, Vec2};

use super::common::{Appearance, Body, Outline, ShapeId};
use super::{Shape, ShapeKind};
use crate::error::CanvasResult;
use crate::fill::FillDescriptor;
use crate::geometry::ControlPoint;
use crate::surface::Surface;

/// Ellipse inscribed in its bounding rectangle
#[derive(Debug, Clone)]
pub struct Ellipse {
    pub(crate) body: Body,
}

impl Ellipse {
    pub fn new(rect: Rect, appearance: Appearance) -> Self {
        Self {
            body: Body::new(rect, appearance),
        }
    }

    pub(crate) fn from_body(body: Body) -> Self {
        Self { body }
    }
}

impl Shape for Ellipse {
    fn id(&self) -> ShapeId {
        self.body.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
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
        let rect = self.body.rect;
        let radii = rect.size() / 2.0;
        let offset = pos - rect.center();
        let x = offset.x / radii.x;
        let y = offset.y / radii.y;
        x * x + y * y <= 1.0
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
        self.body.render(surface, Outline::Ellipse);
    }

    fn print(&self, surface: &mut Surface, target: Rect) {
        self.body.print(surface, target, Outline::Ellipse);
    }

    fn rasterize(&self) -> CanvasResult<Surface> {
        self.body.rasterize(Outline::Ellipse)
    }
}
