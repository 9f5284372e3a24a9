use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use tiny_skia::{Path, PathBuilder};
use uuid::Uuid;

use crate::error::CanvasResult;
use crate::fill::{self, FillContext, FillDescriptor, FillStyle};
use crate::geometry::{self, ControlPoint, to_skia_rect};
use crate::surface::Surface;

/// Unique identity of a shape instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outline stroke drawn centered on the shape's boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub color: Color32,
    pub width: f32,
    pub enabled: bool,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            color: Color32::RED,
            width: 4.0,
            enabled: true,
        }
    }
}

/// Everything about a shape's look that the property editor can change
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Appearance {
    pub fill: FillStyle,
    pub edge: EdgeStyle,
}

/// Outline geometry shared by the area shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outline {
    Rectangle,
    Ellipse,
}

impl Outline {
    pub(crate) fn path(self, rect: Rect) -> Option<Path> {
        let rect = to_skia_rect(rect)?;
        match self {
            Outline::Rectangle => Some(PathBuilder::from_rect(rect)),
            Outline::Ellipse => PathBuilder::from_oval(rect),
        }
    }
}

/// Pixel footprint of `bounds` once an edge of `edge_width` is drawn around it
pub(crate) fn footprint(bounds: Rect, edge_width: f32) -> [u32; 2] {
    [(bounds.width() + edge_width) as u32, (bounds.height() + edge_width) as u32]
}

/// State shared by rectangles and ellipses: bounds, appearance and the live fill
#[derive(Debug, Clone)]
pub(crate) struct Body {
    pub(crate) id: ShapeId,
    pub(crate) rect: Rect,
    pub(crate) appearance: Appearance,
    pub(crate) fill: FillDescriptor,
}

impl Body {
    pub(crate) fn new(rect: Rect, appearance: Appearance) -> Self {
        let fill = fill::resolve(&appearance.fill, rect, FillContext::Live);
        Self {
            id: ShapeId::new(),
            rect,
            appearance,
            fill,
        }
    }

    /// Copy with fresh identity; the texture handle stays shared
    pub(crate) fn duplicate(&self) -> Self {
        Self {
            id: ShapeId::new(),
            ..self.clone()
        }
    }

    /// Rebuild the live fill from the current bounds and appearance
    pub(crate) fn refresh(&mut self) {
        self.fill = fill::resolve(&self.appearance.fill, self.rect, FillContext::Live);
    }

    pub(crate) fn update(&mut self, edit: impl FnOnce(&mut Appearance)) {
        edit(&mut self.appearance);
        self.refresh();
    }

    pub(crate) fn size(&self) -> [u32; 2] {
        footprint(self.rect, self.visible_edge_width())
    }

    fn visible_edge_width(&self) -> f32 {
        if self.appearance.edge.enabled {
            self.appearance.edge.width
        } else {
            0.0
        }
    }

    /// Offset that keeps an exported edge inside the image
    fn edge_inset(&self) -> f32 {
        (self.visible_edge_width() / 2.0).trunc()
    }

    pub(crate) fn control_points(&self) -> [Pos2; 2] {
        [self.rect.min, self.rect.max]
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.rect = self.rect.translate(delta);
        if self.fill.is_texture() {
            self.fill.translate(delta);
        } else {
            self.refresh();
        }
    }

    pub(crate) fn scale(&mut self, delta: Vec2, anchor: ControlPoint) {
        let scaled = geometry::scale_from_anchor(self.rect, delta, anchor);
        trace!("Scaling {} via {:?}: {:?} -> {:?}", self.id, anchor, self.rect, scaled);
        let shift = scaled.min - self.rect.min;
        self.rect = scaled;
        if self.fill.is_texture() {
            self.fill.translate(shift);
        } else {
            self.refresh();
        }
    }

    fn paint(&self, surface: &mut Surface, outline: Outline, rect: Rect, fill: &FillDescriptor) {
        let Some(path) = outline.path(rect) else {
            warn!("Skipping {} with degenerate bounds {:?}", self.id, rect);
            return;
        };
        surface.fill_path(&path, fill);
        if self.appearance.edge.enabled {
            let edge = self.appearance.edge;
            surface.stroke_path(&path, edge.color, edge.width);
        }
    }

    pub(crate) fn render(&self, surface: &mut Surface, outline: Outline) {
        self.paint(surface, outline, self.rect, &self.fill);
    }

    pub(crate) fn print(&self, surface: &mut Surface, target: Rect, outline: Outline) {
        let factor = (target.width() / self.rect.width()).min(target.height() / self.rect.height());
        let isolated = Rect::from_min_size(
            target.min,
            vec2((self.rect.width() * factor).trunc(), (self.rect.height() * factor).trunc()),
        );
        let fill = fill::resolve(&self.appearance.fill, isolated, FillContext::Print { scale: factor });
        // The edge keeps its on-screen width; only the body is rescaled.
        self.paint(surface, outline, isolated, &fill);
    }

    pub(crate) fn rasterize(&self, outline: Outline) -> CanvasResult<Surface> {
        let [width, height] = self.size().map(|extent| extent.max(1));
        let mut surface = Surface::new(width, height)?;
        let inset = self.edge_inset();
        let isolated = Rect::from_min_size(pos2(inset, inset), self.rect.size());
        let zeroed = Rect::from_min_size(Pos2::ZERO, self.rect.size());
        let mut fill = fill::resolve(&self.appearance.fill, zeroed, FillContext::Export);
        // Textures stay pinned to the shape's corner as they are on the canvas
        if fill.is_texture() {
            fill.translate(vec2(inset, inset));
        }
        self.paint(&mut surface, outline, isolated, &fill);
        Ok(surface)
    }
}
