use std::path::Path;

use egui::{Color32, Pos2, Rect, Vec2};

pub(crate) mod common;
pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod rectangle;

pub use common::{Appearance, EdgeStyle, ShapeId};
pub use ellipse::Ellipse;
pub use line::Line;
pub use rectangle::Rectangle;

use crate::error::CanvasResult;
use crate::fill::{FillDescriptor, FillMode, HatchStyle};
use crate::geometry::ControlPoint;
use crate::surface::Surface;
use crate::texture::Texture;

/// The kinds of shape a user can place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Line,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Line => "Line",
        }
    }
}

/// Common trait that all shapes on the canvas implement
pub trait Shape {
    /// Get the unique identifier for this shape
    fn id(&self) -> ShapeId;

    fn kind(&self) -> ShapeKind;

    /// Geometric bounds, without the edge
    fn bounds(&self) -> Rect;

    /// Pixel footprint: bounds plus the edge width when the edge is drawn
    fn size(&self) -> [u32; 2];

    fn appearance(&self) -> &Appearance;

    /// The fill currently used for on-canvas rendering, if the shape has one
    fn fill_descriptor(&self) -> Option<&FillDescriptor>;

    /// Test if the shape covers the given position
    fn contains(&self, pos: Pos2) -> bool;

    /// Drag anchors: top-left/start first, bottom-right/end second
    fn control_points(&self) -> [Pos2; 2];

    fn transform_move(&mut self, delta: Vec2);

    /// Drag one anchor by `delta` while the other stays put
    fn transform_scale(&mut self, delta: Vec2, anchor: ControlPoint);

    /// Draw at 1:1 scale onto the surface
    fn render(&self, surface: &mut Surface);

    /// Draw scaled to fit the top-left of `target`, keeping the aspect ratio
    fn print(&self, surface: &mut Surface, target: Rect);

    /// Render the shape alone into a surface sized to [`Shape::size`]
    fn rasterize(&self) -> CanvasResult<Surface>;

    /// Rasterize and save; the format follows the path's extension
    fn export(&self, path: &Path) -> CanvasResult<()> {
        log::info!("📤 Exporting {} {} to {}", self.kind().name(), self.id(), path.display());
        self.rasterize()?.save(path)
    }
}

/// Enumeration of all shape types on the canvas
#[derive(Debug, Clone)]
pub enum ShapeType {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Line(Line),
}

impl Shape for ShapeType {
    fn id(&self) -> ShapeId {
        match self {
            ShapeType::Rectangle(r) => r.id(),
            ShapeType::Ellipse(e) => e.id(),
            ShapeType::Line(l) => l.id(),
        }
    }

    fn kind(&self) -> ShapeKind {
        match self {
            ShapeType::Rectangle(_) => ShapeKind::Rectangle,
            ShapeType::Ellipse(_) => ShapeKind::Ellipse,
            ShapeType::Line(_) => ShapeKind::Line,
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            ShapeType::Rectangle(r) => r.bounds(),
            ShapeType::Ellipse(e) => e.bounds(),
            ShapeType::Line(l) => l.bounds(),
        }
    }

    fn size(&self) -> [u32; 2] {
        match self {
            ShapeType::Rectangle(r) => r.size(),
            ShapeType::Ellipse(e) => e.size(),
            ShapeType::Line(l) => l.size(),
        }
    }

    fn appearance(&self) -> &Appearance {
        match self {
            ShapeType::Rectangle(r) => r.appearance(),
            ShapeType::Ellipse(e) => e.appearance(),
            ShapeType::Line(l) => l.appearance(),
        }
    }

    fn fill_descriptor(&self) -> Option<&FillDescriptor> {
        match self {
            ShapeType::Rectangle(r) => r.fill_descriptor(),
            ShapeType::Ellipse(e) => e.fill_descriptor(),
            ShapeType::Line(l) => l.fill_descriptor(),
        }
    }

    fn contains(&self, pos: Pos2) -> bool {
        match self {
            ShapeType::Rectangle(r) => r.contains(pos),
            ShapeType::Ellipse(e) => e.contains(pos),
            ShapeType::Line(l) => l.contains(pos),
        }
    }

    fn control_points(&self) -> [Pos2; 2] {
        match self {
            ShapeType::Rectangle(r) => r.control_points(),
            ShapeType::Ellipse(e) => e.control_points(),
            ShapeType::Line(l) => l.control_points(),
        }
    }

    fn transform_move(&mut self, delta: Vec2) {
        match self {
            ShapeType::Rectangle(r) => r.transform_move(delta),
            ShapeType::Ellipse(e) => e.transform_move(delta),
            ShapeType::Line(l) => l.transform_move(delta),
        }
    }

    fn transform_scale(&mut self, delta: Vec2, anchor: ControlPoint) {
        match self {
            ShapeType::Rectangle(r) => r.transform_scale(delta, anchor),
            ShapeType::Ellipse(e) => e.transform_scale(delta, anchor),
            ShapeType::Line(l) => l.transform_scale(delta, anchor),
        }
    }

    fn render(&self, surface: &mut Surface) {
        match self {
            ShapeType::Rectangle(r) => r.render(surface),
            ShapeType::Ellipse(e) => e.render(surface),
            ShapeType::Line(l) => l.render(surface),
        }
    }

    fn print(&self, surface: &mut Surface, target: Rect) {
        match self {
            ShapeType::Rectangle(r) => r.print(surface, target),
            ShapeType::Ellipse(e) => e.print(surface, target),
            ShapeType::Line(l) => l.print(surface, target),
        }
    }

    fn rasterize(&self) -> CanvasResult<Surface> {
        match self {
            ShapeType::Rectangle(r) => r.rasterize(),
            ShapeType::Ellipse(e) => e.rasterize(),
            ShapeType::Line(l) => l.rasterize(),
        }
    }
}

// Conversions, copies and hit testing that aren't part of the Shape trait
impl ShapeType {
    /// Independent copy with a fresh id. Only the texture handle is shared.
    pub fn deep_copy(&self) -> ShapeType {
        match self {
            ShapeType::Rectangle(r) => ShapeType::Rectangle(Rectangle::from_body(r.body.duplicate())),
            ShapeType::Ellipse(e) => ShapeType::Ellipse(Ellipse::from_body(e.body.duplicate())),
            ShapeType::Line(l) => ShapeType::Line(l.duplicate()),
        }
    }

    /// New rectangle with this shape's geometry, fill and edge
    pub fn to_rectangle(&self) -> ShapeType {
        ShapeType::Rectangle(Rectangle::new(self.area_bounds(), self.appearance().clone()))
    }

    /// New ellipse with this shape's geometry, fill and edge
    pub fn to_ellipse(&self) -> ShapeType {
        ShapeType::Ellipse(Ellipse::new(self.area_bounds(), self.appearance().clone()))
    }

    fn area_bounds(&self) -> Rect {
        match self {
            ShapeType::Line(l) => l.area_bounds(),
            other => other.bounds(),
        }
    }

    /// Area test for rectangles and ellipses, segment distance for lines
    pub fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        match self {
            ShapeType::Line(l) => l.is_near(pos, tolerance),
            other => other.contains(pos),
        }
    }

    fn update_appearance(&mut self, edit: impl FnOnce(&mut Appearance)) {
        match self {
            ShapeType::Rectangle(r) => r.body.update(edit),
            ShapeType::Ellipse(e) => e.body.update(edit),
            ShapeType::Line(l) => edit(&mut l.appearance),
        }
    }
}

// Property accessors. Every setter rebuilds the live fill before returning.
impl ShapeType {
    pub fn fill_mode(&self) -> FillMode {
        self.appearance().fill.mode
    }

    pub fn set_fill_mode(&mut self, mode: FillMode) {
        self.update_appearance(|a| a.fill.mode = mode);
    }

    pub fn primary(&self) -> Color32 {
        self.appearance().fill.primary
    }

    pub fn set_primary(&mut self, color: Color32) {
        self.update_appearance(|a| a.fill.primary = color);
    }

    pub fn secondary(&self) -> Color32 {
        self.appearance().fill.secondary
    }

    pub fn set_secondary(&mut self, color: Color32) {
        self.update_appearance(|a| a.fill.secondary = color);
    }

    pub fn fill_angle(&self) -> f32 {
        self.appearance().fill.angle
    }

    pub fn set_fill_angle(&mut self, degrees: f32) {
        self.update_appearance(|a| a.fill.angle = degrees);
    }

    pub fn hatch(&self) -> HatchStyle {
        self.appearance().fill.hatch
    }

    pub fn set_hatch(&mut self, hatch: HatchStyle) {
        self.update_appearance(|a| a.fill.hatch = hatch);
    }

    pub fn texture(&self) -> &Texture {
        &self.appearance().fill.texture
    }

    /// Assign a texture, or `None` to go back to the built-in default
    pub fn set_texture(&mut self, texture: Option<Texture>) {
        let texture = texture.unwrap_or_else(Texture::default_texture);
        self.update_appearance(|a| a.fill.texture = texture);
    }

    pub fn edge_color(&self) -> Color32 {
        self.appearance().edge.color
    }

    pub fn set_edge_color(&mut self, color: Color32) {
        self.update_appearance(|a| a.edge.color = color);
    }

    pub fn edge_width(&self) -> f32 {
        self.appearance().edge.width
    }

    /// Negative widths are treated as zero
    pub fn set_edge_width(&mut self, width: f32) {
        self.update_appearance(|a| a.edge.width = width.max(0.0));
    }

    pub fn edge_enabled(&self) -> bool {
        self.appearance().edge.enabled
    }

    pub fn set_edge_enabled(&mut self, enabled: bool) {
        self.update_appearance(|a| a.edge.enabled = enabled);
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [width, height] = self.size();
        write!(f, "{} {}x{}", self.kind().name(), width, height)
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;
    use crate::config::ShapeDefaults;
    use crate::geometry::normalized_rect;

    /// Create a shape from a drag gesture running from `start` to `end`.
    ///
    /// Area shapes use the rectangle spanned by the two points, whichever way
    /// the drag went; lines keep the points as their endpoints.
    pub fn create(kind: ShapeKind, start: Pos2, end: Pos2, defaults: &ShapeDefaults) -> ShapeType {
        match kind {
            ShapeKind::Rectangle => rectangle(normalized_rect(start, end), defaults),
            ShapeKind::Ellipse => ellipse(normalized_rect(start, end), defaults),
            ShapeKind::Line => line(start, end, defaults),
        }
    }

    pub fn rectangle(rect: Rect, defaults: &ShapeDefaults) -> ShapeType {
        ShapeType::Rectangle(Rectangle::new(rect, defaults.appearance()))
    }

    pub fn ellipse(rect: Rect, defaults: &ShapeDefaults) -> ShapeType {
        ShapeType::Ellipse(Ellipse::new(rect, defaults.appearance()))
    }

    pub fn line(start: Pos2, end: Pos2, defaults: &ShapeDefaults) -> ShapeType {
        ShapeType::Line(Line::new(start, end, defaults.appearance()))
    }
}
