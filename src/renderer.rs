// src/renderer.rs
use std::path::Path;

use egui::{Color32, Pos2, Rect, Vec2};
use log::{info, warn};
use tiny_skia::PathBuilder;

use crate::background::Background;
use crate::collection::ShapeCollection;
use crate::config::CanvasConfig;
use crate::error::CanvasResult;
use crate::fill::FillDescriptor;
use crate::geometry::to_skia_rect;
use crate::shape::{Shape, ShapeType};
use crate::surface::Surface;

/// Draw a square handle of `handle_size` centered on each control point
pub fn draw_control_points(surface: &mut Surface, shape: &ShapeType, handle_size: f32) {
    for point in shape.control_points() {
        draw_handle(surface, point, handle_size);
    }
}

fn draw_handle(surface: &mut Surface, center: Pos2, size: f32) {
    let rect = Rect::from_center_size(center, Vec2::splat(size));
    let Some(path) = to_skia_rect(rect).map(PathBuilder::from_rect) else {
        warn!("Handle size {} is not drawable", size);
        return;
    };
    surface.fill_path(&path, &FillDescriptor::Solid(Color32::WHITE));
    surface.stroke_path(&path, Color32::BLACK, 1.0);
}

/// Renders the whole scene: background, shapes bottom to top, then the
/// handles of the focused shape so they stay on top of everything.
pub fn render_scene(
    shapes: &ShapeCollection,
    background: &Background,
    surface: &mut Surface,
    config: &CanvasConfig,
) {
    background.render(surface, surface_area(surface));
    for shape in shapes {
        shape.render(surface);
    }
    if let Some(focused) = shapes.focused() {
        draw_control_points(surface, focused, config.handle_size);
    }
}

/// Render the background and shapes without selection handles and save to `path`
pub fn export_canvas(
    shapes: &ShapeCollection,
    background: &Background,
    size: [u32; 2],
    path: impl AsRef<Path>,
) -> CanvasResult<()> {
    let path = path.as_ref();
    info!("📤 Exporting canvas {}x{} to {}", size[0], size[1], path.display());
    let mut surface = Surface::new(size[0], size[1])?;
    let area = surface_area(&surface);
    background.render(&mut surface, area);
    for shape in shapes {
        shape.render(&mut surface);
    }
    surface.save(path)
}

fn surface_area(surface: &Surface) -> Rect {
    Rect::from_min_size(Pos2::ZERO, Vec2::new(surface.width() as f32, surface.height() as f32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::BackgroundLayout;
    use crate::config::ShapeDefaults;
    use crate::shape::factory;
    use crate::texture::Texture;
    use egui::{pos2, vec2};

    fn scene() -> ShapeCollection {
        let mut shapes = ShapeCollection::new();
        shapes.add(factory::rectangle(
            Rect::from_min_size(pos2(20.0, 20.0), vec2(40.0, 40.0)),
            &ShapeDefaults::default(),
        ));
        shapes
    }

    #[test]
    fn test_background_and_shape() {
        let config = CanvasConfig::default();
        let mut surface = Surface::new(100, 100).unwrap();
        render_scene(&scene(), &Background::from(&config), &mut surface, &config);
        assert_eq!(surface.pixel(5, 5), Some(Color32::BLACK));
        assert_eq!(surface.pixel(40, 40), Some(Color32::from_rgb(211, 211, 211)));
    }

    #[test]
    fn test_handles_only_when_focused() {
        let config = CanvasConfig::default();
        let background = Background::from(&config);
        let mut shapes = scene();

        let mut surface = Surface::new(100, 100).unwrap();
        render_scene(&shapes, &background, &mut surface, &config);
        assert_ne!(surface.pixel(62, 62), Some(Color32::WHITE));

        shapes.set_focus_at(pos2(40.0, 40.0));
        render_scene(&shapes, &background, &mut surface, &config);
        assert_eq!(surface.pixel(62, 62), Some(Color32::WHITE));
        assert_eq!(surface.pixel(18, 18), Some(Color32::WHITE));
    }

    #[test]
    fn test_export_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canvas.png");
        export_canvas(&scene(), &Background::default(), [80, 60], &path).unwrap();

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (80, 60));
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_export_canvas_draws_background_image() {
        let green = Texture::from_rgba(1, 1, &[0, 255, 0, 255]).unwrap();
        let background = Background::new(Color32::BLACK).with_image(green, BackgroundLayout::Stretch);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("background.png");
        export_canvas(&scene(), &background, [80, 60], &path).unwrap();

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.get_pixel(5, 5).0, [0, 255, 0, 255]);
        assert_eq!(image.get_pixel(40, 40).0, [211, 211, 211, 255]);
    }

    #[test]
    fn test_scene_background_image() {
        let config = CanvasConfig::default();
        let green = Texture::from_rgba(1, 1, &[0, 255, 0, 255]).unwrap();
        let background = Background::from(&config).with_image(green, BackgroundLayout::Tile);

        let mut surface = Surface::new(100, 100).unwrap();
        render_scene(&scene(), &background, &mut surface, &config);
        assert_eq!(surface.pixel(5, 95), Some(Color32::GREEN));
        assert_eq!(surface.pixel(40, 40), Some(Color32::from_rgb(211, 211, 211)));
    }
}
