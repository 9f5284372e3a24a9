use std::path::Path;

use egui::{Color32, ColorImage};
use image::RgbaImage;
use tiny_skia::{FillRule, Paint, Path as SkPath, Pixmap, Stroke, Transform};

use crate::error::{CanvasError, CanvasResult};
use crate::export;
use crate::fill::FillDescriptor;
use crate::geometry::to_skia_color;

/// A CPU raster target that shapes render, print and export into
pub struct Surface {
    pixmap: Pixmap,
    transform: Transform,
    anti_alias: bool,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("transform", &self.transform)
            .field("anti_alias", &self.anti_alias)
            .finish()
    }
}

impl Surface {
    /// Create a transparent surface of the given size
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            anti_alias: true,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn set_anti_alias(&mut self, anti_alias: bool) {
        self.anti_alias = anti_alias;
    }

    /// Transform applied to every subsequent fill and stroke
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn reset_transform(&mut self) {
        self.transform = Transform::identity();
    }

    pub fn clear(&mut self, color: Color32) {
        self.pixmap.fill(to_skia_color(color));
    }

    pub fn fill_path(&mut self, path: &SkPath, fill: &FillDescriptor) {
        let paint = Paint {
            shader: fill.shader(),
            anti_alias: self.anti_alias,
            ..Default::default()
        };
        self.pixmap.fill_path(path, &paint, FillRule::Winding, self.transform, None);
    }

    pub fn stroke_path(&mut self, path: &SkPath, color: Color32, width: f32) {
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(color));
        paint.anti_alias = self.anti_alias;
        let stroke = Stroke {
            width,
            ..Default::default()
        };
        self.pixmap.stroke_path(path, &paint, &stroke, self.transform, None);
    }

    /// Read back one pixel with straight (unmultiplied) alpha
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color32::from_rgba_unmultiplied(
            color.red(),
            color.green(),
            color.blue(),
            color.alpha(),
        ))
    }

    fn unmultiplied_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            bytes.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        bytes
    }

    /// Copy the surface into an `egui` image, ready to be uploaded as a texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            &self.unmultiplied_bytes(),
        )
    }

    pub fn to_rgba_image(&self) -> CanvasResult<RgbaImage> {
        RgbaImage::from_raw(self.width(), self.height(), self.unmultiplied_bytes()).ok_or(
            CanvasError::InvalidDimensions {
                width: self.width(),
                height: self.height(),
            },
        )
    }

    /// Save the surface, picking the encoding from the path's extension
    pub fn save(&self, path: impl AsRef<Path>) -> CanvasResult<()> {
        export::save_image(&self.to_rgba_image()?, path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::PathBuilder;

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            Surface::new(0, 10),
            Err(CanvasError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_fill_and_read_back() {
        let mut surface = Surface::new(20, 20).unwrap();
        surface.clear(Color32::WHITE);
        let rect = tiny_skia::Rect::from_xywh(5.0, 5.0, 10.0, 10.0).unwrap();
        surface.fill_path(&PathBuilder::from_rect(rect), &FillDescriptor::Solid(Color32::BLUE));

        assert_eq!(surface.pixel(10, 10), Some(Color32::BLUE));
        assert_eq!(surface.pixel(1, 1), Some(Color32::WHITE));
        assert_eq!(surface.pixel(25, 1), None);
    }

    #[test]
    fn test_transform_applies_to_fills() {
        let mut surface = Surface::new(40, 40).unwrap();
        surface.set_transform(Transform::from_translate(20.0, 20.0));
        let rect = tiny_skia::Rect::from_xywh(0.0, 0.0, 10.0, 10.0).unwrap();
        surface.fill_path(&PathBuilder::from_rect(rect), &FillDescriptor::Solid(Color32::RED));

        assert_eq!(surface.pixel(25, 25), Some(Color32::RED));
        assert_eq!(surface.pixel(5, 5), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_reset_transform() {
        let mut surface = Surface::new(40, 40).unwrap();
        surface.set_transform(Transform::from_translate(20.0, 20.0));
        surface.reset_transform();
        assert_eq!(surface.transform(), Transform::identity());

        let rect = tiny_skia::Rect::from_xywh(0.0, 0.0, 10.0, 10.0).unwrap();
        surface.fill_path(&PathBuilder::from_rect(rect), &FillDescriptor::Solid(Color32::RED));
        assert_eq!(surface.pixel(5, 5), Some(Color32::RED));
    }

    #[test]
    fn test_anti_alias_toggle() {
        let rect = tiny_skia::Rect::from_xywh(0.5, 0.5, 10.0, 10.0).unwrap();
        let path = PathBuilder::from_rect(rect);

        let mut smooth = Surface::new(20, 20).unwrap();
        smooth.fill_path(&path, &FillDescriptor::Solid(Color32::RED));
        let edge = smooth.pixel(0, 5).map(|c| c.a()).unwrap_or_default();
        assert!(edge > 0 && edge < 255);

        let mut hard = Surface::new(20, 20).unwrap();
        hard.set_anti_alias(false);
        hard.fill_path(&path, &FillDescriptor::Solid(Color32::RED));
        let edge = hard.pixel(0, 5).map(|c| c.a()).unwrap_or_default();
        assert!(edge == 0 || edge == 255);
    }

    #[test]
    fn test_color_image_size() {
        let surface = Surface::new(7, 3).unwrap();
        let image = surface.to_color_image();
        assert_eq!(image.size, [7, 3]);
    }
}
