use egui::{Color32, Rect, Vec2};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tiny_skia::{PathBuilder, Transform};

use crate::fill::FillDescriptor;
use crate::geometry::to_skia_rect;
use crate::surface::Surface;
use crate::texture::Texture;

/// How a background image covers the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BackgroundLayout {
    /// One copy scaled to the full canvas
    #[default]
    Stretch,
    /// Repeated at its own size from the top-left corner
    Tile,
}

/// What sits behind every shape: a color, optionally covered by an image
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub color: Color32,
    pub image: Option<Texture>,
    pub layout: BackgroundLayout,
}

impl Default for Background {
    fn default() -> Self {
        Self::new(Color32::BLACK)
    }
}

impl Background {
    pub fn new(color: Color32) -> Self {
        Self {
            color,
            image: None,
            layout: BackgroundLayout::default(),
        }
    }

    pub fn with_image(mut self, image: Texture, layout: BackgroundLayout) -> Self {
        self.set_image(Some(image));
        self.layout = layout;
        self
    }

    /// Replace the image, or remove it with `None`
    pub fn set_image(&mut self, image: Option<Texture>) {
        debug!("Background image set to {:?}", image);
        self.image = image;
    }

    /// Paint the background over `area`. The color fills it first; the image,
    /// if any, is laid over it starting at the area's top-left.
    pub fn render(&self, surface: &mut Surface, area: Rect) {
        let Some(path) = to_skia_rect(area).map(PathBuilder::from_rect) else {
            warn!("Skipping background for empty area {:?}", area);
            return;
        };
        surface.fill_path(&path, &FillDescriptor::Solid(self.color));

        if let Some(image) = &self.image {
            let scale = match self.layout {
                BackgroundLayout::Stretch => Vec2::new(
                    area.width() / image.width() as f32,
                    area.height() / image.height() as f32,
                ),
                BackgroundLayout::Tile => Vec2::splat(1.0),
            };
            let transform = Transform::from_translate(area.min.x, area.min.y).pre_scale(scale.x, scale.y);
            let fill = FillDescriptor::Texture {
                texture: image.clone(),
                transform,
            };
            surface.fill_path(&path, &fill);
        }
    }
}
