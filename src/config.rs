use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::background::{Background, BackgroundLayout};
use crate::error::CanvasResult;
use crate::fill::{FillMode, FillStyle, HatchStyle};
use crate::geometry::GRAB_RADIUS;
use crate::print::PrintStyle;
use crate::shape::{Appearance, EdgeStyle};
use crate::texture::Texture;

/// Appearance given to newly drawn shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDefaults {
    pub fill_mode: FillMode,
    pub primary: Color32,
    pub secondary: Color32,
    pub fill_angle: f32,
    pub hatch: HatchStyle,
    pub edge_color: Color32,
    pub edge_width: f32,
    pub edge_enabled: bool,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        let fill = FillStyle::default();
        let edge = EdgeStyle::default();
        Self {
            fill_mode: fill.mode,
            primary: fill.primary,
            secondary: fill.secondary,
            fill_angle: fill.angle,
            hatch: fill.hatch,
            edge_color: edge.color,
            edge_width: edge.width,
            edge_enabled: edge.enabled,
        }
    }
}

impl ShapeDefaults {
    /// Appearance for a new shape, using the built-in texture
    pub fn appearance(&self) -> Appearance {
        Appearance {
            fill: FillStyle {
                mode: self.fill_mode,
                primary: self.primary,
                secondary: self.secondary,
                angle: self.fill_angle,
                hatch: self.hatch,
                texture: Texture::default_texture(),
            },
            edge: EdgeStyle {
                color: self.edge_color,
                width: self.edge_width.max(0.0),
                enabled: self.edge_enabled,
            },
        }
    }
}

/// Canvas-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// How close a pointer must be to a control point or line to grab it
    pub grab_radius: f32,
    /// Side length of the square handles drawn on control points
    pub handle_size: f32,
    /// Initial background color
    pub background: Color32,
    /// How a background image is laid out once one is assigned
    pub background_layout: BackgroundLayout,
    pub print_style: PrintStyle,
    /// Whether printing paints the background behind the shapes
    pub print_background: bool,
    pub shape_defaults: ShapeDefaults,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            grab_radius: GRAB_RADIUS,
            handle_size: 10.0,
            background: Color32::BLACK,
            background_layout: BackgroundLayout::default(),
            print_style: PrintStyle::default(),
            print_background: false,
            shape_defaults: ShapeDefaults::default(),
        }
    }
}

impl CanvasConfig {
    pub fn from_json_str(json: &str) -> CanvasResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> CanvasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a config file; missing keys take their default values
    pub fn load(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded canvas config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> CanvasResult<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

impl From<&CanvasConfig> for Background {
    fn from(config: &CanvasConfig) -> Self {
        Background {
            color: config.background,
            image: None,
            layout: config.background_layout,
        }
    }
}
