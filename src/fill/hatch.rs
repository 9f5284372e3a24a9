use egui::Color32;
use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

use crate::geometry::to_skia_color;

/// Edge length of a hatch tile in pixels
pub const HATCH_TILE_SIZE: u32 = 8;

macro_rules! hatch_styles {
    ($($variant:ident => $pattern:expr),+ $(,)?) => {
        /// Catalog of two-color repeating hatch patterns
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum HatchStyle {
            #[default]
            $($variant),+
        }

        impl HatchStyle {
            /// Every style, in catalog order
            pub const ALL: &'static [HatchStyle] = &[$(HatchStyle::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(HatchStyle::$variant => stringify!($variant)),+
                }
            }

            /// 8x8 bit pattern, one byte per row, most significant bit leftmost.
            /// Set bits are drawn in the foreground color.
            pub fn pattern(self) -> [u8; 8] {
                match self {
                    $(HatchStyle::$variant => $pattern),+
                }
            }
        }
    };
}

hatch_styles! {
    Horizontal => [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    Vertical => [0x80; 8],
    ForwardDiagonal => [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01],
    BackwardDiagonal => [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80],
    Cross => [0xFF, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    DiagonalCross => [0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81],
    Percent05 => [0x80, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00],
    Percent10 => [0x80, 0x00, 0x08, 0x00, 0x80, 0x00, 0x08, 0x00],
    Percent20 => [0x88, 0x00, 0x22, 0x00, 0x88, 0x00, 0x22, 0x00],
    Percent25 => [0x88, 0x22, 0x88, 0x22, 0x88, 0x22, 0x88, 0x22],
    Percent30 => [0xAA, 0x44, 0xAA, 0x11, 0xAA, 0x44, 0xAA, 0x11],
    Percent40 => [0xAA, 0x55, 0xAA, 0x51, 0xAA, 0x55, 0xAA, 0x15],
    Percent50 => [0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55],
    Percent60 => [0xEE, 0x55, 0xBB, 0x55, 0xEE, 0x55, 0xBB, 0x55],
    Percent70 => [0xEE, 0x77, 0xBB, 0x55, 0xEE, 0x77, 0xBB, 0x55],
    Percent75 => [0xEE, 0xBB, 0xEE, 0xBB, 0xEE, 0xBB, 0xEE, 0xBB],
    Percent80 => [0xEE, 0xFF, 0xBB, 0xFF, 0xEE, 0xFF, 0xBB, 0xFF],
    Percent90 => [0xFF, 0xF7, 0xFF, 0xFF, 0xFF, 0x7F, 0xFF, 0xFF],
    LightDownwardDiagonal => [0x88, 0x44, 0x22, 0x11, 0x88, 0x44, 0x22, 0x11],
    LightUpwardDiagonal => [0x11, 0x22, 0x44, 0x88, 0x11, 0x22, 0x44, 0x88],
    DarkDownwardDiagonal => [0xCC, 0x66, 0x33, 0x99, 0xCC, 0x66, 0x33, 0x99],
    DarkUpwardDiagonal => [0x33, 0x66, 0xCC, 0x99, 0x33, 0x66, 0xCC, 0x99],
    WideDownwardDiagonal => [0xC1, 0xE0, 0x70, 0x38, 0x1C, 0x0E, 0x07, 0x83],
    WideUpwardDiagonal => [0x83, 0x07, 0x0E, 0x1C, 0x38, 0x70, 0xE0, 0xC1],
    LightVertical => [0x88; 8],
    LightHorizontal => [0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00],
    NarrowVertical => [0xAA; 8],
    NarrowHorizontal => [0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00],
    DarkVertical => [0xCC; 8],
    DarkHorizontal => [0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00],
    DashedDownwardDiagonal => [0x00, 0x00, 0x88, 0x44, 0x22, 0x11, 0x00, 0x00],
    DashedUpwardDiagonal => [0x00, 0x00, 0x11, 0x22, 0x44, 0x88, 0x00, 0x00],
    DashedHorizontal => [0xF0, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00],
    DashedVertical => [0x80, 0x80, 0x80, 0x80, 0x08, 0x08, 0x08, 0x08],
    SmallConfetti => [0x80, 0x08, 0x40, 0x02, 0x10, 0x01, 0x20, 0x04],
    LargeConfetti => [0xB1, 0x30, 0x03, 0x1B, 0xD8, 0xC0, 0x0C, 0x8D],
    ZigZag => [0x81, 0x42, 0x24, 0x18, 0x81, 0x42, 0x24, 0x18],
    Wave => [0x00, 0x18, 0xA4, 0x03, 0x00, 0x18, 0xA4, 0x03],
    DiagonalBrick => [0x01, 0x02, 0x04, 0x08, 0x18, 0x24, 0x42, 0x81],
    HorizontalBrick => [0xFF, 0x80, 0x80, 0x80, 0xFF, 0x08, 0x08, 0x08],
    Weave => [0x88, 0x54, 0x22, 0x45, 0x88, 0x14, 0x22, 0x51],
    Plaid => [0xAA, 0x55, 0xAA, 0x55, 0xF0, 0xF0, 0xF0, 0xF0],
    Divot => [0x00, 0x10, 0x08, 0x10, 0x00, 0x01, 0x80, 0x01],
    DottedGrid => [0xAA, 0x00, 0x80, 0x00, 0x80, 0x00, 0x80, 0x00],
    DottedDiamond => [0x80, 0x00, 0x22, 0x00, 0x08, 0x00, 0x22, 0x00],
    Shingle => [0x03, 0x84, 0x48, 0x30, 0x0C, 0x02, 0x01, 0x01],
    Trellis => [0xFF, 0x66, 0xFF, 0x99, 0xFF, 0x66, 0xFF, 0x99],
    Sphere => [0x77, 0x89, 0x8F, 0x8F, 0x77, 0x98, 0xF8, 0xF8],
    SmallGrid => [0xFF, 0x88, 0x88, 0x88, 0xFF, 0x88, 0x88, 0x88],
    SmallCheckerBoard => [0x99, 0x66, 0x66, 0x99, 0x99, 0x66, 0x66, 0x99],
    LargeCheckerBoard => [0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F],
    OutlinedDiamond => [0x41, 0x22, 0x14, 0x08, 0x14, 0x22, 0x41, 0x80],
    SolidDiamond => [0x10, 0x38, 0x7C, 0xFE, 0x7C, 0x38, 0x10, 0x00],
}

impl HatchStyle {
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the pattern has its foreground bit set at tile coordinates `(x, y)`
    pub fn is_foreground(self, x: u32, y: u32) -> bool {
        let row = self.pattern()[(y % HATCH_TILE_SIZE) as usize];
        row & (0x80 >> (x % HATCH_TILE_SIZE)) != 0
    }

    /// Render one repeating tile of this pattern
    pub(crate) fn tile(self, foreground: Color32, background: Color32) -> Option<Pixmap> {
        self.preview(foreground, background, HATCH_TILE_SIZE)
    }

    /// Render a `size`x`size` swatch of the pattern, e.g. for a style picker
    pub fn preview(self, foreground: Color32, background: Color32, size: u32) -> Option<Pixmap> {
        let mut pixmap = Pixmap::new(size, size)?;
        let fg = to_skia_color(foreground).premultiply().to_color_u8();
        let bg = to_skia_color(background).premultiply().to_color_u8();
        for (i, pixel) in pixmap.pixels_mut().iter_mut().enumerate() {
            let x = i as u32 % size;
            let y = i as u32 / size;
            *pixel = if self.is_foreground(x, y) { fg } else { bg };
        }
        Some(pixmap)
    }
}

impl std::fmt::Display for HatchStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
