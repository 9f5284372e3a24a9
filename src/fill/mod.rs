//! Brush resolution: turns a shape's fill settings and a bounding box into a
//! paintable [`FillDescriptor`].
//!
//! Descriptors are always resolved for one specific [`FillContext`]. The live
//! descriptor a shape keeps for on-canvas rendering is never reused for print
//! or export; those paths resolve their own against their own bounds.

use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use tiny_skia::{FilterQuality, GradientStop, LinearGradient, Pattern, Pixmap, Shader, SpreadMode, Transform};

use crate::geometry::{to_skia_color, to_skia_point};
use crate::texture::Texture;

pub mod hatch;

pub use hatch::HatchStyle;

/// How the interior of a shape is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FillMode {
    #[default]
    Solid,
    Gradient,
    Hatch,
    Texture,
}

impl FillMode {
    pub const ALL: [FillMode; 4] = [FillMode::Solid, FillMode::Gradient, FillMode::Hatch, FillMode::Texture];
}

/// Every input of the resolver except the bounds
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    pub mode: FillMode,
    pub primary: Color32,
    pub secondary: Color32,
    /// Degrees, used by gradient and texture fills
    pub angle: f32,
    pub hatch: HatchStyle,
    pub texture: Texture,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            mode: FillMode::Solid,
            primary: Color32::from_rgb(211, 211, 211),
            secondary: Color32::BLACK,
            angle: 0.0,
            hatch: HatchStyle::default(),
            texture: Texture::default_texture(),
        }
    }
}

/// Which bounds a descriptor was resolved against
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillContext {
    /// On-canvas rendering at the shape's current bounds
    Live,
    /// Printing into an isolated rectangle scaled by `scale`
    Print { scale: f32 },
    /// Standalone export with origin-zeroed bounds
    Export,
}

impl FillContext {
    fn scale(self) -> f32 {
        match self {
            FillContext::Print { scale } => scale,
            FillContext::Live | FillContext::Export => 1.0,
        }
    }
}

/// A fully resolved, paintable fill
#[derive(Clone)]
pub enum FillDescriptor {
    Solid(Color32),
    LinearGradient {
        start: Pos2,
        end: Pos2,
        from: Color32,
        to: Color32,
    },
    Hatch {
        style: HatchStyle,
        origin: Pos2,
        tile: Pixmap,
    },
    Texture {
        texture: Texture,
        transform: Transform,
    },
}

impl std::fmt::Debug for FillDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FillDescriptor::Solid(color) => f.debug_tuple("Solid").field(color).finish(),
            FillDescriptor::LinearGradient { start, end, from, to } => f
                .debug_struct("LinearGradient")
                .field("start", start)
                .field("end", end)
                .field("from", from)
                .field("to", to)
                .finish(),
            FillDescriptor::Hatch { style, origin, .. } => f
                .debug_struct("Hatch")
                .field("style", style)
                .field("origin", origin)
                .finish(),
            FillDescriptor::Texture { texture, transform } => f
                .debug_struct("Texture")
                .field("texture", texture)
                .field("transform", transform)
                .finish(),
        }
    }
}

/// Resolve `style` against `bounds` for the given context
pub fn resolve(style: &FillStyle, bounds: Rect, context: FillContext) -> FillDescriptor {
    match style.mode {
        FillMode::Solid => FillDescriptor::Solid(style.primary),
        FillMode::Gradient => {
            let (start, end) = gradient_axis(bounds, style.angle);
            FillDescriptor::LinearGradient {
                start,
                end,
                from: style.primary,
                to: style.secondary,
            }
        }
        FillMode::Hatch => match style.hatch.tile(style.primary, style.secondary) {
            Some(tile) => FillDescriptor::Hatch {
                style: style.hatch,
                origin: bounds.min,
                tile,
            },
            None => FillDescriptor::Solid(style.primary),
        },
        FillMode::Texture => {
            let scale = context.scale();
            let transform = Transform::from_translate(bounds.min.x, bounds.min.y)
                .pre_scale(scale, scale)
                .pre_concat(Transform::from_rotate(style.angle));
            FillDescriptor::Texture {
                texture: style.texture.clone(),
                transform,
            }
        }
    }
}

/// End points of a linear gradient at `angle` degrees that spans `bounds`.
///
/// The axis passes through the center; its length is the extent of the
/// rectangle projected onto the gradient direction, so both far corners land
/// exactly on the first and last color.
pub fn gradient_axis(bounds: Rect, angle: f32) -> (Pos2, Pos2) {
    let (sin, cos) = angle.to_radians().sin_cos();
    let half = (bounds.width() * cos.abs() + bounds.height() * sin.abs()) / 2.0;
    let offset = Vec2::new(cos, sin) * half;
    let center = bounds.center();
    (center - offset, center + offset)
}

impl FillDescriptor {
    /// Move the fill along with its shape.
    ///
    /// Textures shift their anchor so the image travels with the shape;
    /// gradients and hatches shift their geometry the same way.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            FillDescriptor::Solid(_) => {}
            FillDescriptor::LinearGradient { start, end, .. } => {
                *start += delta;
                *end += delta;
            }
            FillDescriptor::Hatch { origin, .. } => *origin += delta,
            FillDescriptor::Texture { transform, .. } => {
                *transform = transform.post_translate(delta.x, delta.y);
            }
        }
    }

    pub fn is_texture(&self) -> bool {
        matches!(self, FillDescriptor::Texture { .. })
    }

    pub(crate) fn shader(&self) -> Shader<'_> {
        match self {
            FillDescriptor::Solid(color) => Shader::SolidColor(to_skia_color(*color)),
            FillDescriptor::LinearGradient { start, end, from, to } => LinearGradient::new(
                to_skia_point(*start),
                to_skia_point(*end),
                vec![
                    GradientStop::new(0.0, to_skia_color(*from)),
                    GradientStop::new(1.0, to_skia_color(*to)),
                ],
                SpreadMode::Pad,
                Transform::identity(),
            )
            .unwrap_or(Shader::SolidColor(to_skia_color(*from))),
            FillDescriptor::Hatch { origin, tile, .. } => Pattern::new(
                tile.as_ref(),
                SpreadMode::Repeat,
                FilterQuality::Nearest,
                1.0,
                Transform::from_translate(origin.x, origin.y),
            ),
            FillDescriptor::Texture { texture, transform } => Pattern::new(
                texture.pixmap().as_ref(),
                SpreadMode::Repeat,
                FilterQuality::Bilinear,
                1.0,
                *transform,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn bounds() -> Rect {
        Rect::from_min_size(pos2(10.0, 20.0), vec2(100.0, 50.0))
    }

    fn style(mode: FillMode) -> FillStyle {
        FillStyle {
            mode,
            primary: Color32::RED,
            secondary: Color32::BLUE,
            ..Default::default()
        }
    }

    #[test]
    fn test_solid_uses_primary() {
        let fill = resolve(&style(FillMode::Solid), bounds(), FillContext::Live);
        assert!(matches!(fill, FillDescriptor::Solid(c) if c == Color32::RED));
    }

    #[test]
    fn test_gradient_axis_left_to_right() {
        let (start, end) = gradient_axis(bounds(), 0.0);
        assert_eq!(start, pos2(10.0, 45.0));
        assert_eq!(end, pos2(110.0, 45.0));
    }

    #[test]
    fn test_gradient_axis_vertical() {
        let (start, end) = gradient_axis(bounds(), 90.0);
        assert!((start.x - 60.0).abs() < 1e-3 && (start.y - 20.0).abs() < 1e-3);
        assert!((end.x - 60.0).abs() < 1e-3 && (end.y - 70.0).abs() < 1e-3);
    }

    #[test]
    fn test_gradient_follows_bounds() {
        let small = resolve(&style(FillMode::Gradient), bounds(), FillContext::Live);
        let big = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 50.0));
        let large = resolve(&style(FillMode::Gradient), big, FillContext::Live);
        match (small, large) {
            (
                FillDescriptor::LinearGradient { end: a, from, to, .. },
                FillDescriptor::LinearGradient { end: b, .. },
            ) => {
                assert_ne!(a, b);
                assert_eq!((from, to), (Color32::RED, Color32::BLUE));
            }
            other => panic!("expected gradients, got {other:?}"),
        }
    }

    #[test]
    fn test_hatch_anchored_at_origin() {
        let mut hatch = style(FillMode::Hatch);
        hatch.hatch = HatchStyle::Cross;
        match resolve(&hatch, bounds(), FillContext::Live) {
            FillDescriptor::Hatch { style, origin, .. } => {
                assert_eq!(style, HatchStyle::Cross);
                assert_eq!(origin, bounds().min);
            }
            other => panic!("expected hatch, got {other:?}"),
        }
    }

    #[test]
    fn test_texture_print_is_scaled() {
        let live = resolve(&style(FillMode::Texture), bounds(), FillContext::Live);
        let print = resolve(&style(FillMode::Texture), bounds(), FillContext::Print { scale: 3.0 });
        match (live, print) {
            (FillDescriptor::Texture { transform: live, .. }, FillDescriptor::Texture { transform: print, .. }) => {
                assert_eq!((live.sx, live.tx, live.ty), (1.0, 10.0, 20.0));
                assert_eq!((print.sx, print.sy, print.tx), (3.0, 3.0, 10.0));
            }
            other => panic!("expected textures, got {other:?}"),
        }
    }

    #[test]
    fn test_texture_translate_reanchors() {
        let mut fill = resolve(&style(FillMode::Texture), bounds(), FillContext::Live);
        fill.translate(vec2(5.0, -7.0));
        match fill {
            FillDescriptor::Texture { transform, .. } => {
                assert_eq!((transform.tx, transform.ty), (15.0, 13.0));
            }
            other => panic!("expected texture, got {other:?}"),
        }
    }

    #[test]
    fn test_every_mode_paints() {
        for mode in FillMode::ALL {
            let fill = resolve(&style(mode), bounds(), FillContext::Export);
            assert!(!matches!(fill.shader(), Shader::SolidColor(c) if c.alpha() == 0.0), "{mode:?}");
        }
    }
}
