//! Printing the canvas onto a page surface.

use egui::{Pos2, Rect, Vec2};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use tiny_skia::Transform;

use crate::background::Background;
use crate::collection::ShapeCollection;
use crate::shape::{Shape, ShapeType};
use crate::surface::Surface;

/// How the whole canvas is laid out on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrintStyle {
    /// Every shape at 1:1, ignoring the margins
    Raw,
    /// The canvas scaled uniformly and centered inside the margins
    #[default]
    Proportional,
    /// Each shape scaled on its own into the margin area
    Experimental,
}

/// Where the canvas lands inside `margin` when scaled without distortion.
/// Returns the scale and the top-left offset.
pub fn letterbox(margin: Rect, canvas_size: Vec2) -> (f32, Vec2) {
    let ratio_x = margin.width() / canvas_size.x;
    let ratio_y = margin.height() / canvas_size.y;
    let mut offset = margin.min.to_vec2();
    let ratio = if ratio_x < ratio_y {
        offset.y += (margin.height() - canvas_size.y * ratio_x) / 2.0;
        ratio_x
    } else {
        offset.x += (margin.width() - canvas_size.x * ratio_y) / 2.0;
        ratio_y
    };
    (ratio, offset)
}

/// The page implied by `margin`: the margin area plus an equal border on
/// the far sides
pub fn page_area(margin: Rect) -> Rect {
    Rect::from_min_size(Pos2::ZERO, margin.size() + margin.min.to_vec2() * 2.0)
}

/// Print every shape, bottom to top, in the given style.
///
/// When `background` is given it is painted over the whole page first.
pub fn print_canvas(
    shapes: &ShapeCollection,
    background: Option<&Background>,
    surface: &mut Surface,
    margin: Rect,
    canvas_size: Vec2,
    style: PrintStyle,
) {
    info!("🖨 Printing {} shapes ({:?}) into {:?}", shapes.len(), style, margin);
    if let Some(background) = background {
        background.render(surface, page_area(margin));
    }
    match style {
        PrintStyle::Raw => {
            for shape in shapes {
                shape.render(surface);
            }
        }
        PrintStyle::Proportional => {
            if canvas_size.x <= 0.0 || canvas_size.y <= 0.0 {
                warn!("Cannot print a canvas of size {:?}", canvas_size);
                return;
            }
            let (ratio, offset) = letterbox(margin, canvas_size);
            let previous = surface.transform();
            surface.set_transform(Transform::from_translate(offset.x, offset.y).pre_scale(ratio, ratio));
            for shape in shapes {
                shape.render(surface);
            }
            surface.set_transform(previous);
        }
        PrintStyle::Experimental => {
            for shape in shapes {
                shape.print(surface, margin);
            }
        }
    }
}

/// Print a single shape scaled into the top-left of `margin`
pub fn print_shape(shape: &ShapeType, surface: &mut Surface, margin: Rect) {
    info!("🖨 Printing {} into {:?}", shape, margin);
    shape.print(surface, margin);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShapeDefaults;
    use crate::shape::factory;
    use egui::{Color32, pos2, vec2};

    fn canvas() -> ShapeCollection {
        let mut defaults = ShapeDefaults::default();
        defaults.edge_enabled = false;
        defaults.primary = Color32::BLUE;
        let mut shapes = ShapeCollection::new();
        shapes.add(factory::rectangle(Rect::from_min_size(pos2(0.0, 0.0), vec2(50.0, 50.0)), &defaults));
        shapes
    }

    #[test]
    fn test_page_area_mirrors_margin() {
        let margin = Rect::from_min_size(pos2(10.0, 20.0), vec2(100.0, 50.0));
        assert_eq!(page_area(margin), Rect::from_min_size(pos2(0.0, 0.0), vec2(120.0, 90.0)));
    }

    #[test]
    fn test_background_printed_only_when_given() {
        let margin = Rect::from_min_size(pos2(20.0, 20.0), vec2(160.0, 160.0));
        let background = Background::new(Color32::WHITE);

        let mut plain = Surface::new(200, 200).unwrap();
        print_canvas(&canvas(), None, &mut plain, margin, vec2(100.0, 100.0), PrintStyle::Proportional);
        assert_eq!(plain.pixel(5, 5), Some(Color32::TRANSPARENT));

        let mut page = Surface::new(200, 200).unwrap();
        print_canvas(&canvas(), Some(&background), &mut page, margin, vec2(100.0, 100.0), PrintStyle::Proportional);
        assert_eq!(page.pixel(5, 5), Some(Color32::WHITE));
        assert_eq!(page.pixel(195, 195), Some(Color32::WHITE));
        // Shapes still land on top of the background
        assert_eq!(page.pixel(60, 60), Some(Color32::BLUE));
    }

    #[test]
    fn test_letterbox_wide_margin() {
        let margin = Rect::from_min_size(pos2(10.0, 10.0), vec2(200.0, 100.0));
        let (ratio, offset) = letterbox(margin, vec2(100.0, 100.0));
        assert_eq!(ratio, 1.0);
        assert_eq!(offset, vec2(60.0, 10.0));
    }

    #[test]
    fn test_letterbox_tall_margin() {
        let margin = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 300.0));
        let (ratio, offset) = letterbox(margin, vec2(200.0, 200.0));
        assert_eq!(ratio, 0.5);
        assert_eq!(offset, vec2(0.0, 100.0));
    }

    #[test]
    fn test_raw_ignores_margin() {
        let mut surface = Surface::new(200, 200).unwrap();
        let margin = Rect::from_min_size(pos2(100.0, 100.0), vec2(100.0, 100.0));
        print_canvas(&canvas(), None, &mut surface, margin, vec2(100.0, 100.0), PrintStyle::Raw);
        assert_eq!(surface.pixel(25, 25), Some(Color32::BLUE));
        assert_eq!(surface.pixel(150, 150), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_proportional_scales_into_margin() {
        let mut surface = Surface::new(200, 200).unwrap();
        let margin = Rect::from_min_size(pos2(0.0, 0.0), vec2(200.0, 200.0));
        print_canvas(&canvas(), None, &mut surface, margin, vec2(100.0, 100.0), PrintStyle::Proportional);
        assert_eq!(surface.pixel(90, 90), Some(Color32::BLUE));
        assert_eq!(surface.pixel(110, 110), Some(Color32::TRANSPARENT));
        assert_eq!(surface.transform(), Transform::identity());
    }

    #[test]
    fn test_experimental_fills_margin_per_shape() {
        let mut surface = Surface::new(200, 200).unwrap();
        let margin = Rect::from_min_size(pos2(20.0, 20.0), vec2(160.0, 100.0));
        print_canvas(&canvas(), None, &mut surface, margin, vec2(100.0, 100.0), PrintStyle::Experimental);
        // A 50x50 square scaled into 160x100 becomes 100x100 at the margin's corner
        assert_eq!(surface.pixel(115, 115), Some(Color32::BLUE));
        assert_eq!(surface.pixel(125, 60), Some(Color32::TRANSPARENT));
    }
}
