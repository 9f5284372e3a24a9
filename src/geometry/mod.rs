use egui::{Color32, Pos2, Rect, Vec2};

pub mod hit_testing;

pub use hit_testing::{GRAB_RADIUS, distance_point, distance_to_line_segment, find_control_point};

/// A shape dimension must stay strictly above this many pixels after a resize
pub const MIN_EXTENT: f32 = 1.0;

/// One of the two drag anchors every shape exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPoint {
    /// Top-left corner, or the start point of a line
    Start,
    /// Bottom-right corner, or the end point of a line
    End,
}

impl ControlPoint {
    pub fn index(self) -> usize {
        match self {
            ControlPoint::Start => 0,
            ControlPoint::End => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ControlPoint::Start),
            1 => Some(ControlPoint::End),
            _ => None,
        }
    }
}

/// Moves one corner of `rect` by `delta`, leaving the opposite corner fixed.
///
/// Each axis is applied independently and only if the resulting extent stays
/// above [`MIN_EXTENT`]; an axis that would collapse is left as it was.
pub fn scale_from_anchor(rect: Rect, delta: Vec2, anchor: ControlPoint) -> Rect {
    let mut scaled = rect;
    match anchor {
        ControlPoint::Start => {
            if rect.width() - delta.x > MIN_EXTENT {
                scaled.min.x += delta.x;
            }
            if rect.height() - delta.y > MIN_EXTENT {
                scaled.min.y += delta.y;
            }
        }
        ControlPoint::End => {
            if rect.width() + delta.x > MIN_EXTENT {
                scaled.max.x += delta.x;
            }
            if rect.height() + delta.y > MIN_EXTENT {
                scaled.max.y += delta.y;
            }
        }
    }
    scaled
}

/// Rectangle spanned by two drag points, whatever direction the drag went
pub fn normalized_rect(start: Pos2, end: Pos2) -> Rect {
    Rect::from_two_pos(start, end)
}

pub(crate) fn to_skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_ltrb(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
}

pub(crate) fn to_skia_point(pos: Pos2) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(pos.x, pos.y)
}

pub(crate) fn to_skia_color(color: Color32) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}
