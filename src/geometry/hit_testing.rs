use egui::Pos2;

/// Default grab radius around control points and line segments, in pixels
pub const GRAB_RADIUS: f32 = 15.0;

/// Euclidean distance between two points
pub fn distance_point(a: Pos2, b: Pos2) -> f32 {
    (a - b).length()
}

/// Calculate distance from a point to a line segment
///
/// A degenerate segment (both ends equal) falls back to the point distance.
pub fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let len_sq = line_vec.length_sq();
    if len_sq == 0.0 {
        return distance_point(point, line_start);
    }

    let point_vec = point - line_start;
    let t = (point_vec.x * line_vec.x + point_vec.y * line_vec.y) / len_sq;
    let closest = if t < 0.0 {
        line_start
    } else if t > 1.0 {
        line_end
    } else {
        line_start + line_vec * t
    };
    distance_point(point, closest)
}

/// Returns the index of the first control point within `radius` of `pos`
pub fn find_control_point(pos: Pos2, points: &[Pos2], radius: f32) -> Option<usize> {
    points
        .iter()
        .position(|point| distance_point(*point, pos) <= radius)
}
