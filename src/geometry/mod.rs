use egui::{Pos2, Rect};

pub mod fit;
pub mod smoothing;

pub use fit::{FitRect, FitSize, aspect_ratio_fit, checked_aspect_ratio_fit, contain, cover};
pub use smoothing::{PathCommand, smooth};

/// Distance from a point to a line segment
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let len_sq = line_vec.length_sq();
    if len_sq == 0.0 {
        return point_vec.length();
    }

    let t = (point_vec.dot(line_vec) / len_sq).clamp(0.0, 1.0);
    let projection = line_start + line_vec * t;
    (point - projection).length()
}

/// Bounding box of a set of points grown by `padding` on every side
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_segment() {
        let a = Pos2::new(0.0, 0.0);
        let b = Pos2::new(10.0, 0.0);
        assert_eq!(distance_to_line_segment(Pos2::new(5.0, 3.0), a, b), 3.0);
        // Beyond the end the distance is to the endpoint
        assert_eq!(distance_to_line_segment(Pos2::new(13.0, 4.0), a, b), 5.0);
        // Degenerate segment
        assert_eq!(distance_to_line_segment(Pos2::new(3.0, 4.0), a, a), 5.0);
    }

    #[test]
    fn test_bounds_with_padding() {
        let rect = calculate_bounds(&[Pos2::new(10.0, 20.0), Pos2::new(30.0, 5.0)], 2.0);
        assert_eq!(rect.min, Pos2::new(8.0, 3.0));
        assert_eq!(rect.max, Pos2::new(32.0, 22.0));
        assert_eq!(calculate_bounds(&[], 1.0), Rect::NOTHING);
    }
}
