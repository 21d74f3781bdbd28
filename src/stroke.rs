use egui::Pos2;

/// Surface-local coordinate of one input sample
pub type Point = Pos2;

/// Samples of the stroke currently being drawn, in the order they arrived.
///
/// The order decides the curve shape, so points are only ever appended. The
/// buffer is emptied, not dropped, when a stroke is committed so its allocation
/// is reused by the next one.
#[derive(Debug, Clone, Default)]
pub struct StrokeBuffer {
    points: Vec<Point>,
}

impl StrokeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Empties the buffer, keeping its capacity
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_keep_arrival_order() {
        let mut buffer = StrokeBuffer::new();
        buffer.add_point(Pos2::new(3.0, 1.0));
        buffer.add_point(Pos2::new(1.0, 2.0));
        assert_eq!(buffer.points(), &[Pos2::new(3.0, 1.0), Pos2::new(1.0, 2.0)]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buffer = StrokeBuffer::new();
        for i in 0..16 {
            buffer.add_point(Pos2::new(i as f32, 0.0));
        }
        let capacity = buffer.points.capacity();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.points.capacity(), capacity);
    }
}
