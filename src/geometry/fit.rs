use egui::Vec2;

use crate::error::PainterError;

/// Display size of a scaled image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSize {
    pub width: f32,
    pub height: f32,
}

impl FitSize {
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Scaled size plus where to place it inside the parent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Scales a source size to fit entirely inside `max_width` x `max_height`
/// while keeping its aspect ratio.
///
/// The smaller of the two axis ratios wins, so the result never overflows
/// either dimension. Inputs must be positive and finite; see
/// [`checked_aspect_ratio_fit`] for a guarded variant.
pub fn aspect_ratio_fit(
    src_width: f32,
    src_height: f32,
    max_width: f32,
    max_height: f32,
) -> FitSize {
    let ratio = (max_width / src_width).min(max_height / src_height);
    FitSize {
        width: src_width * ratio,
        height: src_height * ratio,
    }
}

pub fn checked_aspect_ratio_fit(
    src_width: f32,
    src_height: f32,
    max_width: f32,
    max_height: f32,
) -> Result<FitSize, PainterError> {
    for (width, height) in [(src_width, src_height), (max_width, max_height)] {
        if !is_positive(width) || !is_positive(height) {
            return Err(PainterError::InvalidDimensions { width, height });
        }
    }
    Ok(aspect_ratio_fit(src_width, src_height, max_width, max_height))
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Fits the child inside the parent (letterboxing), then places it using
/// `offset_x`/`offset_y` as fractions of the leftover space (0.5 centers).
pub fn contain(
    parent_width: f32,
    parent_height: f32,
    child_width: f32,
    child_height: f32,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
) -> FitRect {
    fit(true, parent_width, parent_height, child_width, child_height, scale, offset_x, offset_y)
}

/// Fills the parent with the child (cropping), placed like [`contain`]
pub fn cover(
    parent_width: f32,
    parent_height: f32,
    child_width: f32,
    child_height: f32,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
) -> FitRect {
    fit(false, parent_width, parent_height, child_width, child_height, scale, offset_x, offset_y)
}

#[allow(clippy::too_many_arguments)]
fn fit(
    contains: bool,
    parent_width: f32,
    parent_height: f32,
    child_width: f32,
    child_height: f32,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
) -> FitRect {
    let child_ratio = child_width / child_height;
    let parent_ratio = parent_width / parent_height;
    let mut width = parent_width * scale;
    let mut height = parent_height * scale;

    let limited_by_width = if contains {
        child_ratio > parent_ratio
    } else {
        child_ratio < parent_ratio
    };
    if limited_by_width {
        height = width / child_ratio;
    } else {
        width = height * child_ratio;
    }

    FitRect {
        width,
        height,
        offset_x: (parent_width - width) * offset_x,
        offset_y: (parent_height - height) * offset_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_source() {
        let size = aspect_ratio_fit(1000.0, 500.0, 100.0, 100.0);
        assert_eq!(size, FitSize { width: 100.0, height: 50.0 });
    }

    #[test]
    fn test_fit_tall_source() {
        let size = aspect_ratio_fit(500.0, 1000.0, 100.0, 100.0);
        assert_eq!(size, FitSize { width: 50.0, height: 100.0 });
    }

    #[test]
    fn test_fit_upscales_small_source() {
        let size = aspect_ratio_fit(10.0, 20.0, 100.0, 100.0);
        assert_eq!(size, FitSize { width: 50.0, height: 100.0 });
    }

    #[test]
    fn test_checked_fit_rejects_zero() {
        assert!(matches!(
            checked_aspect_ratio_fit(0.0, 10.0, 100.0, 100.0),
            Err(PainterError::InvalidDimensions { .. })
        ));
        assert!(checked_aspect_ratio_fit(10.0, 10.0, -1.0, 100.0).is_err());
        assert!(checked_aspect_ratio_fit(10.0, 10.0, 100.0, f32::NAN).is_err());
        assert!(checked_aspect_ratio_fit(10.0, 10.0, 100.0, 50.0).is_ok());
    }

    #[test]
    fn test_contain_centers_letterbox() {
        let rect = contain(200.0, 100.0, 100.0, 100.0, 1.0, 0.5, 0.5);
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 100.0);
        assert_eq!(rect.offset_x, 50.0);
        assert_eq!(rect.offset_y, 0.0);
    }

    #[test]
    fn test_cover_overflows_parent() {
        let rect = cover(200.0, 100.0, 100.0, 100.0, 1.0, 0.5, 0.5);
        assert_eq!(rect.width, 200.0);
        assert_eq!(rect.height, 200.0);
        assert_eq!(rect.offset_y, -50.0);
    }
}
