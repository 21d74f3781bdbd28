use egui::{Pos2, Rect};

use crate::brush::{DrawingMode, StrokeStyle};
use crate::geometry::smoothing::flatten;
use crate::geometry::{PathCommand, calculate_bounds, distance_to_line_segment};
use crate::surface::Surface;

/// Rasterizes smoothed stroke paths onto a [`Surface`].
///
/// Coverage for the whole path is accumulated into one mask before it is
/// blended, so overlapping pieces of the same stroke never darken each other.
/// Joins and caps come out round because coverage is the distance to the
/// nearest segment.
#[derive(Debug, Clone)]
pub struct StrokeRenderer {
    tolerance: f32,
}

impl Default for StrokeRenderer {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl StrokeRenderer {
    /// `tolerance` is the longest straight piece used when flattening curves
    pub fn new(tolerance: f32) -> Self {
        Self { tolerance }
    }

    /// Draws `commands` with `style`.
    ///
    /// In erase mode the color is ignored and coverage is removed from the
    /// surface instead of painted. The composite mode only lives for this
    /// call, so whatever is drawn next starts from source-over again.
    pub fn render(&self, surface: &mut Surface, commands: &[PathCommand], style: &StrokeStyle) {
        let Some(mask) = self.coverage(surface, commands, style.width) else {
            return;
        };

        let color = match style.mode {
            DrawingMode::Draw => style.color.to_srgba_unmultiplied(),
            DrawingMode::Erase => [0, 0, 0, 255],
        };
        surface.blend_coverage(
            mask.origin_x,
            mask.origin_y,
            mask.width,
            &mask.values,
            color,
            style.mode.composite_mode(),
        );
    }

    fn coverage(
        &self,
        surface: &Surface,
        commands: &[PathCommand],
        width: f32,
    ) -> Option<CoverageMask> {
        let radius = width / 2.0;
        let mut discs: Vec<(Pos2, f32)> = Vec::new();
        let mut outline: Vec<Pos2> = Vec::new();

        for command in commands {
            if let PathCommand::Dot { center, radius } = *command {
                discs.push((center, radius));
                outline.push(center);
            }
        }
        let polylines = flatten(commands, self.tolerance);
        outline.extend(polylines.iter().flatten().copied());

        let max_radius = discs.iter().map(|(_, r)| *r).fold(radius, f32::max);
        let bounds = calculate_bounds(&outline, max_radius + 1.0);
        let mut mask = CoverageMask::clipped(bounds, surface)?;

        for (center, r) in discs {
            mask.add_disc(center, r);
        }
        for line in &polylines {
            match line.as_slice() {
                [single] => mask.add_disc(*single, radius),
                _ => {
                    for pair in line.windows(2) {
                        mask.add_segment(pair[0], pair[1], radius);
                    }
                }
            }
        }
        Some(mask)
    }
}

/// Per-pixel coverage over the part of a surface a stroke can touch
struct CoverageMask {
    origin_x: u32,
    origin_y: u32,
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl CoverageMask {
    /// Returns `None` when the bounds miss the surface entirely
    fn clipped(bounds: Rect, surface: &Surface) -> Option<Self> {
        if bounds == Rect::NOTHING || !bounds.is_finite() {
            return None;
        }
        let min_x = bounds.min.x.floor().max(0.0) as u32;
        let min_y = bounds.min.y.floor().max(0.0) as u32;
        let max_x = (bounds.max.x.ceil().max(0.0) as u32).min(surface.width());
        let max_y = (bounds.max.y.ceil().max(0.0) as u32).min(surface.height());
        if min_x >= max_x || min_y >= max_y {
            return None;
        }

        let width = max_x - min_x;
        let height = max_y - min_y;
        Some(Self {
            origin_x: min_x,
            origin_y: min_y,
            width,
            height,
            values: vec![0.0; (width * height) as usize],
        })
    }

    fn add_disc(&mut self, center: Pos2, radius: f32) {
        self.add_segment(center, center, radius);
    }

    fn add_segment(&mut self, from: Pos2, to: Pos2, radius: f32) {
        let reach = radius + 1.0;
        let lo_x = (from.x.min(to.x) - reach).floor();
        let lo_y = (from.y.min(to.y) - reach).floor();
        let hi_x = (from.x.max(to.x) + reach).ceil();
        let hi_y = (from.y.max(to.y) + reach).ceil();

        let x0 = (lo_x.max(self.origin_x as f32) as u32).max(self.origin_x);
        let y0 = (lo_y.max(self.origin_y as f32) as u32).max(self.origin_y);
        let x1 = (hi_x.max(0.0) as u32).min(self.origin_x + self.width);
        let y1 = (hi_y.max(0.0) as u32).min(self.origin_y + self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let sample = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = distance_to_line_segment(sample, from, to);
                let coverage = (radius - distance + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let index = ((y - self.origin_y) * self.width + (x - self.origin_x)) as usize;
                    let slot = &mut self.values[index];
                    *slot = slot.max(coverage);
                }
            }
        }
    }
}
