use image::{Rgba, RgbaImage};

/// How new pixels combine with what is already on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Paint over the destination
    #[default]
    SourceOver,
    /// Remove destination coverage where the source is opaque
    DestinationOut,
}

/// Pixel size of a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An RGBA raster with straight (non-premultiplied) alpha
#[derive(Clone, PartialEq)]
pub struct Surface {
    pixels: RgbaImage,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish()
    }
}

impl Surface {
    /// Creates a fully transparent surface
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            pixels: RgbaImage::new(size.width, size.height),
        }
    }

    pub fn from_image(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.pixels.width(), self.pixels.height())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Returns `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Wipes every pixel to fully transparent
    pub fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.pixels().all(|p| p.0[3] == 0)
    }

    /// Replaces this surface's content with `other`'s, reallocating if sizes differ
    pub fn copy_from(&mut self, other: &Surface) {
        if self.size() == other.size() {
            self.pixels.copy_from_slice(other.pixels.as_raw());
        } else {
            self.pixels = other.pixels.clone();
        }
    }

    /// Draws `source` at the origin, clipped to this surface
    pub fn draw_surface(&mut self, source: &Surface, mode: CompositeMode) {
        let width = self.width().min(source.width());
        let height = self.height().min(source.height());
        for y in 0..height {
            for x in 0..width {
                let src = source.pixels.get_pixel(x, y).0;
                if src[3] == 0 {
                    continue;
                }
                let alpha = src[3] as f32 / 255.0;
                let dst = self.pixels.get_pixel_mut(x, y);
                dst.0 = blend(dst.0, [src[0], src[1], src[2]], alpha, mode);
            }
        }
    }

    /// Blends a solid color through per-pixel coverage values.
    ///
    /// `coverage` is row-major, `mask_width` wide, anchored at `(origin_x,
    /// origin_y)`; each value scales the color's alpha.
    pub(crate) fn blend_coverage(
        &mut self,
        origin_x: u32,
        origin_y: u32,
        mask_width: u32,
        coverage: &[f32],
        color: [u8; 4],
        mode: CompositeMode,
    ) {
        if mask_width == 0 {
            return;
        }
        let color_alpha = color[3] as f32 / 255.0;
        for (index, &cov) in coverage.iter().enumerate() {
            if cov <= 0.0 {
                continue;
            }
            let x = origin_x + index as u32 % mask_width;
            let y = origin_y + index as u32 / mask_width;
            if let Some(dst) = self.pixels.get_pixel_mut_checked(x, y) {
                dst.0 = blend(dst.0, [color[0], color[1], color[2]], cov * color_alpha, mode);
            }
        }
    }

    /// Converts to an egui image for display
    pub fn to_color_image(&self) -> egui::ColorImage {
        let size = [self.pixels.width() as usize, self.pixels.height() as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, self.pixels.as_raw())
    }
}

fn blend(dst: [u8; 4], src_rgb: [u8; 3], src_alpha: f32, mode: CompositeMode) -> [u8; 4] {
    let src_alpha = src_alpha.clamp(0.0, 1.0);
    let dst_alpha = dst[3] as f32 / 255.0;

    match mode {
        CompositeMode::SourceOver => {
            let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
            if out_alpha <= 0.0 {
                return [0, 0, 0, 0];
            }
            let channel = |s: u8, d: u8| {
                let value = (s as f32 * src_alpha + d as f32 * dst_alpha * (1.0 - src_alpha))
                    / out_alpha;
                to_byte(value)
            };
            [
                channel(src_rgb[0], dst[0]),
                channel(src_rgb[1], dst[1]),
                channel(src_rgb[2], dst[2]),
                to_byte(out_alpha * 255.0),
            ]
        }
        CompositeMode::DestinationOut => {
            let out_alpha = to_byte(dst_alpha * (1.0 - src_alpha) * 255.0);
            if out_alpha == 0 {
                [0, 0, 0, 0]
            } else {
                [dst[0], dst[1], dst[2], out_alpha]
            }
        }
    }
}

fn to_byte(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
