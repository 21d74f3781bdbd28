use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat};

use crate::error::PainterError;
use crate::event::{EditorEvent, EventBus};
use crate::photo::{PhotoLoader, PhotoRef};
use crate::surface::{CompositeMode, Surface};

/// Base name of every exported file
pub const EXPORT_FILE_NAME: &str = "image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Png,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
        }
    }
}

/// A flattened, encoded photo with its markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub file_name: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl ExportedImage {
    /// File name including the extension, e.g. `image.png`
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.file_name, self.format.extension())
    }

    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }

    /// Writes the encoded bytes into `dir`, returning the written path
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf, PainterError> {
        let path = dir.join(self.full_name());
        std::fs::write(&path, &self.bytes)?;
        log::info!("Exported {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// Flattens the photo and the drawing into one PNG.
///
/// The photo is stretched to the drawing's pixel size and the drawing is laid
/// over it unmodified. An empty photo reference produces nothing.
pub async fn export_composite<L>(
    loader: &L,
    photo: &PhotoRef,
    drawing: &Surface,
    events: &EventBus,
) -> Result<Option<ExportedImage>, PainterError>
where
    L: PhotoLoader + ?Sized,
{
    if photo.is_empty() {
        log::debug!("No photo selected; nothing to export");
        return Ok(None);
    }

    let pixels = loader.load(photo).await?;
    let size = drawing.size();
    let base = if pixels.dimensions() == (size.width, size.height) {
        pixels
    } else {
        imageops::resize(&pixels, size.width, size.height, FilterType::Triangle)
    };

    let mut output = Surface::from_image(base);
    output.draw_surface(drawing, CompositeMode::SourceOver);

    let format = ExportFormat::Png;
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(output.into_image())
        .write_to(&mut Cursor::new(&mut bytes), format.image_format())
        .map_err(PainterError::Encode)?;

    let exported = ExportedImage {
        file_name: EXPORT_FILE_NAME.to_owned(),
        format,
        bytes,
    };
    log::info!(
        "Composited {} at {}x{} into {} bytes",
        photo,
        size.width,
        size.height,
        exported.bytes.len()
    );
    events.emit(EditorEvent::Exported {
        file_name: exported.full_name(),
        bytes: exported.bytes.len(),
    });
    Ok(Some(exported))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::MemoryPhotoLoader;
    use crate::surface::SurfaceSize;
    use futures::executor::block_on;
    use image::{Rgba, RgbaImage};

    fn decode(exported: &ExportedImage) -> RgbaImage {
        image::load_from_memory_with_format(&exported.bytes, ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn test_photo_stretched_to_surface_size() {
        let photo = PhotoRef::new("big");
        let mut loader = MemoryPhotoLoader::new();
        loader.insert(photo.clone(), RgbaImage::from_pixel(40, 20, Rgba([0, 0, 255, 255])));
        let drawing = Surface::new(SurfaceSize::new(10, 5));

        let exported = block_on(export_composite(&loader, &photo, &drawing, &EventBus::new()))
            .unwrap()
            .unwrap();
        assert_eq!(exported.full_name(), "image.png");
        let decoded = decode(&exported);
        assert_eq!(decoded.dimensions(), (10, 5));
        assert_eq!(decoded.get_pixel(3, 3).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_drawing_laid_over_photo() {
        let photo = PhotoRef::new("p");
        let mut loader = MemoryPhotoLoader::new();
        loader.insert(photo.clone(), RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])));
        let mut pixels = RgbaImage::new(4, 4);
        pixels.put_pixel(1, 1, Rgba([255, 0, 0, 255]));
        let drawing = Surface::from_image(pixels);

        let exported = block_on(export_composite(&loader, &photo, &drawing, &EventBus::new()))
            .unwrap()
            .unwrap();
        let decoded = decode(&exported);
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(2, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_empty_reference_skips_export() {
        let drawing = Surface::new(SurfaceSize::new(4, 4));
        let result = block_on(export_composite(
            &MemoryPhotoLoader::new(),
            &PhotoRef::default(),
            &drawing,
            &EventBus::new(),
        ))
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_data_url_prefix() {
        let exported = ExportedImage {
            file_name: EXPORT_FILE_NAME.to_owned(),
            format: ExportFormat::Png,
            bytes: vec![1, 2, 3],
        };
        assert_eq!(exported.to_data_url(), "data:image/png;base64,AQID");
    }
}
