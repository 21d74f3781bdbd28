use std::collections::HashMap;
use std::path::Path;

use base64::Engine as _;
use egui::Vec2;
use futures::FutureExt;
use futures::future::BoxFuture;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::PainterError;
use crate::event::{EditorEvent, EventBus};
use crate::geometry::{FitSize, checked_aspect_ratio_fit};
use crate::surface::SurfaceSize;

/// Opaque handle to the source photo: a file path or a `data:` URL.
///
/// The engine only ever reads pixels through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PhotoRef(String);

impl PhotoRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for PhotoRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<&Path> for PhotoRef {
    fn from(path: &Path) -> Self {
        Self::new(path.to_string_lossy().into_owned())
    }
}

impl std::fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Data URLs can be megabytes long
        if self.0.starts_with("data:") {
            write!(f, "<data URL, {} bytes>", self.0.len())
        } else {
            f.write_str(&self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoAction {
    SetPhotoPath(String),
    RemovePhotoPath,
}

/// Application state tracking the one photo being marked up
#[derive(Debug, Clone, Default)]
pub struct PhotoSession {
    photo: PhotoRef,
}

impl PhotoSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an action. Setting an empty path leaves the current photo alone.
    pub fn dispatch(&mut self, action: PhotoAction) {
        match action {
            PhotoAction::SetPhotoPath(path) => {
                if path.trim().is_empty() {
                    log::debug!("Ignoring empty photo path");
                    return;
                }
                self.photo = PhotoRef::new(path);
            }
            PhotoAction::RemovePhotoPath => self.photo = PhotoRef::default(),
        }
    }

    pub fn set_photo(&mut self, path: impl Into<String>) {
        self.dispatch(PhotoAction::SetPhotoPath(path.into()));
    }

    pub fn remove_photo(&mut self) {
        self.dispatch(PhotoAction::RemovePhotoPath);
    }

    pub fn photo(&self) -> &PhotoRef {
        &self.photo
    }
}

/// Decodes a photo into pixels. Loading may complete later; only the flows
/// that need pixels wait for it.
pub trait PhotoLoader {
    fn load<'a>(&'a self, photo: &'a PhotoRef) -> BoxFuture<'a, Result<RgbaImage, PainterError>>;
}

/// Loads photos from the filesystem or from base64 `data:` URLs
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPhotoLoader;

impl PhotoLoader for FsPhotoLoader {
    fn load<'a>(&'a self, photo: &'a PhotoRef) -> BoxFuture<'a, Result<RgbaImage, PainterError>> {
        async move {
            if photo.is_empty() {
                return Err(PainterError::EmptyPhotoReference);
            }
            let bytes = match photo.as_str().strip_prefix("data:") {
                Some(data_url) => decode_data_url(data_url)
                    .ok_or_else(|| PainterError::UnsupportedPhotoReference(photo.to_string()))??,
                None => std::fs::read(photo.as_str())?,
            };
            decode_photo(photo, &bytes)
        }
        .boxed()
    }
}

/// `None` when the URL is not base64-encoded
fn decode_data_url(data_url: &str) -> Option<Result<Vec<u8>, PainterError>> {
    let (header, payload) = data_url.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    Some(
        base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(PainterError::from),
    )
}

fn decode_photo(photo: &PhotoRef, bytes: &[u8]) -> Result<RgbaImage, PainterError> {
    let decoded = image::load_from_memory(bytes).map_err(|source| PainterError::PhotoLoad {
        reference: photo.to_string(),
        source,
    })?;
    log::debug!("Decoded {}: {}x{}", photo, decoded.width(), decoded.height());
    Ok(decoded.to_rgba8())
}

/// Serves photos already held in memory, keyed by reference
#[derive(Debug, Clone, Default)]
pub struct MemoryPhotoLoader {
    photos: HashMap<PhotoRef, RgbaImage>,
}

impl MemoryPhotoLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, photo: PhotoRef, pixels: RgbaImage) {
        self.photos.insert(photo, pixels);
    }
}

impl PhotoLoader for MemoryPhotoLoader {
    fn load<'a>(&'a self, photo: &'a PhotoRef) -> BoxFuture<'a, Result<RgbaImage, PainterError>> {
        let result = self
            .photos
            .get(photo)
            .cloned()
            .ok_or_else(|| PainterError::UnsupportedPhotoReference(photo.to_string()));
        futures::future::ready(result).boxed()
    }
}

/// Proof that the photo has loaded and the drawing surface has its size.
///
/// [`crate::DrawingSurfaceManager::init`] takes one of these, so a painter
/// cannot be initialized before the canvas is ready.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasReady {
    /// Pixel size of the drawing surface
    pub surface_size: SurfaceSize,
    /// Fitted display size before truncation to whole pixels
    pub display_size: FitSize,
    /// Intrinsic size of the photo
    pub photo_size: SurfaceSize,
}

impl CanvasReady {
    /// A ready canvas of `size` with a photo of the same size
    pub fn with_size(size: SurfaceSize) -> Self {
        Self {
            surface_size: size,
            display_size: FitSize {
                width: size.width as f32,
                height: size.height as f32,
            },
            photo_size: size,
        }
    }
}

/// A sized canvas together with the decoded photo behind it
#[derive(Debug, Clone)]
pub struct PreparedCanvas {
    pub ready: CanvasReady,
    pub photo: RgbaImage,
}

/// Loads the photo, fits it into `container` and sizes the drawing surface to
/// match, then announces [`EditorEvent::CanvasReady`].
///
/// An empty photo reference skips everything and yields `Ok(None)`.
pub async fn prepare_canvas<L>(
    loader: &L,
    photo: &PhotoRef,
    container: Vec2,
    events: &EventBus,
) -> Result<Option<PreparedCanvas>, PainterError>
where
    L: PhotoLoader + ?Sized,
{
    if photo.is_empty() {
        log::debug!("No photo selected; canvas stays unprepared");
        return Ok(None);
    }

    let pixels = loader.load(photo).await?;
    let photo_size = SurfaceSize::new(pixels.width(), pixels.height());
    let display_size = checked_aspect_ratio_fit(
        photo_size.width as f32,
        photo_size.height as f32,
        container.x,
        container.y,
    )?;

    // Surface dimensions are whole pixels; fractional sizes truncate
    let surface_size = SurfaceSize::new(display_size.width as u32, display_size.height as u32);
    if surface_size.is_empty() {
        return Err(PainterError::InvalidDimensions {
            width: display_size.width,
            height: display_size.height,
        });
    }

    let ready = CanvasReady {
        surface_size,
        display_size,
        photo_size,
    };
    log::info!(
        "Canvas ready for {}: {}x{} surface",
        photo,
        surface_size.width,
        surface_size.height
    );
    events.emit(EditorEvent::CanvasReady { size: surface_size });
    Ok(Some(PreparedCanvas {
        ready,
        photo: pixels,
    }))
}
