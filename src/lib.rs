#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod geometry;
pub mod input;
pub mod painter;
pub mod panels;
pub mod photo;
pub mod renderer;
pub mod stroke;
pub mod surface;

pub use app::MarkupApp;
pub use brush::{Brush, DrawingMode, StrokeStyle};
pub use config::{PainterConfig, RenderStrategy};
pub use error::{Outcome, PainterError};
pub use event::{EditorEvent, EventBus, EventHandler};
pub use export::{ExportFormat, ExportedImage, export_composite};
pub use geometry::{FitRect, FitSize, PathCommand, aspect_ratio_fit, contain, cover, smooth};
pub use input::{DeviceClass, InputAdapter, PointerEvent, PointerPhase};
pub use painter::{DrawingSurfaceManager, EventResponse, PainterState};
pub use photo::{
    CanvasReady, FsPhotoLoader, MemoryPhotoLoader, PhotoLoader, PhotoRef, PhotoSession,
    prepare_canvas,
};
pub use renderer::StrokeRenderer;
pub use surface::{CompositeMode, Surface, SurfaceSize};
