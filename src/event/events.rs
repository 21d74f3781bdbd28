use egui::Color32;
use uuid::Uuid;

use crate::brush::DrawingMode;
use crate::stroke::Point;
use crate::surface::SurfaceSize;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The photo has loaded and the drawing surface has been sized.
    /// Nothing may initialize the painter before this fires.
    CanvasReady {
        size: SurfaceSize,
    },
    SessionStarted {
        session_id: Uuid,
        size: SurfaceSize,
    },
    SessionEnded {
        session_id: Uuid,
    },
    StrokeStarted {
        at: Point,
        mode: DrawingMode,
    },
    StrokeCommitted {
        points: usize,
        mode: DrawingMode,
    },
    ModeChanged {
        mode: DrawingMode,
    },
    ColorChanged {
        color: Color32,
    },
    DrawingCleared,
    Exported {
        file_name: String,
        bytes: usize,
    },
}
