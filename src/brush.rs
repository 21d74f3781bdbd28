use egui::Color32;

use crate::config::PainterConfig;
use crate::surface::CompositeMode;

/// Whether strokes paint or erase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Draw,
    Erase,
}

impl DrawingMode {
    pub fn composite_mode(self) -> CompositeMode {
        match self {
            DrawingMode::Draw => CompositeMode::SourceOver,
            DrawingMode::Erase => CompositeMode::DestinationOut,
        }
    }
}

/// Everything the renderer needs to put one stroke on a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
    pub mode: DrawingMode,
}

/// The current drawing mode, draw color and the widths for each mode
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    mode: DrawingMode,
    color: Color32,
    draw_width: f32,
    eraser_width: f32,
}

impl Brush {
    pub fn new(color: Color32, draw_width: f32, eraser_width: f32) -> Self {
        Self {
            mode: DrawingMode::Draw,
            color,
            draw_width,
            eraser_width,
        }
    }

    /// Builds a brush from config, falling back to black if the configured
    /// initial color does not parse
    pub fn from_config(config: &PainterConfig) -> Self {
        let color = crate::color::parse_color(&config.initial_color).unwrap_or_else(|err| {
            log::warn!("{err}; starting with black");
            Color32::BLACK
        });
        Self::new(color, config.draw_line_width, config.eraser_line_width)
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn is_eraser(&self) -> bool {
        self.mode == DrawingMode::Erase
    }

    /// Returns true if the mode actually changed
    pub fn set_mode(&mut self, mode: DrawingMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Returns true if the color actually changed
    pub fn set_color(&mut self, color: Color32) -> bool {
        let changed = self.color != color;
        self.color = color;
        changed
    }

    /// Width for the active mode; erasing uses the wider tip
    pub fn line_width(&self) -> f32 {
        match self.mode {
            DrawingMode::Draw => self.draw_width,
            DrawingMode::Erase => self.eraser_width,
        }
    }

    pub fn style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color,
            width: self.line_width(),
            mode: self.mode,
        }
    }
}
