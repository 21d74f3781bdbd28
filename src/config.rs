use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PainterError;
use crate::input::DeviceClass;

/// How the in-progress stroke is kept apart from committed pixels.
///
/// Both strategies produce the same visible result; they differ only in what
/// the scratch surface holds while a stroke is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStrategy {
    /// Scratch holds a copy of the persisted surface plus the live stroke
    #[default]
    Snapshot,
    /// Scratch holds only the live stroke and is layered over the persisted surface
    Overlay,
}

/// Tunables for a drawing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainterConfig {
    pub draw_line_width: f32,
    pub eraser_line_width: f32,
    pub initial_color: String,
    pub palette: Vec<String>,
    pub strategy: RenderStrategy,
    pub device_class: DeviceClass,
    /// Longest straight segment used when flattening curves, in pixels
    pub curve_tolerance: f32,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            draw_line_width: 5.0,
            eraser_line_width: 10.0,
            initial_color: "#e83323".to_owned(),
            palette: ["black", "white", "#2e7fce", "#e83323", "#4a902c", "#f9e553"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            strategy: RenderStrategy::default(),
            device_class: DeviceClass::default(),
            curve_tolerance: 2.0,
        }
    }
}

impl PainterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PainterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file; missing keys fall back to defaults
    pub fn load(path: &Path) -> Result<Self, PainterError> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&data)?;
        log::info!("Loaded painter config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_markup_tool() {
        let config = PainterConfig::default();
        assert_eq!(config.draw_line_width, 5.0);
        assert_eq!(config.eraser_line_width, 10.0);
        assert_eq!(config.initial_color, "#e83323");
        assert_eq!(config.palette.len(), 6);
        assert_eq!(config.strategy, RenderStrategy::Snapshot);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            PainterConfig::from_json_str(r#"{ "strategy": "overlay", "device_class": "touch" }"#)
                .unwrap();
        assert_eq!(config.strategy, RenderStrategy::Overlay);
        assert_eq!(config.device_class, DeviceClass::Touch);
        assert_eq!(config.draw_line_width, 5.0);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = PainterConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, PainterError::Config(_)));
    }
}
