use crate::brush::DrawingMode;

/// Where the painter is in the draw→commit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PainterState {
    #[default]
    Idle,
    /// A stroke is in progress. `last_mode` is the mode the scratch surface
    /// was last rendered with, which is what the commit has to honor.
    Stroking { last_mode: DrawingMode },
}

impl PainterState {
    pub fn is_stroking(&self) -> bool {
        matches!(self, Self::Stroking { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Stroking { .. } => "Stroking",
        }
    }
}
