use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::stroke::Point;

mod mouse;
mod touch;

pub use mouse::MouseAdapter;
pub use touch::TouchAdapter;

/// Where a press/drag/release is in its gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A single finger on the surface, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchContact {
    pub id: u64,
    pub page_pos: Pos2,
}

/// Raw pointer input as delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Mouse events carry coordinates already relative to the surface
    Mouse { phase: PointerPhase, offset: Pos2 },
    /// Touch events carry every contact currently on the surface
    Touch {
        phase: PointerPhase,
        contacts: Vec<TouchContact>,
    },
}

impl PointerEvent {
    pub fn phase(&self) -> PointerPhase {
        match self {
            PointerEvent::Mouse { phase, .. } | PointerEvent::Touch { phase, .. } => *phase,
        }
    }
}

/// Which family of pointer events a session listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    #[default]
    Mouse,
    Touch,
}

impl DeviceClass {
    /// Guesses the device class from a browser user agent.
    ///
    /// Meant for web hosts, which pick `PainterConfig::device_class` from the
    /// page's user agent before creating the painter. The native shell reads
    /// the class from its config file instead.
    pub fn from_user_agent(user_agent: &str) -> Self {
        const MOBILE_TOKENS: &[&str] = &[
            "Android",
            "webOS",
            "iPhone",
            "iPad",
            "iPod",
            "BlackBerry",
            "IEMobile",
            "Opera Mini",
            "Mobile",
        ];
        if MOBILE_TOKENS.iter().any(|token| user_agent.contains(token)) {
            DeviceClass::Touch
        } else {
            DeviceClass::Mouse
        }
    }
}

/// Placement of the drawing surface on the page, needed to turn page
/// coordinates into surface-local ones
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfacePlacement {
    /// Top-left corner of the surface's bounding box
    pub origin: Pos2,
    /// Current page scroll offset
    pub scroll: Vec2,
}

/// What an adapter made of a raw event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdapterOutput {
    Down(Point),
    Move(Point),
    Up,
    /// Belongs to the subscribed family but is not a drawing gesture
    Rejected,
    /// Belongs to the other event family; this session never sees it
    Unsubscribed,
}

/// Turns one family of raw events into surface-local points.
///
/// One implementation is picked per session when the manager is initialized;
/// call sites never branch on the device class again.
pub trait InputAdapter {
    fn device_class(&self) -> DeviceClass;

    fn normalize(&self, event: &PointerEvent, placement: &SurfacePlacement) -> AdapterOutput;
}

/// Creates the adapter for `device_class`
pub fn adapter_for(device_class: DeviceClass) -> Box<dyn InputAdapter> {
    match device_class {
        DeviceClass::Mouse => Box::new(MouseAdapter),
        DeviceClass::Touch => Box::new(TouchAdapter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_detection() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        let desktop = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
        assert_eq!(DeviceClass::from_user_agent(iphone), DeviceClass::Touch);
        assert_eq!(DeviceClass::from_user_agent(desktop), DeviceClass::Mouse);
    }

    #[test]
    fn test_factory_picks_matching_adapter() {
        assert_eq!(adapter_for(DeviceClass::Mouse).device_class(), DeviceClass::Mouse);
        assert_eq!(adapter_for(DeviceClass::Touch).device_class(), DeviceClass::Touch);
    }
}
