use super::{AdapterOutput, DeviceClass, InputAdapter, PointerEvent, PointerPhase, SurfacePlacement};
use crate::stroke::Point;

/// Adapter for touch-class devices.
///
/// Only single-finger gestures draw; anything with more contacts is a pinch or
/// pan and is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchAdapter;

impl TouchAdapter {
    fn to_surface(page_pos: Point, placement: &SurfacePlacement) -> Point {
        Point::new(
            page_pos.x - placement.origin.x - placement.scroll.x,
            page_pos.y - placement.origin.y - placement.scroll.y,
        )
    }
}

impl InputAdapter for TouchAdapter {
    fn device_class(&self) -> DeviceClass {
        DeviceClass::Touch
    }

    fn normalize(&self, event: &PointerEvent, placement: &SurfacePlacement) -> AdapterOutput {
        let PointerEvent::Touch { phase, contacts } = event else {
            return AdapterOutput::Unsubscribed;
        };

        match phase {
            // A lifted finger leaves no contact behind to report
            PointerPhase::Up => AdapterOutput::Up,
            PointerPhase::Down | PointerPhase::Move => match contacts.as_slice() {
                [contact] => {
                    let point = Self::to_surface(contact.page_pos, placement);
                    if *phase == PointerPhase::Down {
                        AdapterOutput::Down(point)
                    } else {
                        AdapterOutput::Move(point)
                    }
                }
                _ => AdapterOutput::Rejected,
            },
        }
    }
}
