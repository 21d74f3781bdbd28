use super::{AdapterOutput, DeviceClass, InputAdapter, PointerEvent, PointerPhase, SurfacePlacement};

/// Adapter for mouse-class devices; offsets arrive surface-local already
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseAdapter;

impl InputAdapter for MouseAdapter {
    fn device_class(&self) -> DeviceClass {
        DeviceClass::Mouse
    }

    fn normalize(&self, event: &PointerEvent, _placement: &SurfacePlacement) -> AdapterOutput {
        match *event {
            PointerEvent::Mouse { phase, offset } => match phase {
                PointerPhase::Down => AdapterOutput::Down(offset),
                PointerPhase::Move => AdapterOutput::Move(offset),
                PointerPhase::Up => AdapterOutput::Up,
            },
            PointerEvent::Touch { .. } => AdapterOutput::Unsubscribed,
        }
    }
}
