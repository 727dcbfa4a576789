use super::{Axis, DeviceId, DeviceInfo, InputError, InputPlatform, AXIS_COUNT, BUTTON_COUNT};
use std::cell::Cell;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct FakePad {
    pub info: DeviceInfo,
    pub buttons: [bool; BUTTON_COUNT],
    pub axes: [f32; AXIS_COUNT],
}

/// In-memory platform for tests. Unknown ids fail identification and sample as neutral.
#[derive(Debug, Default)]
pub struct FakePlatform {
    pub pads: HashMap<DeviceId, FakePad>,
    /// Number of button reads served so far
    pub button_reads: Cell<usize>,
}

impl FakePlatform {
    pub fn with_pad(mut self, id: DeviceId, name: &str, button_count: usize) -> Self {
        self.pads.insert(
            id,
            FakePad {
                info: DeviceInfo {
                    name: name.to_string(),
                    vendor_id: Some(0x045e),
                    product_id: Some(0x028e),
                    buttons: (0..button_count).collect(),
                },
                buttons: [false; BUTTON_COUNT],
                axes: [0.0; AXIS_COUNT],
            },
        );
        self
    }

    pub fn pad_mut(&mut self, id: DeviceId) -> &mut FakePad {
        self.pads.get_mut(&id).expect("pad registered in test")
    }
}

impl InputPlatform for FakePlatform {
    fn identify(&self, id: DeviceId) -> Result<DeviceInfo, InputError> {
        self.pads
            .get(&id)
            .map(|pad| pad.info.clone())
            .ok_or_else(|| InputError::DeviceQueryFailed {
                device: id,
                reason: "not connected".to_string(),
            })
    }

    fn is_button_pressed(&self, id: DeviceId, button: usize) -> bool {
        self.button_reads.set(self.button_reads.get() + 1);
        self.pads
            .get(&id)
            .and_then(|pad| pad.buttons.get(button).copied())
            .unwrap_or(false)
    }

    fn axis_position(&self, id: DeviceId, axis: Axis) -> f32 {
        self.pads
            .get(&id)
            .map(|pad| pad.axes[axis.slot()])
            .unwrap_or(0.0)
    }

    fn connected_ids(&self) -> Vec<DeviceId> {
        let mut ids: Vec<_> = self.pads.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
