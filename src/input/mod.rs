mod classifier;
mod error;
mod gilrs_platform;
mod registry;
#[cfg(test)]
pub(crate) mod fake;

pub use classifier::*;
pub use error::*;
pub use gilrs_platform::*;
pub use registry::*;

use std::fmt;

/// Platform-assigned joystick id
pub type DeviceId = u32;

/// Number of button slots kept per device
pub const BUTTON_COUNT: usize = 32;
/// Number of axis slots kept per device
pub const AXIS_COUNT: usize = 8;
/// Axis positions are reported in -AXIS_RANGE..AXIS_RANGE
pub const AXIS_RANGE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    R,
    U,
    V,
    PovX,
    PovY,
}

impl Axis {
    /// All axes in slot order
    pub const ALL: [Axis; AXIS_COUNT] = [
        Axis::X,
        Axis::Y,
        Axis::Z,
        Axis::R,
        Axis::U,
        Axis::V,
        Axis::PovX,
        Axis::PovY,
    ];

    pub fn slot(self) -> usize {
        self as usize
    }

    #[allow(dead_code)]
    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::R => "R",
            Self::U => "U",
            Self::V => "V",
            Self::PovX => "PovX",
            Self::PovY => "PovY",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the platform knows about a device when it is first seen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceInfo {
    pub name: String,
    pub vendor_id: Option<u16>,
    pub product_id: Option<u16>,
    /// Button slots the hardware maps. Need not be contiguous.
    pub buttons: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub vendor_id: Option<u16>,
    pub product_id: Option<u16>,
    /// Buttons the hardware actually reports. The state array is always BUTTON_COUNT wide.
    pub button_count: usize,
    pub button_present: [bool; BUTTON_COUNT],
    pub button_state: [bool; BUTTON_COUNT],
    pub axis_position: [f32; AXIS_COUNT],
}

impl Device {
    /// Device with neutral state, used when the platform cannot identify it
    pub fn unidentified(id: DeviceId) -> Self {
        Self::with_info(id, DeviceInfo::default())
    }

    pub fn with_info(id: DeviceId, info: DeviceInfo) -> Self {
        let mut button_present = [false; BUTTON_COUNT];
        for &slot in &info.buttons {
            if let Some(present) = button_present.get_mut(slot) {
                *present = true;
            }
        }

        Self {
            id,
            name: info.name,
            vendor_id: info.vendor_id,
            product_id: info.product_id,
            button_count: button_present.iter().filter(|p| **p).count(),
            button_present,
            button_state: [false; BUTTON_COUNT],
            axis_position: [0.0; AXIS_COUNT],
        }
    }

    /// Re-sample every button and axis slot from the platform
    pub fn refresh(&mut self, platform: &dyn InputPlatform) {
        for (slot, pressed) in self.button_state.iter_mut().enumerate() {
            *pressed = platform.is_button_pressed(self.id, slot);
        }
        for axis in Axis::ALL {
            self.axis_position[axis.slot()] = platform.axis_position(self.id, axis);
        }
    }

    pub fn axis(&self, axis: Axis) -> f32 {
        self.axis_position[axis.slot()]
    }

    /// Pressed buttons among the slots the hardware reports
    pub fn pressed_buttons(&self) -> impl Iterator<Item = usize> + '_ {
        self.button_state
            .iter()
            .zip(self.button_present.iter())
            .enumerate()
            .filter(|(_, (pressed, present))| **pressed && **present)
            .map(|(slot, _)| slot)
    }
}

/// Validates a slot index coming from a raw notification
pub fn check_slot(device: DeviceId, kind: SlotKind, index: u32) -> Result<usize, InputError> {
    let limit = kind.limit();
    match usize::try_from(index) {
        Ok(slot) if slot < limit => Ok(slot),
        _ => Err(InputError::IndexOutOfRange {
            device,
            kind,
            index,
            limit,
        }),
    }
}

/// One discrete notification delivered by the platform for the current frame
#[derive(Debug, Clone, PartialEq)]
pub enum RawNotification {
    WindowClosed,
    ButtonPressed { device: DeviceId, button: u32 },
    ButtonReleased { device: DeviceId, button: u32 },
    AxisMoved { device: DeviceId, axis: u32, position: f32 },
    Connected { device: DeviceId },
    Disconnected { device: DeviceId },
    /// Anything the core has no meaning for
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    DeviceUpdated(DeviceId),
    ShutdownRequested,
    ConnectionChanged { device: DeviceId, connected: bool },
    Unclassified,
}

/// Capabilities the core needs from whatever backend reads the hardware
pub trait InputPlatform {
    fn identify(&self, id: DeviceId) -> Result<DeviceInfo, InputError>;

    /// Returns false for devices that are not available
    fn is_button_pressed(&self, id: DeviceId, button: usize) -> bool;

    /// Returns 0.0 for devices that are not available
    fn axis_position(&self, id: DeviceId, axis: Axis) -> f32;

    fn connected_ids(&self) -> Vec<DeviceId>;
}
