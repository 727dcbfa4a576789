use super::{Axis, DeviceId, DeviceInfo, InputError, InputPlatform, RawNotification, AXIS_RANGE};
use gilrs::{EventType, GamepadId, Gilrs};
use std::collections::HashMap;

/// gilrs buttons in slot order. Slots follow the XInput numbering (A, B, X, Y, ...).
const BUTTON_SLOTS: [gilrs::Button; 19] = [
    gilrs::Button::South,
    gilrs::Button::East,
    gilrs::Button::West,
    gilrs::Button::North,
    gilrs::Button::LeftTrigger,
    gilrs::Button::RightTrigger,
    gilrs::Button::Select,
    gilrs::Button::Start,
    gilrs::Button::Mode,
    gilrs::Button::LeftThumb,
    gilrs::Button::RightThumb,
    gilrs::Button::LeftTrigger2,
    gilrs::Button::RightTrigger2,
    gilrs::Button::DPadUp,
    gilrs::Button::DPadDown,
    gilrs::Button::DPadLeft,
    gilrs::Button::DPadRight,
    gilrs::Button::C,
    gilrs::Button::Z,
];

fn button_slot(button: gilrs::Button) -> Option<usize> {
    BUTTON_SLOTS.iter().position(|b| *b == button)
}

fn axis_slot(axis: gilrs::Axis) -> Option<Axis> {
    match axis {
        gilrs::Axis::LeftStickX => Some(Axis::X),
        gilrs::Axis::LeftStickY => Some(Axis::Y),
        gilrs::Axis::LeftZ => Some(Axis::Z),
        gilrs::Axis::RightZ => Some(Axis::R),
        gilrs::Axis::RightStickX => Some(Axis::U),
        gilrs::Axis::RightStickY => Some(Axis::V),
        gilrs::Axis::DPadX => Some(Axis::PovX),
        gilrs::Axis::DPadY => Some(Axis::PovY),
        _ => None,
    }
}

fn gilrs_axis(axis: Axis) -> gilrs::Axis {
    match axis {
        Axis::X => gilrs::Axis::LeftStickX,
        Axis::Y => gilrs::Axis::LeftStickY,
        Axis::Z => gilrs::Axis::LeftZ,
        Axis::R => gilrs::Axis::RightZ,
        Axis::U => gilrs::Axis::RightStickX,
        Axis::V => gilrs::Axis::RightStickY,
        Axis::PovX => gilrs::Axis::DPadX,
        Axis::PovY => gilrs::Axis::DPadY,
    }
}

fn device_id(id: GamepadId) -> DeviceId {
    usize::from(id) as DeviceId
}

fn button_notification(device: DeviceId, button: gilrs::Button, pressed: bool) -> RawNotification {
    match button_slot(button) {
        Some(slot) if pressed => RawNotification::ButtonPressed {
            device,
            button: slot as u32,
        },
        Some(slot) => RawNotification::ButtonReleased {
            device,
            button: slot as u32,
        },
        None => {
            log::debug!("Joystick {}: no slot for {:?}", device, button);
            RawNotification::Other
        }
    }
}

fn axis_notification(device: DeviceId, axis: gilrs::Axis, value: f32) -> RawNotification {
    match axis_slot(axis) {
        Some(slot) => RawNotification::AxisMoved {
            device,
            axis: slot.slot() as u32,
            position: value * AXIS_RANGE,
        },
        None => {
            log::debug!("Joystick {}: no slot for {:?}", device, axis);
            RawNotification::Other
        }
    }
}

/// Translate one gilrs event for `device`
fn notification(device: DeviceId, event: &EventType) -> RawNotification {
    match *event {
        EventType::ButtonPressed(button, _) => button_notification(device, button, true),
        EventType::ButtonReleased(button, _) => button_notification(device, button, false),
        EventType::AxisChanged(axis, value, _) => axis_notification(device, axis, value),
        EventType::Connected => RawNotification::Connected { device },
        EventType::Disconnected => RawNotification::Disconnected { device },
        _ => RawNotification::Other,
    }
}

/// Joystick access backed by gilrs
pub struct GilrsPlatform {
    gilrs: Gilrs,
    /// gilrs does not let us build a GamepadId from a number, so remember every one we meet
    ids: HashMap<DeviceId, GamepadId>,
}

impl GilrsPlatform {
    pub fn new() -> anyhow::Result<Self> {
        let gilrs = Gilrs::new().map_err(|e| anyhow::anyhow!("Failed to initialize gilrs: {}", e))?;

        let mut ids = HashMap::new();
        for (id, gamepad) in gilrs.gamepads() {
            log::info!("Found joystick {}: {}", device_id(id), gamepad.name());
            ids.insert(device_id(id), id);
        }

        Ok(Self { gilrs, ids })
    }

    /// Drain every pending gilrs event, in arrival order
    pub fn poll(&mut self) -> Vec<RawNotification> {
        let mut notifications = Vec::new();

        while let Some(event) = self.gilrs.next_event() {
            let device = device_id(event.id);
            self.ids.insert(device, event.id);

            notifications.push(notification(device, &event.event));
        }

        notifications
    }

    fn gamepad(&self, id: DeviceId) -> Option<gilrs::Gamepad<'_>> {
        let gamepad_id = *self.ids.get(&id)?;
        self.gilrs.connected_gamepad(gamepad_id)
    }
}

impl InputPlatform for GilrsPlatform {
    fn identify(&self, id: DeviceId) -> Result<DeviceInfo, InputError> {
        let gamepad = self.gamepad(id).ok_or_else(|| InputError::DeviceQueryFailed {
            device: id,
            reason: "gamepad is not connected".to_string(),
        })?;

        Ok(DeviceInfo {
            name: gamepad.name().to_string(),
            vendor_id: gamepad.vendor_id(),
            product_id: gamepad.product_id(),
            buttons: BUTTON_SLOTS
                .iter()
                .enumerate()
                .filter(|(_, b)| gamepad.button_code(**b).is_some())
                .map(|(slot, _)| slot)
                .collect(),
        })
    }

    fn is_button_pressed(&self, id: DeviceId, button: usize) -> bool {
        match (self.gamepad(id), BUTTON_SLOTS.get(button)) {
            (Some(gamepad), Some(btn)) => gamepad.is_pressed(*btn),
            _ => false,
        }
    }

    fn axis_position(&self, id: DeviceId, axis: Axis) -> f32 {
        self.gamepad(id)
            .map(|gamepad| gamepad.value(gilrs_axis(axis)) * AXIS_RANGE)
            .unwrap_or(0.0)
    }

    fn connected_ids(&self) -> Vec<DeviceId> {
        self.gilrs.gamepads().map(|(id, _)| device_id(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{AXIS_COUNT, BUTTON_COUNT};

    #[test]
    fn button_slots_fit_device_state() {
        assert!(BUTTON_SLOTS.len() <= BUTTON_COUNT);
        assert_eq!(button_slot(gilrs::Button::South), Some(0));
        assert_eq!(button_slot(gilrs::Button::North), Some(3));
        assert_eq!(button_slot(gilrs::Button::Unknown), None);
    }

    #[test]
    fn axis_mapping_round_trips() {
        for axis in Axis::ALL {
            assert_eq!(axis_slot(gilrs_axis(axis)), Some(axis));
        }
        assert_eq!(axis_slot(gilrs::Axis::Unknown), None);
        assert_eq!(Axis::ALL.len(), AXIS_COUNT);
    }

    #[test]
    fn buttons_translate_to_slots() {
        assert_eq!(
            button_notification(2, gilrs::Button::South, true),
            RawNotification::ButtonPressed { device: 2, button: 0 }
        );
        assert_eq!(
            button_notification(2, gilrs::Button::DPadRight, false),
            RawNotification::ButtonReleased { device: 2, button: 16 }
        );
        assert_eq!(button_notification(2, gilrs::Button::Unknown, true), RawNotification::Other);
    }

    #[test]
    fn axes_translate_to_slots_and_scale() {
        assert_eq!(
            axis_notification(1, gilrs::Axis::LeftStickY, 0.5),
            RawNotification::AxisMoved {
                device: 1,
                axis: 1,
                position: 50.0
            }
        );
        assert_eq!(
            axis_notification(1, gilrs::Axis::DPadX, -1.0),
            RawNotification::AxisMoved {
                device: 1,
                axis: 6,
                position: -100.0
            }
        );
        assert_eq!(axis_notification(1, gilrs::Axis::Unknown, 0.3), RawNotification::Other);
    }

    #[test]
    fn connectivity_and_other_events() {
        assert_eq!(
            notification(4, &EventType::Connected),
            RawNotification::Connected { device: 4 }
        );
        assert_eq!(
            notification(4, &EventType::Disconnected),
            RawNotification::Disconnected { device: 4 }
        );
        assert_eq!(notification(4, &EventType::Dropped), RawNotification::Other);
    }
}
