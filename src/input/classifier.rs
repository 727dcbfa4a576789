use super::{check_slot, DeviceRegistry, InputError, InputPlatform, Outcome, RawNotification, SlotKind};

/// Map one raw notification to its outcome, applying any device change to `registry`.
///
/// Slot indices are checked before the registry is touched, so an
/// `IndexOutOfRange` error leaves every device as it was.
pub fn classify(
    notification: &RawNotification,
    registry: &mut DeviceRegistry,
    platform: &dyn InputPlatform,
) -> Result<Outcome, InputError> {
    let outcome = match *notification {
        RawNotification::WindowClosed => Outcome::ShutdownRequested,
        RawNotification::ButtonPressed { device, button } => {
            let slot = check_slot(device, SlotKind::Button, button)?;
            let index = registry.lookup_or_create(platform, device);
            registry.device_at_mut(index).button_state[slot] = true;
            Outcome::DeviceUpdated(device)
        }
        RawNotification::ButtonReleased { device, button } => {
            let slot = check_slot(device, SlotKind::Button, button)?;
            let index = registry.lookup_or_create(platform, device);
            registry.device_at_mut(index).button_state[slot] = false;
            Outcome::DeviceUpdated(device)
        }
        RawNotification::AxisMoved {
            device,
            axis,
            position,
        } => {
            let slot = check_slot(device, SlotKind::Axis, axis)?;
            let index = registry.lookup_or_create(platform, device);
            registry.device_at_mut(index).axis_position[slot] = position;
            Outcome::DeviceUpdated(device)
        }
        RawNotification::Connected { device } => Outcome::ConnectionChanged {
            device,
            connected: true,
        },
        RawNotification::Disconnected { device } => Outcome::ConnectionChanged {
            device,
            connected: false,
        },
        RawNotification::Other => Outcome::Unclassified,
    };

    Ok(outcome)
}
