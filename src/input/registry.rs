use super::{Device, DeviceId, InputPlatform};
use std::time::Duration;

/// Every joystick seen during this run, in the order they were first seen.
///
/// Entries are never removed. Lookups hand out indices or ids rather than
/// references so callers re-resolve each frame.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
    frame_time: Duration,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn position(&self, id: DeviceId) -> Option<usize> {
        self.devices.iter().position(|d| d.id == id)
    }

    pub fn get(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn get_mut(&mut self, id: DeviceId) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.id == id)
    }

    pub fn device_at_mut(&mut self, index: usize) -> &mut Device {
        &mut self.devices[index]
    }

    /// Index of the device with `id`, creating it from the platform if this is the first time we see it
    pub fn lookup_or_create(&mut self, platform: &dyn InputPlatform, id: DeviceId) -> usize {
        if let Some(index) = self.position(id) {
            return index;
        }

        let device = match platform.identify(id) {
            Ok(info) => {
                let mut device = Device::with_info(id, info);
                device.refresh(platform);
                log::info!(
                    "Tracking joystick {}: {} ({} buttons)",
                    id,
                    device.name,
                    device.button_count
                );
                device
            }
            Err(e) => {
                log::warn!("{}; tracking joystick {} with defaults", e, id);
                Device::unidentified(id)
            }
        };

        self.devices.push(device);
        self.devices.len() - 1
    }

    /// Re-sample one tracked device. Returns false if the id is not tracked.
    pub fn refresh(&mut self, platform: &dyn InputPlatform, id: DeviceId) -> bool {
        match self.get_mut(id) {
            Some(device) => {
                device.refresh(platform);
                true
            }
            None => false,
        }
    }

    /// Polling model: track every connected device and re-sample it.
    /// A device seen for the first time is sampled once, on creation.
    pub fn poll_connected(&mut self, platform: &dyn InputPlatform) {
        for id in platform.connected_ids() {
            if !self.refresh(platform, id) {
                self.lookup_or_create(platform, id);
            }
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    pub fn set_frame_time(&mut self, elapsed: Duration) {
        self.frame_time = elapsed;
    }
}
