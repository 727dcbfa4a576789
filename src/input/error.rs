use super::{DeviceId, AXIS_COUNT, BUTTON_COUNT};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Button,
    Axis,
}

impl SlotKind {
    pub fn limit(self) -> usize {
        match self {
            Self::Button => BUTTON_COUNT,
            Self::Axis => AXIS_COUNT,
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Button => f.write_str("button"),
            Self::Axis => f.write_str("axis"),
        }
    }
}

/// Recoverable failures of the device core. None of them should stop the frame loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{kind} {index} out of range for device {device} (limit {limit})")]
    IndexOutOfRange {
        device: DeviceId,
        kind: SlotKind,
        index: u32,
        limit: usize,
    },
    #[error("failed to query device {device}: {reason}")]
    DeviceQueryFailed { device: DeviceId, reason: String },
}
