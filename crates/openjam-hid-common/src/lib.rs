//! Common HID utilities for rhythm-controller protocol implementations
//!
//! This crate provides the pieces shared across the per-platform protocol
//! crates: bounds-checked bit-field access over raw report buffers, device
//! identification, and the device I/O traits the keep-alive channel writes
//! through.

pub mod bitfield;
pub mod device_info;
pub mod format;
pub mod hat;
pub mod hid_traits;

pub use bitfield::*;
pub use device_info::*;
pub use format::*;
pub use hat::*;
pub use hid_traits::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HidCommonError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Failed to open device: {0}")]
    OpenError(String),

    #[error("Failed to read from device: {0}")]
    ReadError(String),

    #[error("Failed to write to device: {0}")]
    WriteError(String),

    #[error("Invalid report format: {0}")]
    InvalidReport(String),

    #[error("Report too short: need {needed} bytes, got {actual}")]
    ReportTooShort { needed: usize, actual: usize },

    #[error("Device disconnected")]
    Disconnected,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = HidCommonError::DeviceNotFound("test".to_string());
        assert_eq!(format!("{}", err), "Device not found: test");

        let err = HidCommonError::Disconnected;
        assert_eq!(format!("{}", err), "Device disconnected");

        let err = HidCommonError::ReportTooShort {
            needed: 20,
            actual: 14,
        };
        assert_eq!(format!("{}", err), "Report too short: need 20 bytes, got 14");
    }
}
