//! HID device traits
//!
//! The translation core never touches the OS HID layer directly; the host
//! hands it something implementing these traits. The keep-alive scheduler
//! writes its poke payloads through [`HidDevice::write_report`]. The mock
//! implementations back every test in the workspace.

use crate::{HidCommonError, HidCommonResult};
use async_trait::async_trait;

pub trait HidDevice: Send + Sync {
    fn write_report(&self, data: &[u8]) -> HidCommonResult<usize>;

    fn read_report(&self, timeout_ms: u32) -> HidCommonResult<Vec<u8>>;

    fn device_info(&self) -> &crate::HidDeviceInfo;

    fn is_connected(&self) -> bool;
}

#[async_trait]
pub trait HidPort: Send + Sync {
    async fn list_devices(&self) -> HidCommonResult<Vec<crate::HidDeviceInfo>>;

    async fn open_device(&self, path: &str) -> HidCommonResult<Box<dyn HidDevice>>;
}

pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-memory device: queued reads, recorded writes, togglable link state.
    pub struct MockHidDevice {
        info: crate::HidDeviceInfo,
        read_queue: Arc<Mutex<VecDeque<Vec<u8>>>>,
        write_history: Arc<Mutex<Vec<Vec<u8>>>>,
        connected: Arc<AtomicBool>,
    }

    impl MockHidDevice {
        pub fn new(vendor_id: u16, product_id: u16, path: impl Into<String>) -> Self {
            Self {
                info: crate::HidDeviceInfo::new(vendor_id, product_id, path.into()),
                read_queue: Arc::new(Mutex::new(VecDeque::new())),
                write_history: Arc::new(Mutex::new(Vec::new())),
                connected: Arc::new(AtomicBool::new(true)),
            }
        }

        pub fn queue_read(&self, data: Vec<u8>) {
            let mut queue = self.read_queue.lock().unwrap_or_else(|e| e.into_inner());
            queue.push_back(data);
        }

        pub fn write_history(&self) -> Vec<Vec<u8>> {
            let history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.clone()
        }

        pub fn disconnect(&self) {
            self.connected.store(false, Ordering::SeqCst);
        }

        pub fn reconnect(&self) {
            self.connected.store(true, Ordering::SeqCst);
        }

        /// Cheap handle sharing the same queues, for tests that hand the
        /// device to a background task and keep inspecting it.
        pub fn clone_handle(&self) -> Self {
            Self {
                info: self.info.clone(),
                read_queue: Arc::clone(&self.read_queue),
                write_history: Arc::clone(&self.write_history),
                connected: Arc::clone(&self.connected),
            }
        }
    }

    impl HidDevice for MockHidDevice {
        fn write_report(&self, data: &[u8]) -> HidCommonResult<usize> {
            if !self.connected.load(Ordering::SeqCst) {
                return Err(HidCommonError::Disconnected);
            }
            let mut history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.push(data.to_vec());
            Ok(data.len())
        }

        fn read_report(&self, _timeout_ms: u32) -> HidCommonResult<Vec<u8>> {
            if !self.connected.load(Ordering::SeqCst) {
                return Err(HidCommonError::Disconnected);
            }
            let mut queue = self.read_queue.lock().unwrap_or_else(|e| e.into_inner());
            queue
                .pop_front()
                .ok_or_else(|| HidCommonError::ReadError("No data available".to_string()))
        }

        fn device_info(&self) -> &crate::HidDeviceInfo {
            &self.info
        }

        fn is_connected(&self) -> bool {
            self.connected.load(Ordering::SeqCst)
        }
    }

    #[derive(Default)]
    pub struct MockHidPort {
        devices: Vec<MockHidDevice>,
    }

    impl MockHidPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_device(&mut self, device: MockHidDevice) {
            self.devices.push(device);
        }

        pub fn device_count(&self) -> usize {
            self.devices.len()
        }
    }

    #[async_trait]
    impl HidPort for MockHidPort {
        async fn list_devices(&self) -> HidCommonResult<Vec<crate::HidDeviceInfo>> {
            Ok(self.devices.iter().map(|d| d.device_info().clone()).collect())
        }

        async fn open_device(&self, path: &str) -> HidCommonResult<Box<dyn HidDevice>> {
            for device in &self.devices {
                if device.info.path == path {
                    return Ok(Box::new(device.clone_handle()));
                }
            }
            Err(HidCommonError::DeviceNotFound(path.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_device_write() {
        let device = mock::MockHidDevice::new(0x12BA, 0x0200, "/dev/hidraw0");

        let written = device.write_report(&[0x02, 0x08, 0x20]);
        assert_eq!(written.ok(), Some(3));

        let history = device.write_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], vec![0x02, 0x08, 0x20]);
    }

    #[test]
    fn test_mock_device_read() {
        let device = mock::MockHidDevice::new(0x12BA, 0x0200, "/dev/hidraw0");
        device.queue_read(vec![0xAA, 0xBB]);

        assert_eq!(device.read_report(100).ok(), Some(vec![0xAA, 0xBB]));
        assert!(device.read_report(100).is_err(), "queue drained");
    }

    #[test]
    fn test_mock_device_disconnect() {
        let device = mock::MockHidDevice::new(0x12BA, 0x0200, "/dev/hidraw0");
        device.disconnect();

        assert!(!device.is_connected());
        assert!(matches!(
            device.write_report(&[0x01]),
            Err(HidCommonError::Disconnected)
        ));

        device.reconnect();
        assert!(device.write_report(&[0x01]).is_ok());
    }

    #[tokio::test]
    async fn test_mock_port_open_shares_state() -> HidCommonResult<()> {
        let mut port = mock::MockHidPort::new();
        port.add_device(mock::MockHidDevice::new(0x12BA, 0x0200, "/dev/hidraw0"));
        assert_eq!(port.device_count(), 1);

        let opened = port.open_device("/dev/hidraw0").await?;
        opened.write_report(&[0x7F])?;

        let listed = port.list_devices().await?;
        assert_eq!(listed.len(), 1);
        assert!(listed[0].matches(0x12BA, 0x0200));
        Ok(())
    }
}
