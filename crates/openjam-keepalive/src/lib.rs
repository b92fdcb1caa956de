//! Periodic keep-alive pokes for instrument dongles.
//!
//! Some six-fret dongles silently truncate their input reports unless a
//! vendor output command arrives at a bounded interval. The scheduler here
//! is a detached tokio task per device: it writes the payload immediately,
//! then on every tick. It never blocks the input-translation path; a write
//! failure is logged and retried on the next tick, and the whole task is
//! torn down with the device.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use openjam_hid_common::HidDevice;
use thiserror::Error;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeepAliveError {
    #[error("Keep-alive interval must be greater than zero")]
    InvalidInterval,
}

/// Handle to a running keep-alive task. Dropping it stops the task.
pub struct KeepAliveHandle {
    task: tokio::task::JoinHandle<()>,
    sent: Arc<AtomicU64>,
    failed: Arc<AtomicU64>,
}

impl KeepAliveHandle {
    /// Stop the task. Also happens on drop; this form is for explicit
    /// teardown on device removal.
    pub fn shutdown(&self) {
        self.task.abort();
    }

    /// Pokes delivered so far.
    pub fn sent(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    /// Pokes that failed to deliver (each is retried on the next tick).
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }
}

impl Drop for KeepAliveHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub struct KeepAlive;

impl KeepAlive {
    /// Spawn the keep-alive task for one device.
    ///
    /// The payload is written once immediately, then on every `interval`
    /// tick. Missed ticks are delayed, not bunched: a starved runtime must
    /// not burst-deliver pokes.
    pub fn spawn(
        device: Arc<dyn HidDevice>,
        payload: Vec<u8>,
        interval: Duration,
    ) -> Result<KeepAliveHandle, KeepAliveError> {
        if interval.is_zero() {
            return Err(KeepAliveError::InvalidInterval);
        }

        let sent = Arc::new(AtomicU64::new(0));
        let failed = Arc::new(AtomicU64::new(0));
        let sent_task = Arc::clone(&sent);
        let failed_task = Arc::clone(&failed);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match device.write_report(&payload) {
                    Ok(written) => {
                        sent_task.fetch_add(1, Ordering::Relaxed);
                        debug!(written, "keep-alive poke delivered");
                    }
                    Err(err) => {
                        failed_task.fetch_add(1, Ordering::Relaxed);
                        warn!(error = %err, "keep-alive poke failed, retrying next tick");
                    }
                }
            }
        });

        Ok(KeepAliveHandle { task, sent, failed })
    }
}
