//! Disk I/O counter collection.
//!
//! Each platform provides a [`Sampler`] that reports the cumulative counters
//! for every disk the OS knows about. Turning those into rates is the job of
//! [`crate::app::rates`].

use std::time::Instant;

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        mod linux;
        pub use linux::DiskstatsSampler as PlatformSampler;
    } else {
        mod other;
        pub use other::SysinfoSampler as PlatformSampler;
    }
}

/// A single reading of a device's cumulative I/O counters.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceSample {
    pub name: String,
    pub read_bytes: u64,
    pub write_bytes: u64,
    pub read_ops: u64,
    pub write_ops: u64,
    pub timestamp: Instant,
}

impl DeviceSample {
    pub fn new(
        name: String, read_bytes: u64, write_bytes: u64, read_ops: u64, write_ops: u64,
        timestamp: Instant,
    ) -> Self {
        Self {
            name,
            read_bytes,
            write_bytes,
            read_ops,
            write_ops,
            timestamp,
        }
    }
}

/// A source of per-device disk counters.
///
/// An error means that nothing could be read at all this tick. A device that
/// simply couldn't be read should be left out of the returned list instead.
pub trait Sampler: Send {
    fn sample(&mut self) -> anyhow::Result<Vec<DeviceSample>>;
}

/// Returns the sampler for the current platform.
pub fn platform_sampler() -> Box<dyn Sampler> {
    Box::new(PlatformSampler::default())
}
