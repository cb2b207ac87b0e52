//! Fallback disk I/O counters using sysinfo.
//!
//! sysinfo doesn't expose request counts, so op counters are always zero here.

use std::time::Instant;

use sysinfo::Disks;

use super::{DeviceSample, Sampler};

pub struct SysinfoSampler {
    disks: Disks,
}

impl Default for SysinfoSampler {
    fn default() -> Self {
        Self {
            disks: Disks::new_with_refreshed_list(),
        }
    }
}

impl Sampler for SysinfoSampler {
    fn sample(&mut self) -> anyhow::Result<Vec<DeviceSample>> {
        self.disks.refresh(true);
        let timestamp = Instant::now();

        Ok(self
            .disks
            .iter()
            .filter_map(|disk| {
                let name = disk.name().to_str()?;
                if name.is_empty() {
                    return None;
                }

                let usage = disk.usage();
                Some(DeviceSample::new(
                    name.to_string(),
                    usage.total_read_bytes,
                    usage.total_written_bytes,
                    0,
                    0,
                    timestamp,
                ))
            })
            .collect())
    }
}
