//! This is the main file to house data collection functions.

pub mod disks;

use disks::{DeviceSample, Sampler};
use hashbrown::HashSet;

/// The output of one collection pass.
#[derive(Clone, Debug)]
pub struct Data {
    pub disks: Vec<DeviceSample>,
}

/// Wraps a [`Sampler`] and turns each pass into [`Data`] for the main thread.
pub struct DataCollector {
    sampler: Box<dyn Sampler>,
}

impl DataCollector {
    pub fn new(sampler: Box<dyn Sampler>) -> Self {
        Self { sampler }
    }

    /// Collects one round of data. A failed sample is logged and yields
    /// [`None`]; the caller should simply skip this tick.
    ///
    /// Device names must be unique within a round, so only the first device
    /// with a given name is kept.
    pub fn update_data(&mut self) -> Option<Data> {
        match self.sampler.sample() {
            Ok(mut disks) => {
                let mut seen = HashSet::with_capacity(disks.len());
                disks.retain(|disk| {
                    let first = seen.insert(disk.name.clone());
                    if !first {
                        log::debug!("skipping repeated device name '{}'", disk.name);
                    }
                    first
                });

                Some(Data { disks })
            }
            Err(err) => {
                log::warn!("failed to sample disk counters: {err:#}");
                None
            }
        }
    }
}
