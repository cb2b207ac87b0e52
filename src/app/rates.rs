//! Turns cumulative disk counters into per-second rates.

use hashbrown::HashMap;

use crate::collection::disks::DeviceSample;

/// What a rate is counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitMode {
    /// Bytes per second.
    #[default]
    Bytes,
    /// Requests (I/O operations) per second.
    Ops,
}

impl UnitMode {
    pub fn toggled(self) -> Self {
        match self {
            UnitMode::Bytes => UnitMode::Ops,
            UnitMode::Ops => UnitMode::Bytes,
        }
    }
}

/// A device's read and write rates over the last sampling interval.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRate {
    pub name: String,
    pub read_rate: f64,
    pub write_rate: f64,
    pub unit_mode: UnitMode,
}

impl DeviceRate {
    /// Read and write activity together, in the rate's unit.
    #[inline]
    pub fn combined(&self) -> f64 {
        self.read_rate + self.write_rate
    }
}

/// Remembers the previous sample of each device so that the next sample can be
/// turned into a rate.
#[derive(Debug, Default)]
pub struct RateEngine {
    prev: HashMap<String, DeviceSample>,
}

impl RateEngine {
    /// Computes rates for every device in `samples` that also had a sample last
    /// time, in the same order as `samples`.
    ///
    /// Devices seen for the first time produce no rate. Devices that are no
    /// longer in `samples` are forgotten.
    pub fn update(&mut self, samples: &[DeviceSample], mode: UnitMode) -> Vec<DeviceRate> {
        let rates = samples
            .iter()
            .filter_map(|curr| {
                let prev = self.prev.get(&curr.name)?;
                rate_between(prev, curr, mode)
            })
            .collect();

        self.prev = samples
            .iter()
            .map(|sample| (sample.name.clone(), sample.clone()))
            .collect();

        rates
    }

    /// Forgets all previous samples.
    pub fn reset(&mut self) {
        self.prev.clear();
    }

    /// The number of devices with a remembered sample.
    pub fn tracked(&self) -> usize {
        self.prev.len()
    }
}

/// Returns the rate between two samples of the same device, or [`None`] if no
/// time has passed between them. A counter that went backwards (e.g. a device
/// reset or wraparound) gives a rate of zero.
pub fn rate_between(prev: &DeviceSample, curr: &DeviceSample, mode: UnitMode) -> Option<DeviceRate> {
    let elapsed = curr
        .timestamp
        .saturating_duration_since(prev.timestamp)
        .as_secs_f64();

    if elapsed <= 0.0 {
        return None;
    }

    let (read_delta, write_delta) = match mode {
        UnitMode::Bytes => (
            curr.read_bytes.saturating_sub(prev.read_bytes),
            curr.write_bytes.saturating_sub(prev.write_bytes),
        ),
        UnitMode::Ops => (
            curr.read_ops.saturating_sub(prev.read_ops),
            curr.write_ops.saturating_sub(prev.write_ops),
        ),
    };

    Some(DeviceRate {
        name: curr.name.clone(),
        read_rate: read_delta as f64 / elapsed,
        write_rate: write_delta as f64 / elapsed,
        unit_mode: mode,
    })
}
