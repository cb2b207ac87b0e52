use super::rates::DeviceRate;

/// Settings for hiding idle disks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SuppressionConfig {
    pub hide_zero: bool,
    /// Combined read and write activity must be strictly above this to be
    /// shown. Must not be negative.
    pub hide_threshold_bytes: f64,
}

impl SuppressionConfig {
    /// Whether a disk with the given rate should be displayed this tick.
    #[inline]
    pub fn should_display(&self, rate: &DeviceRate) -> bool {
        !self.hide_zero || rate.combined() > self.hide_threshold_bytes
    }
}
