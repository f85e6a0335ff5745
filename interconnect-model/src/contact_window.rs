use crate::interval::TimeInterval;

/// Inclusive numeric bounds in hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyRange {
    pub min_hz: u64,
    pub max_hz: u64,
}

impl FrequencyRange {
    pub const fn new(min_hz: u64, max_hz: u64) -> Self {
        Self { min_hz, max_hz }
    }

    /// True only when `value_hz` lies strictly between the bounds; a value
    /// equal to either bound is outside.
    pub const fn strictly_contains(&self, value_hz: u64) -> bool {
        self.min_hz < value_hz && value_hz < self.max_hz
    }

    pub const fn is_inverted(&self) -> bool {
        self.min_hz > self.max_hz
    }
}

/// Spectrum envelope for one direction of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectrumEnvelope {
    pub center_frequency: FrequencyRange,
    pub bandwidth: FrequencyRange,
}

impl SpectrumEnvelope {
    pub const fn new(center_frequency: FrequencyRange, bandwidth: FrequencyRange) -> Self {
        Self {
            center_frequency,
            bandwidth,
        }
    }

    pub const fn admits(&self, center_hz: u64, bandwidth_hz: u64) -> bool {
        self.center_frequency.strictly_contains(center_hz)
            && self.bandwidth.strictly_contains(bandwidth_hz)
    }
}

/// Derived time/frequency envelope within which bearers between a
/// transceiver and a target may be admitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactWindow {
    pub name: String,
    pub transceiver: String,
    pub target: String,
    pub interval: TimeInterval,
    pub rx: SpectrumEnvelope,
    pub tx: SpectrumEnvelope,
}

impl ContactWindow {
    pub fn serves(&self, transceiver: &str, target: &str) -> bool {
        self.transceiver == transceiver && self.target == target
    }
}
