use crate::interval::TimeInterval;

/// Concrete time/frequency allocation between a transceiver and a target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bearer {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub target: String,
    pub transceiver: String,
    pub interval: TimeInterval,
    pub rx_center_frequency_hz: u64,
    pub rx_bandwidth_hz: u64,
    pub tx_center_frequency_hz: u64,
    pub tx_bandwidth_hz: u64,
}

impl Bearer {
    /// True when both bearers run between the same transceiver and target.
    pub fn shares_link_with(&self, other: &Bearer) -> bool {
        self.transceiver == other.transceiver && self.target == other.target
    }
}
