use interconnect_model::{AntennaType, CompatibleTransceiverType, Transceiver};

use crate::error::{InterconnectError, Result};

/// Gate deciding which transceivers the provider can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityChecker {
    required: AntennaType,
}

impl Default for CompatibilityChecker {
    fn default() -> Self {
        Self::new(AntennaType::Optical)
    }
}

impl CompatibilityChecker {
    pub const fn new(required: AntennaType) -> Self {
        Self { required }
    }

    pub const fn required(&self) -> AntennaType {
        self.required
    }

    /// Both chains must declare the required antenna type. A missing chain
    /// or antenna reads as unspecified and never matches.
    pub fn check(&self, candidate: &Transceiver) -> Result<()> {
        if self.required == AntennaType::Unspecified {
            return Err(self.incompatible());
        }
        if candidate.transmit_antenna_type() == self.required
            && candidate.receive_antenna_type() == self.required
        {
            Ok(())
        } else {
            Err(self.incompatible())
        }
    }

    pub fn compatible_types(&self) -> Vec<CompatibleTransceiverType> {
        vec![CompatibleTransceiverType {
            transceiver_filter: format!(
                "transmit_signal_chain.antenna.type = {required} AND receive_signal_chain.antenna.type = {required}",
                required = self.required
            ),
        }]
    }

    fn incompatible(&self) -> InterconnectError {
        InterconnectError::failed_precondition(
            "transceiver is not compatible, see ListCompatibleTransceiverTypes for details",
        )
    }
}
