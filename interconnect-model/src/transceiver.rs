use std::fmt;
use std::str::FromStr;

/// Antenna capability class declared by a signal chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AntennaType {
    #[default]
    Unspecified,
    Rf,
    Optical,
}

impl AntennaType {
    pub const fn as_str(self) -> &'static str {
        match self {
            AntennaType::Unspecified => "UNSPECIFIED",
            AntennaType::Rf => "RF",
            AntennaType::Optical => "OPTICAL",
        }
    }
}

impl fmt::Display for AntennaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AntennaType {
    type Err = UnknownAntennaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UNSPECIFIED" => Ok(AntennaType::Unspecified),
            "RF" => Ok(AntennaType::Rf),
            "OPTICAL" => Ok(AntennaType::Optical),
            _ => Err(UnknownAntennaType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown antenna type {0:?}")]
pub struct UnknownAntennaType(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Antenna {
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub antenna_type: AntennaType,
}

impl Antenna {
    pub const fn new(antenna_type: AntennaType) -> Self {
        Self { antenna_type }
    }
}

/// One direction of a transceiver's signal path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalChain {
    #[cfg_attr(feature = "serde", serde(default))]
    pub antenna: Option<Antenna>,
}

impl SignalChain {
    pub fn with_antenna(antenna_type: AntennaType) -> Self {
        Self {
            antenna: Some(Antenna::new(antenna_type)),
        }
    }

    /// Declared antenna type; a missing antenna reads as unspecified.
    pub fn antenna_type(&self) -> AntennaType {
        self.antenna
            .map(|antenna| antenna.antenna_type)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transceiver {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transmit_signal_chain: Option<SignalChain>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub receive_signal_chain: Option<SignalChain>,
}

impl Transceiver {
    /// Transceiver with the same antenna type on both chains.
    pub fn symmetric(antenna_type: AntennaType) -> Self {
        Self::with_chains(antenna_type, antenna_type)
    }

    pub fn with_chains(transmit: AntennaType, receive: AntennaType) -> Self {
        Self {
            name: String::new(),
            transmit_signal_chain: Some(SignalChain::with_antenna(transmit)),
            receive_signal_chain: Some(SignalChain::with_antenna(receive)),
        }
    }

    pub fn transmit_antenna_type(&self) -> AntennaType {
        self.transmit_signal_chain
            .as_ref()
            .map(SignalChain::antenna_type)
            .unwrap_or_default()
    }

    pub fn receive_antenna_type(&self) -> AntennaType {
        self.receive_signal_chain
            .as_ref()
            .map(SignalChain::antenna_type)
            .unwrap_or_default()
    }
}

/// Filter expression describing transceivers the provider can admit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompatibleTransceiverType {
    pub transceiver_filter: String,
}
