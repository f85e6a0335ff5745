use crate::interval::TimeInterval;

/// Logical circuit layered on a bearer for a sub-interval of its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttachmentCircuit {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub interval: TimeInterval,
    pub bearer: String,
}
