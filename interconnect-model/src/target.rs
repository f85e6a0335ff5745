/// Coarse motion descriptor for a target. Only carried through; nothing in
/// the engine derives visibility from it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Motion {
    #[default]
    Unspecified,
    Fixed {
        latitude_deg: f64,
        longitude_deg: f64,
        height_m: f64,
    },
}

/// Remote endpoint a transceiver can link toward.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub motion: Motion,
}

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            motion: Motion::Unspecified,
        }
    }
}
