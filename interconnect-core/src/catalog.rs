use std::fmt::Debug;

use interconnect_model::{Collection, ResourceId, Target, assign_name};

use crate::error::{InterconnectError, Result};

pub const DEFAULT_TARGET_ID: &str = "mysat";

/// Supplies the targets seeded into the resource space at startup.
pub trait TargetCatalog: Send + Sync + Debug {
    fn targets(&self) -> Vec<Target>;
}

/// Catalog backed by a fixed list of targets.
#[derive(Debug, Clone)]
pub struct StaticTargetCatalog {
    targets: Vec<Target>,
}

impl StaticTargetCatalog {
    /// Build a catalog from raw target ids. Each id is validated and named
    /// `target/<id>`; an empty list or a repeated id is rejected.
    pub fn from_ids<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut targets: Vec<Target> = Vec::new();
        for raw in ids {
            let id = ResourceId::new(raw.as_ref())?;
            let name = assign_name(Collection::Targets, &id);
            if targets.iter().any(|t| t.name == name) {
                return Err(InterconnectError::invalid_argument(format!(
                    "target {name} listed twice in catalog"
                )));
            }
            targets.push(Target::new(name));
        }

        if targets.is_empty() {
            return Err(InterconnectError::invalid_argument(
                "target catalog must contain at least one target",
            ));
        }

        Ok(Self { targets })
    }

    pub fn with_targets(targets: Vec<Target>) -> Self {
        Self { targets }
    }
}

impl Default for StaticTargetCatalog {
    fn default() -> Self {
        Self {
            targets: vec![Target::new(Collection::Targets.qualify(DEFAULT_TARGET_ID))],
        }
    }
}

impl TargetCatalog for StaticTargetCatalog {
    fn targets(&self) -> Vec<Target> {
        self.targets.clone()
    }
}
