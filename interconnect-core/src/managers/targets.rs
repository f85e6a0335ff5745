use std::sync::Arc;

use interconnect_model::{ContactWindow, Target};

use super::reject_filter;
use crate::error::Result;
use crate::store::ResourceStore;

/// Read-only view of the seeded target catalog.
#[derive(Debug, Clone)]
pub struct TargetDirectory {
    store: Arc<ResourceStore>,
}

impl TargetDirectory {
    pub fn new(store: Arc<ResourceStore>) -> Self {
        Self { store }
    }

    pub fn get(&self, name: &str) -> Result<Target> {
        self.store.get(name)
    }

    pub fn list(&self) -> Vec<Target> {
        self.store.list()
    }
}

/// Read-only view of derived contact windows.
#[derive(Debug, Clone)]
pub struct ContactWindowDirectory {
    store: Arc<ResourceStore>,
}

impl ContactWindowDirectory {
    pub fn new(store: Arc<ResourceStore>) -> Self {
        Self { store }
    }

    pub fn list(&self, filter: Option<&str>) -> Result<Vec<ContactWindow>> {
        reject_filter(filter)?;
        Ok(self.store.list())
    }
}
