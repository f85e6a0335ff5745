use std::fmt;
use std::sync::Arc;

use interconnect_model::{AttachmentCircuit, Bearer, Collection, ResourceId, assign_name};
use tracing::info;

use super::reject_filter;
use crate::admission::admit_attachment_circuit;
use crate::error::{InterconnectError, Result};
use crate::events::EventBus;
use crate::store::ResourceStore;

pub struct AttachmentCircuitManager {
    store: Arc<ResourceStore>,
    events: Arc<EventBus>,
}

impl fmt::Debug for AttachmentCircuitManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachmentCircuitManager")
            .finish_non_exhaustive()
    }
}

impl AttachmentCircuitManager {
    pub fn new(store: Arc<ResourceStore>, events: Arc<EventBus>) -> Self {
        Self { store, events }
    }

    pub fn create(&self, id: &str, circuit: AttachmentCircuit) -> Result<AttachmentCircuit> {
        let id = ResourceId::new(id)?;
        let name = assign_name(Collection::AttachmentCircuits, &id);

        self.store.transaction(|tx| {
            if tx.contains::<AttachmentCircuit>(&name) {
                return Err(InterconnectError::already_exists(format!(
                    "attachment circuit {name} already exists"
                )));
            }

            admit_attachment_circuit(&circuit, tx.list::<Bearer>())?;

            let stored = tx.put(&id, circuit)?;
            self.events.upserted(stored.clone());
            info!(circuit = %stored.name, bearer = %stored.bearer, "attachment circuit created");
            Ok(stored)
        })
    }

    pub fn get(&self, name: &str) -> Result<AttachmentCircuit> {
        self.store.get(name)
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        self.store.transaction(|tx| {
            tx.delete::<AttachmentCircuit>(name)?;
            self.events.deleted(Collection::AttachmentCircuits, name);
            info!(circuit = %name, "attachment circuit deleted");
            Ok(())
        })
    }

    pub fn list(&self, filter: Option<&str>) -> Result<Vec<AttachmentCircuit>> {
        reject_filter(filter)?;
        Ok(self.store.list())
    }
}
