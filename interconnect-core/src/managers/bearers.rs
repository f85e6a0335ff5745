use std::fmt;
use std::sync::Arc;

use interconnect_model::{
    AttachmentCircuit, Bearer, Collection, ContactWindow, ResourceId, assign_name,
};
use tracing::info;

use super::reject_filter;
use crate::admission::admit_bearer;
use crate::error::{InterconnectError, Result};
use crate::events::EventBus;
use crate::store::ResourceStore;

pub struct BearerManager {
    store: Arc<ResourceStore>,
    events: Arc<EventBus>,
}

impl fmt::Debug for BearerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerManager").finish_non_exhaustive()
    }
}

impl BearerManager {
    pub fn new(store: Arc<ResourceStore>, events: Arc<EventBus>) -> Self {
        Self { store, events }
    }

    pub fn create(&self, id: &str, bearer: Bearer) -> Result<Bearer> {
        let id = ResourceId::new(id)?;
        let name = assign_name(Collection::Bearers, &id);

        self.store.transaction(|tx| {
            if tx.contains::<Bearer>(&name) {
                return Err(InterconnectError::already_exists(format!(
                    "bearer {name} already exists"
                )));
            }

            admit_bearer(&bearer, tx.list::<ContactWindow>(), tx.list::<Bearer>())?;

            let stored = tx.put(&id, bearer)?;
            self.events.upserted(stored.clone());
            info!(
                bearer = %stored.name,
                transceiver = %stored.transceiver,
                target = %stored.target,
                "bearer created"
            );
            Ok(stored)
        })
    }

    pub fn get(&self, name: &str) -> Result<Bearer> {
        self.store.get(name)
    }

    /// Refused while any attachment circuit rides on the bearer.
    pub fn delete(&self, name: &str) -> Result<()> {
        self.store.transaction(|tx| {
            tx.get::<Bearer>(name)?;

            if tx
                .list::<AttachmentCircuit>()
                .any(|circuit| circuit.bearer == name)
            {
                return Err(InterconnectError::failed_precondition(
                    "bearer has attachment circuit attached and cannot be deleted",
                ));
            }

            tx.delete::<Bearer>(name)?;
            self.events.deleted(Collection::Bearers, name);
            info!(bearer = %name, "bearer deleted");
            Ok(())
        })
    }

    pub fn list(&self, filter: Option<&str>) -> Result<Vec<Bearer>> {
        reject_filter(filter)?;
        Ok(self.store.list())
    }
}
