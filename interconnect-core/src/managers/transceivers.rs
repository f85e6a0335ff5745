use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use interconnect_model::{
    Bearer, Collection, CompatibleTransceiverType, ContactWindow, ResourceId, Target,
    Transceiver, assign_name,
};
use tracing::{debug, info};

use super::reject_filter;
use crate::clock::Clock;
use crate::compatibility::CompatibilityChecker;
use crate::contact_window::WindowPolicy;
use crate::error::{InterconnectError, Result};
use crate::events::EventBus;
use crate::store::{ResourceStore, Stored};

pub struct TransceiverManager {
    store: Arc<ResourceStore>,
    events: Arc<EventBus>,
    checker: CompatibilityChecker,
    windows: Arc<dyn WindowPolicy>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for TransceiverManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransceiverManager")
            .field("checker", &self.checker)
            .field("windows", &self.windows)
            .finish_non_exhaustive()
    }
}

impl TransceiverManager {
    pub fn new(
        store: Arc<ResourceStore>,
        events: Arc<EventBus>,
        checker: CompatibilityChecker,
        windows: Arc<dyn WindowPolicy>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            events,
            checker,
            windows,
            clock,
        }
    }

    /// Admit a transceiver under `transceivers/<id>` and derive its contact
    /// windows, one per known target.
    pub fn create(&self, id: &str, transceiver: Transceiver) -> Result<Transceiver> {
        let id = ResourceId::new(id)?;
        let name = assign_name(Collection::Transceivers, &id);
        let now = self.clock.now();

        self.store.transaction(|tx| {
            if tx.contains::<Transceiver>(&name) {
                return Err(InterconnectError::already_exists(format!(
                    "transceiver {name} already exists"
                )));
            }

            self.checker.check(&transceiver).inspect_err(|_| {
                debug!(transceiver = %name, "transceiver rejected: incompatible antennas");
            })?;

            let mut transceiver = transceiver;
            transceiver.name = name.clone();

            let targets: Vec<Target> = tx.list::<Target>().cloned().collect();
            let windows = self.windows.generate(&transceiver, &targets, now)?;

            let mut seen = BTreeSet::new();
            for window in &windows {
                let key = window.key();
                if tx.contains::<ContactWindow>(&key) || !seen.insert(key) {
                    return Err(InterconnectError::failed_precondition(format!(
                        "contact window for {} and {} already exists",
                        window.transceiver, window.target
                    )));
                }
            }

            let stored = tx.put(&id, transceiver)?;
            self.events.upserted(stored.clone());

            let window_count = windows.len();
            for window in windows {
                tx.insert(window.clone())?;
                self.events.upserted(window);
            }

            info!(transceiver = %stored.name, windows = window_count, "transceiver created");
            Ok(stored)
        })
    }

    pub fn get(&self, name: &str) -> Result<Transceiver> {
        self.store.get(name)
    }

    /// Replace the transceiver named by the payload. Refused while any
    /// bearer references it.
    pub fn update(&self, transceiver: Transceiver) -> Result<Transceiver> {
        self.store.transaction(|tx| {
            tx.get::<Transceiver>(&transceiver.name)?;
            self.checker.check(&transceiver)?;

            if tx
                .list::<Bearer>()
                .any(|bearer| bearer.transceiver == transceiver.name)
            {
                return Err(InterconnectError::failed_precondition(
                    "transceiver has bearer attached and cannot be updated",
                ));
            }

            tx.replace(transceiver.clone())?;
            self.events.upserted(transceiver.clone());
            info!(transceiver = %transceiver.name, "transceiver updated");
            Ok(transceiver)
        })
    }

    /// Remove a transceiver together with its contact windows. Refused while
    /// any bearer references it.
    pub fn delete(&self, name: &str) -> Result<()> {
        self.store.transaction(|tx| {
            tx.get::<Transceiver>(name)?;

            if tx.list::<Bearer>().any(|bearer| bearer.transceiver == name) {
                return Err(InterconnectError::failed_precondition(
                    "transceiver has bearer attached and cannot be deleted",
                ));
            }

            tx.delete::<Transceiver>(name)?;
            self.events.deleted(Collection::Transceivers, name);

            let pruned = tx.retain::<ContactWindow>(|window| window.transceiver != name);
            for window in &pruned {
                self.events.deleted(Collection::ContactWindows, window.name.clone());
            }

            info!(transceiver = %name, pruned_windows = pruned.len(), "transceiver deleted");
            Ok(())
        })
    }

    pub fn list(&self, filter: Option<&str>) -> Result<Vec<Transceiver>> {
        reject_filter(filter)?;
        Ok(self.store.list())
    }

    pub fn compatible_types(&self) -> Vec<CompatibleTransceiverType> {
        self.checker.compatible_types()
    }
}
