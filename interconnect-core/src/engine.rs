use std::fmt;
use std::sync::Arc;

use interconnect_model::{Resource, Target};
use tokio::sync::broadcast;
use tracing::info;

use crate::catalog::{StaticTargetCatalog, TargetCatalog};
use crate::clock::{Clock, SystemClock};
use crate::compatibility::CompatibilityChecker;
use crate::contact_window::{FixedWindowPolicy, WindowPolicy};
use crate::error::{InterconnectError, Result};
use crate::events::{DEFAULT_EVENT_CAPACITY, EventBus, ResourceEvent};
use crate::managers::{
    AttachmentCircuitManager, BearerManager, ContactWindowDirectory, TargetDirectory,
    TransceiverManager,
};
use crate::store::ResourceStore;

/// Consistent view of the resource space plus every mutation after it.
#[derive(Debug)]
pub struct Watch {
    pub snapshot: Vec<Resource>,
    /// Sequence of the last event folded into `snapshot`.
    pub sequence: u64,
    pub events: broadcast::Receiver<ResourceEvent>,
}

/// Entry point to the admission engine. Cheap to clone; clones share the
/// same resource space.
#[derive(Clone)]
pub struct InterconnectEngine {
    store: Arc<ResourceStore>,
    events: Arc<EventBus>,
    transceivers: Arc<TransceiverManager>,
    bearers: Arc<BearerManager>,
    attachment_circuits: Arc<AttachmentCircuitManager>,
    targets: TargetDirectory,
    contact_windows: ContactWindowDirectory,
}

impl fmt::Debug for InterconnectEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterconnectEngine")
            .field("store", &self.store)
            .field("transceivers", &self.transceivers)
            .finish_non_exhaustive()
    }
}

impl InterconnectEngine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn transceivers(&self) -> &TransceiverManager {
        &self.transceivers
    }

    pub fn bearers(&self) -> &BearerManager {
        &self.bearers
    }

    pub fn attachment_circuits(&self) -> &AttachmentCircuitManager {
        &self.attachment_circuits
    }

    pub fn targets(&self) -> &TargetDirectory {
        &self.targets
    }

    pub fn contact_windows(&self) -> &ContactWindowDirectory {
        &self.contact_windows
    }

    /// Snapshot and subscription taken under the store lock, so the stream
    /// starts exactly where the snapshot ends.
    pub fn watch(&self) -> Watch {
        self.store.read(|tx| Watch {
            snapshot: tx.snapshot(),
            sequence: self.events.last_sequence(),
            events: self.events.subscribe(),
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ResourceEvent> {
        self.events.subscribe()
    }
}

#[derive(Default)]
pub struct EngineBuilder {
    clock: Option<Arc<dyn Clock>>,
    window_policy: Option<Arc<dyn WindowPolicy>>,
    checker: Option<CompatibilityChecker>,
    catalog: Option<Arc<dyn TargetCatalog>>,
    event_capacity: Option<usize>,
}

impl fmt::Debug for EngineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineBuilder")
            .field("clock", &self.clock)
            .field("window_policy", &self.window_policy)
            .field("checker", &self.checker)
            .field("catalog", &self.catalog)
            .field("event_capacity", &self.event_capacity)
            .finish()
    }
}

impl EngineBuilder {
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn window_policy(mut self, policy: Arc<dyn WindowPolicy>) -> Self {
        self.window_policy = Some(policy);
        self
    }

    pub fn compatibility(mut self, checker: CompatibilityChecker) -> Self {
        self.checker = Some(checker);
        self
    }

    pub fn target_catalog(mut self, catalog: Arc<dyn TargetCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = Some(capacity);
        self
    }

    /// Seed the catalog targets and wire the managers together.
    pub fn build(self) -> Result<InterconnectEngine> {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let window_policy = self
            .window_policy
            .unwrap_or_else(|| Arc::new(FixedWindowPolicy::default()));
        let checker = self.checker.unwrap_or_default();
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(StaticTargetCatalog::default()));
        let events = Arc::new(EventBus::new(
            self.event_capacity.unwrap_or(DEFAULT_EVENT_CAPACITY),
        ));

        let store = Arc::new(ResourceStore::new());
        let targets = catalog.targets();
        if targets.is_empty() {
            return Err(InterconnectError::invalid_argument(
                "target catalog must contain at least one target",
            ));
        }
        seed_targets(&store, targets)?;

        let engine = InterconnectEngine {
            transceivers: Arc::new(TransceiverManager::new(
                Arc::clone(&store),
                Arc::clone(&events),
                checker,
                window_policy,
                clock,
            )),
            bearers: Arc::new(BearerManager::new(Arc::clone(&store), Arc::clone(&events))),
            attachment_circuits: Arc::new(AttachmentCircuitManager::new(
                Arc::clone(&store),
                Arc::clone(&events),
            )),
            targets: TargetDirectory::new(Arc::clone(&store)),
            contact_windows: ContactWindowDirectory::new(Arc::clone(&store)),
            store,
            events,
        };

        info!(
            required_antenna = %checker.required(),
            targets = engine.targets.list().len(),
            "interconnect engine ready"
        );
        Ok(engine)
    }
}

fn seed_targets(store: &ResourceStore, targets: Vec<Target>) -> Result<()> {
    store.transaction(|tx| {
        for target in targets {
            tx.insert(target)?;
        }
        Ok(())
    })
}
