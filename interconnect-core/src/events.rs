use std::sync::atomic::{AtomicU64, Ordering};

use interconnect_model::{Collection, Resource};
use serde::Serialize;
use tokio::sync::broadcast;

pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Mutation observed on the resource space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceEvent {
    /// Strictly increasing commit counter, starting at 1.
    pub sequence: u64,
    #[serde(flatten)]
    pub kind: ResourceEventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResourceEventKind {
    Upserted { resource: Resource },
    Deleted { collection: Collection, name: String },
}

impl ResourceEvent {
    pub fn name(&self) -> &str {
        match &self.kind {
            ResourceEventKind::Upserted { resource } => resource.name(),
            ResourceEventKind::Deleted { name, .. } => name,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self.kind {
            ResourceEventKind::Upserted { .. } => "upserted",
            ResourceEventKind::Deleted { .. } => "deleted",
        }
    }
}

/// In-process fan-out of resource mutations. Publishing never blocks and
/// never fails; a subscriber that falls behind sees `Lagged` on its receiver.
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<ResourceEvent>,
    sequence: AtomicU64,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ResourceEvent> {
        self.sender.subscribe()
    }

    /// Sequence number of the last published event, 0 before any.
    pub fn last_sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    pub fn upserted(&self, resource: impl Into<Resource>) {
        self.publish(ResourceEventKind::Upserted {
            resource: resource.into(),
        });
    }

    pub fn deleted(&self, collection: Collection, name: impl Into<String>) {
        self.publish(ResourceEventKind::Deleted {
            collection,
            name: name.into(),
        });
    }

    fn publish(&self, kind: ResourceEventKind) {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        // No receivers is not an error.
        let _ = self.sender.send(ResourceEvent { sequence, kind });
    }
}
