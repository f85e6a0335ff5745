use crate::{
    attachment_circuit::AttachmentCircuit, bearer::Bearer, contact_window::ContactWindow,
    names::Collection, target::Target, transceiver::Transceiver,
};

/// Any stored resource, tagged with its collection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "collection", content = "resource", rename_all = "snake_case")
)]
pub enum Resource {
    Transceiver(Transceiver),
    Target(Target),
    ContactWindow(ContactWindow),
    Bearer(Bearer),
    AttachmentCircuit(AttachmentCircuit),
}

impl Resource {
    pub fn name(&self) -> &str {
        match self {
            Resource::Transceiver(r) => &r.name,
            Resource::Target(r) => &r.name,
            Resource::ContactWindow(r) => &r.name,
            Resource::Bearer(r) => &r.name,
            Resource::AttachmentCircuit(r) => &r.name,
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            Resource::Transceiver(_) => Collection::Transceivers,
            Resource::Target(_) => Collection::Targets,
            Resource::ContactWindow(_) => Collection::ContactWindows,
            Resource::Bearer(_) => Collection::Bearers,
            Resource::AttachmentCircuit(_) => Collection::AttachmentCircuits,
        }
    }
}

impl From<Transceiver> for Resource {
    fn from(value: Transceiver) -> Self {
        Resource::Transceiver(value)
    }
}

impl From<Target> for Resource {
    fn from(value: Target) -> Self {
        Resource::Target(value)
    }
}

impl From<ContactWindow> for Resource {
    fn from(value: ContactWindow) -> Self {
        Resource::ContactWindow(value)
    }
}

impl From<Bearer> for Resource {
    fn from(value: Bearer) -> Self {
        Resource::Bearer(value)
    }
}

impl From<AttachmentCircuit> for Resource {
    fn from(value: AttachmentCircuit) -> Self {
        Resource::AttachmentCircuit(value)
    }
}
