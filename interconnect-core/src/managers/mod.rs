//! Lifecycle orchestration for each resource collection.
//!
//! Every mutating operation runs as one store transaction: validation and
//! admission first, then the writes and their events. A rejected request
//! leaves the resource space as it was.

mod attachment_circuits;
mod bearers;
mod targets;
mod transceivers;

pub use attachment_circuits::AttachmentCircuitManager;
pub use bearers::BearerManager;
pub use targets::{ContactWindowDirectory, TargetDirectory};
pub use transceivers::TransceiverManager;

use crate::error::{InterconnectError, Result};

/// List filters are accepted on the wire but not evaluated yet.
pub(crate) fn reject_filter(filter: Option<&str>) -> Result<()> {
    match filter {
        Some(filter) if !filter.trim().is_empty() => Err(InterconnectError::unimplemented(
            "list filters are not supported",
        )),
        _ => Ok(()),
    }
}
