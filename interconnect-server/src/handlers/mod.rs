pub mod attachment_circuits;
pub mod bearers;
pub mod contact_windows;
pub mod events;
pub mod health;
pub mod targets;
pub mod transceivers;

use serde::Deserialize;

/// `?filter=` accepted by every list route.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub filter: Option<String>,
}
