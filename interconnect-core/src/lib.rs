//! Admission-control engine for optical interconnects.
//!
//! The engine keeps an in-memory resource space of transceivers, targets,
//! contact windows, bearers and attachment circuits. Creating a transceiver
//! derives its contact windows; a bearer is admitted only inside a covering
//! window and clear of conflicting bearers; an attachment circuit is admitted
//! only inside its bearer. Deletes and updates are refused while dependents
//! exist.
//!
//! ```
//! use interconnect_core::InterconnectEngine;
//! use interconnect_model::{AntennaType, Transceiver};
//!
//! let engine = InterconnectEngine::builder().build()?;
//! let created = engine
//!     .transceivers()
//!     .create("t1", Transceiver::symmetric(AntennaType::Optical))?;
//! assert_eq!(created.name, "transceivers/t1");
//! # Ok::<(), interconnect_core::InterconnectError>(())
//! ```

pub mod admission;
pub mod catalog;
pub mod clock;
pub mod compatibility;
pub mod contact_window;
pub mod engine;
pub mod error;
pub mod events;
pub mod managers;
pub mod store;

pub use catalog::{StaticTargetCatalog, TargetCatalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use compatibility::CompatibilityChecker;
pub use contact_window::{FixedWindowPolicy, WindowPolicy, WindowSettings};
pub use engine::{EngineBuilder, InterconnectEngine, Watch};
pub use error::{ErrorCode, InterconnectError, Result};
pub use events::{EventBus, ResourceEvent, ResourceEventKind};
pub use store::{ResourceStore, Stored, Transaction};
