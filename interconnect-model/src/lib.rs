//! Resource data model shared by the interconnect engine and its transport
//! bindings.
#![allow(missing_docs)]

pub use ::chrono;

pub mod attachment_circuit;
pub mod bearer;
pub mod contact_window;
pub mod interval;
pub mod names;
pub mod resource;
pub mod target;
pub mod transceiver;

pub use attachment_circuit::AttachmentCircuit;
pub use bearer::Bearer;
pub use contact_window::{ContactWindow, FrequencyRange, SpectrumEnvelope};
pub use interval::TimeInterval;
pub use names::{Collection, ResourceId, ResourceIdError, assign_name, split_name};
pub use resource::Resource;
pub use target::{Motion, Target};
pub use transceiver::{
    Antenna, AntennaType, CompatibleTransceiverType, SignalChain, Transceiver,
    UnknownAntennaType,
};
