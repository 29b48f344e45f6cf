//! The immutable data model for the electrical rule check (ERC) engine.
//!
//! This crate owns the design snapshot types a caller hands to the ERC
//! engine (modules, pins, connections, options) and the [`DesignIndex`]
//! lookup structures the rule engine builds from that snapshot. Nothing
//! here mutates a snapshot once constructed.

#![warn(missing_docs)]

pub mod connection;
pub mod design;
pub mod ids;
pub mod index;
pub mod module;
pub mod options;
pub mod pin;

pub use connection::{Connection, ConnectionKind};
pub use design::Design;
pub use ids::{ConnectionId, ModuleId, PinId};
pub use index::{DesignIndex, NetEntry, PinEntry};
pub use module::Module;
pub use options::Options;
pub use pin::{Pin, PinType};
