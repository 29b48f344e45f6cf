//! The immutable input snapshot handed to the ERC engine.

use crate::connection::Connection;
use crate::module::Module;
use serde::{Deserialize, Serialize};

/// The design snapshot the caller passes to the ERC engine: a sequence
/// of modules (each owning its pins) and a sequence of connections
/// between them.
///
/// A `Design` is never mutated once built — [`DesignIndex`](crate::index::DesignIndex)
/// only borrows from it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Design {
    /// The modules in the design, in caller-supplied order.
    #[serde(default)]
    pub modules: Vec<Module>,
    /// The connections in the design, in caller-supplied order.
    #[serde(default)]
    pub connections: Vec<Connection>,
}
