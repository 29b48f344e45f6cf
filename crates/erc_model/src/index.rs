//! Lookup structures built from a [`Design`] snapshot in a single pass.
//!
//! [`DesignIndex::build`] never validates the snapshot: a connection
//! whose endpoint id is absent from the pin index is simply left
//! unresolvable by [`DesignIndex::pin`] — callers (the rule
//! implementations) are responsible for skipping such connections, per
//! the malformed-connection recovery behavior the engine preserves.

use crate::connection::Connection;
use crate::design::Design;
use crate::ids::PinId;
use crate::module::Module;
use crate::pin::Pin;
use std::collections::{HashMap, HashSet};

/// A pin together with the module that owns it.
pub struct PinEntry<'a> {
    /// The pin itself.
    pub pin: &'a Pin,
    /// The module that owns this pin.
    pub module: &'a Module,
}

/// All connections sharing a single net name, in first-occurrence order.
pub struct NetEntry<'a> {
    /// The shared net name.
    pub name: String,
    /// The connections naming this net, in the order they appear in the
    /// design's connection list.
    pub connections: Vec<&'a Connection>,
}

impl<'a> NetEntry<'a> {
    /// Returns the endpoint pin ids of every connection in this net, in
    /// iteration order, with duplicates retained (a pin that appears as
    /// an endpoint of two connections in the same net is listed twice).
    pub fn pin_ids(&self) -> Vec<&'a PinId> {
        let mut ids = Vec::with_capacity(self.connections.len() * 2);
        for conn in &self.connections {
            ids.push(&conn.from);
            ids.push(&conn.to);
        }
        ids
    }
}

/// Lookup structures derived from a [`Design`] snapshot: pin-by-id,
/// nets grouped by net name, and the set of pin ids that are endpoints
/// of at least one connection.
///
/// Construction is a single `O(modules · pins + connections)` pass, as
/// required by the determinism and performance properties of the
/// engine. Every field borrows from the `Design` it was built from.
pub struct DesignIndex<'a> {
    design: &'a Design,
    pins: HashMap<PinId, PinEntry<'a>>,
    nets: Vec<NetEntry<'a>>,
    net_positions: HashMap<String, usize>,
    connected_pins: HashSet<PinId>,
}

impl<'a> DesignIndex<'a> {
    /// Builds the index from a design snapshot.
    pub fn build(design: &'a Design) -> Self {
        let mut pins = HashMap::new();
        for module in &design.modules {
            for pin in &module.pins {
                pins.insert(pin.id.clone(), PinEntry { pin, module });
            }
        }

        let mut nets: Vec<NetEntry<'a>> = Vec::new();
        let mut net_positions: HashMap<String, usize> = HashMap::new();
        let mut connected_pins = HashSet::new();

        for conn in &design.connections {
            connected_pins.insert(conn.from.clone());
            connected_pins.insert(conn.to.clone());

            if let Some(net_name) = &conn.net_name {
                match net_positions.get(net_name) {
                    Some(&pos) => nets[pos].connections.push(conn),
                    None => {
                        net_positions.insert(net_name.clone(), nets.len());
                        nets.push(NetEntry {
                            name: net_name.clone(),
                            connections: vec![conn],
                        });
                    }
                }
            }
        }

        Self {
            design,
            pins,
            nets,
            net_positions,
            connected_pins,
        }
    }

    /// The modules in the design, in their original order.
    pub fn modules(&self) -> &'a [Module] {
        &self.design.modules
    }

    /// The connections in the design, in their original order.
    pub fn connections(&self) -> &'a [Connection] {
        &self.design.connections
    }

    /// Looks up a pin (and its owning module) by id.
    ///
    /// Returns `None` for an id that does not resolve in the index —
    /// the malformed-connection case a rule must recover from locally.
    pub fn pin(&self, id: &PinId) -> Option<&PinEntry<'a>> {
        self.pins.get(id)
    }

    /// All nets, in first-occurrence order of their net name across the
    /// design's connection list.
    pub fn nets(&self) -> &[NetEntry<'a>] {
        &self.nets
    }

    /// Looks up the net entry for a given net name, if any connection
    /// names it.
    pub fn net(&self, name: &str) -> Option<&NetEntry<'a>> {
        self.net_positions.get(name).map(|&pos| &self.nets[pos])
    }

    /// Returns `true` if the pin id is an endpoint of at least one
    /// connection.
    pub fn is_connected(&self, id: &PinId) -> bool {
        self.connected_pins.contains(id)
    }
}
