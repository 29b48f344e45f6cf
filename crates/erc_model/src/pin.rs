//! Electrical terminals on a [`Module`](crate::module::Module).

use crate::ids::PinId;
use serde::{Deserialize, Serialize};

/// The closed set of pin roles the engine understands.
///
/// Serializes to the exact wire strings spec'd for the design snapshot
/// (`"signal-input"`, `"signal-bidirectional"`, etc.).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PinType {
    /// A power supply terminal.
    Power,
    /// A ground reference terminal.
    Ground,
    /// A digital input.
    SignalInput,
    /// A digital output.
    SignalOutput,
    /// A digital input/output.
    SignalBidirectional,
    /// An analog terminal.
    Analog,
    /// Anything not covered by the other variants.
    Other,
}

/// A single electrical terminal on a module.
///
/// Owned by exactly one [`Module`](crate::module::Module); never mutated
/// by the engine after the caller constructs a [`Design`](crate::design::Design).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pin {
    /// The stable identifier of this pin.
    pub id: PinId,
    /// The human-readable pin name.
    pub name: String,
    /// The pin's electrical role.
    pub pin_type: PinType,
    /// Whether the pin participates in floating-pin analysis.
    ///
    /// Disabled pins are never reported floating; all other rules still
    /// consider them.
    pub enabled: bool,
    /// The nominal voltage this pin presents or expects, in millivolts.
    #[serde(default)]
    pub voltage_mv: Option<i64>,
    /// The absolute maximum voltage this pin can tolerate, in millivolts.
    #[serde(default)]
    pub max_voltage_mv: Option<i64>,
}
