//! Physical components in the design.

use crate::ids::ModuleId;
use crate::pin::Pin;
use serde::{Deserialize, Serialize};

/// A physical component in the design, owning an ordered list of pins.
///
/// Provided by the caller as part of a [`Design`](crate::design::Design)
/// snapshot; never mutated by the engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Module {
    /// The stable identifier of this module.
    pub id: ModuleId,
    /// The human-readable component name.
    pub name: String,
    /// The component's maximum current draw, in milliamps.
    #[serde(default)]
    pub max_current_ma: Option<i64>,
    /// The component's average power draw, in milliamps.
    ///
    /// Used as the current-budget rule's fallback contribution only when
    /// `max_current_ma` is absent.
    #[serde(default)]
    pub avg_power_draw_ma: Option<i64>,
    /// Whether this component is a motor or servo, subject to the
    /// motor/servo power rules (`ERC080`–`ERC082`).
    #[serde(default)]
    pub is_motor_or_servo: bool,
    /// This module's pins, in declaration order.
    #[serde(default)]
    pub pins: Vec<Pin>,
}
