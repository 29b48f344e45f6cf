//! Tunable engine configuration.

use serde::{Deserialize, Serialize};

fn default_strict_voltage_checks() -> bool {
    true
}

fn default_max_voltage_tolerance() -> f64 {
    10.0
}

fn default_require_pull_ups() -> bool {
    true
}

fn default_check_current_budget() -> bool {
    true
}

fn default_max_total_current_ma() -> i64 {
    1000
}

/// The engine's tunable configuration.
///
/// Every field has a documented default, so a caller's partial JSON or
/// TOML object (missing some or all fields) deserializes cleanly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// If `false`, `ERC002` (voltage tolerance mismatch) is never emitted.
    pub strict_voltage_checks: bool,
    /// The voltage tolerance threshold for `ERC002`, as a percentage.
    pub max_voltage_tolerance: f64,
    /// If `false`, the I²C pull-up rule (`ERC040`) is skipped entirely.
    pub require_pull_ups: bool,
    /// If `false`, the current-budget rule (`ERC010`/`ERC011`) is skipped
    /// entirely.
    pub check_current_budget: bool,
    /// The total current budget ceiling, in milliamps, for `ERC010`.
    /// 80% of this value is the `ERC011` warning threshold.
    pub max_total_current_ma: i64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict_voltage_checks: default_strict_voltage_checks(),
            max_voltage_tolerance: default_max_voltage_tolerance(),
            require_pull_ups: default_require_pull_ups(),
            check_current_budget: default_check_current_budget(),
            max_total_current_ma: default_max_total_current_ma(),
        }
    }
}

impl Options {
    /// The `ERC002` tolerance fraction (`max_voltage_tolerance / 100`).
    pub fn voltage_tolerance_fraction(&self) -> f64 {
        self.max_voltage_tolerance / 100.0
    }

    /// The `ERC011` warning threshold: 80% of `max_total_current_ma`.
    pub fn current_warning_threshold_ma(&self) -> f64 {
        self.max_total_current_ma as f64 * 0.8
    }
}
