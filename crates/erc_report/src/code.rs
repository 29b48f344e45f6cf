//! Stable rule codes, part of the engine's wire contract.

use serde::Serialize;
use std::fmt;

/// A stable ASCII rule code such as `"ERC001"`.
///
/// Rule codes are fixed strings, not a category-prefix-plus-running-number
/// pair computed at display time, so this type is a thin `'static`-backed
/// wrapper around the literal code rather than anything reconstructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct RuleCode(&'static str);

impl RuleCode {
    /// Creates a rule code from its fixed string form.
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    /// Returns the code as a string slice (e.g. `"ERC001"`).
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// The fourteen rule codes the engine can emit, in the fixed order
// spec.md §6 enumerates them.

/// A nominal voltage on one endpoint exceeds the other endpoint's
/// absolute maximum voltage.
pub const ERC001: RuleCode = RuleCode::new("ERC001");
/// Voltage tolerance mismatch between two connected pins.
pub const ERC002: RuleCode = RuleCode::new("ERC002");
/// Total current draw exceeds the configured budget.
pub const ERC010: RuleCode = RuleCode::new("ERC010");
/// Total current draw is within the warning band below budget.
pub const ERC011: RuleCode = RuleCode::new("ERC011");
/// A power net carries more than one distinct nominal voltage.
pub const ERC020: RuleCode = RuleCode::new("ERC020");
/// An enabled ground pin has no ground connection.
pub const ERC030: RuleCode = RuleCode::new("ERC030");
/// An I²C bus net has no declared pull-ups.
pub const ERC040: RuleCode = RuleCode::new("ERC040");
/// A power pin is connected to a non-power pin.
pub const ERC050: RuleCode = RuleCode::new("ERC050");
/// A ground pin is connected to a non-ground pin.
pub const ERC051: RuleCode = RuleCode::new("ERC051");
/// An enabled, non-`other` pin has no connection at all.
pub const ERC060: RuleCode = RuleCode::new("ERC060");
/// A net contains both a power pin and a ground pin.
pub const ERC070: RuleCode = RuleCode::new("ERC070");
/// A motor/servo module has no power pins.
pub const ERC080: RuleCode = RuleCode::new("ERC080");
/// A motor/servo module's power pins are all unconnected.
pub const ERC081: RuleCode = RuleCode::new("ERC081");
/// A motor/servo module draws more than 500 mA.
pub const ERC082: RuleCode = RuleCode::new("ERC082");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_code_string() {
        assert_eq!(format!("{ERC001}"), "ERC001");
        assert_eq!(ERC082.as_str(), "ERC082");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&ERC060).unwrap();
        assert_eq!(json, "\"ERC060\"");
    }
}
