//! ERC060: enabled, non-`other` pins with no connection at all.

use erc_model::{DesignIndex, Options, PinType};
use erc_report::{code, Violation};

use crate::Rule;

/// Flags every enabled pin, except `other`-typed pins, that is not an
/// endpoint of any connection.
///
/// Disabled pins and `other`-typed pins are never reported floating,
/// regardless of connection state.
pub struct FloatingPins;

impl Rule for FloatingPins {
    fn identifier(&self) -> &'static str {
        "floating_pins"
    }

    fn check(&self, index: &DesignIndex<'_>, _options: &Options) -> Vec<Violation> {
        let mut violations = Vec::new();

        for module in index.modules() {
            for pin in &module.pins {
                if !pin.enabled || pin.pin_type == PinType::Other {
                    continue;
                }
                if !index.is_connected(&pin.id) {
                    violations.push(
                        Violation::warning(code::ERC060, format!("pin {} is floating", pin.id))
                            .with_affected([pin.id.to_string()]),
                    );
                }
            }
        }

        violations
    }
}
