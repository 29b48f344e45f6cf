//! ERC050/ERC051: a power or ground pin connected to a non-matching pin.

use erc_model::{DesignIndex, Options, PinType};
use erc_report::{code, Violation};

use crate::Rule;

/// Flags connections where the `from` endpoint is `power` or `ground`
/// but the `to` endpoint is not the same type.
///
/// Only the `from → to` direction is checked — this is asymmetric by
/// design and must not be "fixed" to check both directions: a
/// `(from=ground, to=power)` connection fires `ERC051`, while the same
/// wiring encoded as `(from=power, to=ground)` fires `ERC050` instead,
/// never both.
pub struct PinTypeMismatch;

impl Rule for PinTypeMismatch {
    fn identifier(&self) -> &'static str {
        "pin_type_mismatch"
    }

    fn check(&self, index: &DesignIndex<'_>, _options: &Options) -> Vec<Violation> {
        let mut violations = Vec::new();

        for conn in index.connections() {
            let (Some(from), Some(to)) = (index.pin(&conn.from), index.pin(&conn.to)) else {
                continue;
            };

            if from.pin.pin_type == PinType::Power && to.pin.pin_type != PinType::Power {
                violations.push(
                    Violation::error(
                        code::ERC050,
                        format!(
                            "power pin {} is connected to non-power pin {}",
                            conn.from, conn.to
                        ),
                    )
                    .with_affected([conn.id.to_string(), conn.from.to_string(), conn.to.to_string()]),
                );
            }

            if from.pin.pin_type == PinType::Ground && to.pin.pin_type != PinType::Ground {
                violations.push(
                    Violation::error(
                        code::ERC051,
                        format!(
                            "ground pin {} is connected to non-ground pin {}",
                            conn.from, conn.to
                        ),
                    )
                    .with_affected([conn.id.to_string(), conn.from.to_string(), conn.to.to_string()]),
                );
            }
        }

        violations
    }
}
