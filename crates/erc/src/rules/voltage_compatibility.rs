//! ERC001/ERC002: voltage compatibility between connected pins.

use erc_model::{Design, DesignIndex, Options, PinType};
use erc_report::{code, Violation};

use crate::Rule;

/// Checks nominal-vs-maximum voltage compatibility (`ERC001`) and
/// voltage tolerance mismatch (`ERC002`) across every connection.
///
/// A connection is skipped entirely when either endpoint is a ground
/// pin — ground has no meaningful nominal voltage to compare.
pub struct VoltageCompatibility;

impl Rule for VoltageCompatibility {
    fn identifier(&self) -> &'static str {
        "voltage_compatibility"
    }

    fn check(&self, index: &DesignIndex<'_>, options: &Options) -> Vec<Violation> {
        let mut violations = Vec::new();

        for conn in index.connections() {
            let (Some(from), Some(to)) = (index.pin(&conn.from), index.pin(&conn.to)) else {
                continue;
            };

            if from.pin.pin_type == PinType::Ground || to.pin.pin_type == PinType::Ground {
                continue;
            }

            if let (Some(v), Some(max)) = (from.pin.voltage_mv, to.pin.max_voltage_mv) {
                if v > max {
                    violations.push(
                        Violation::error(
                            code::ERC001,
                            format!(
                                "{} declares {v} mV, exceeding {}'s maximum of {max} mV",
                                conn.from, conn.to
                            ),
                        )
                        .with_affected([conn.id.to_string(), conn.from.to_string(), conn.to.to_string()]),
                    );
                }
            }
            if let (Some(v), Some(max)) = (to.pin.voltage_mv, from.pin.max_voltage_mv) {
                if v > max {
                    violations.push(
                        Violation::error(
                            code::ERC001,
                            format!(
                                "{} declares {v} mV, exceeding {}'s maximum of {max} mV",
                                conn.to, conn.from
                            ),
                        )
                        .with_affected([conn.id.to_string(), conn.to.to_string(), conn.from.to_string()]),
                    );
                }
            }

            if options.strict_voltage_checks {
                if let (Some(va), Some(vb)) = (from.pin.voltage_mv, to.pin.voltage_mv) {
                    let mean = (va as f64 + vb as f64) / 2.0;
                    let diff = (va as f64 - vb as f64).abs();
                    if diff > mean * options.voltage_tolerance_fraction() {
                        violations.push(
                            Violation::warning(
                                code::ERC002,
                                format!(
                                    "{} ({va} mV) and {} ({vb} mV) exceed the {}% voltage tolerance",
                                    conn.from, conn.to, options.max_voltage_tolerance
                                ),
                            )
                            .with_affected([
                                conn.id.to_string(),
                                conn.from.to_string(),
                                conn.to.to_string(),
                            ]),
                        );
                    }
                }
            }
        }

        violations
    }
}
