//! ERC080/ERC081/ERC082: power wiring and current draw of motor/servo modules.

use erc_model::{DesignIndex, Options, PinType};
use erc_report::{code, Violation};

use crate::Rule;

/// Checks every module flagged as a motor or servo for power pins,
/// power connectivity, and excessive current draw.
///
/// `ERC081`/`ERC082` are only evaluated for a module that has at least
/// one power pin — a module with none already fails `ERC080` and the
/// remaining checks are skipped for it.
pub struct MotorServoPower;

const MAX_CURRENT_INFO_THRESHOLD_MA: i64 = 500;

impl Rule for MotorServoPower {
    fn identifier(&self) -> &'static str {
        "motor_servo_power"
    }

    fn check(&self, index: &DesignIndex<'_>, _options: &Options) -> Vec<Violation> {
        let mut violations = Vec::new();

        for module in index.modules() {
            if !module.is_motor_or_servo {
                continue;
            }

            let power_pins: Vec<_> = module
                .pins
                .iter()
                .filter(|p| p.pin_type == PinType::Power)
                .collect();

            if power_pins.is_empty() {
                violations.push(
                    Violation::warning(
                        code::ERC080,
                        format!("motor/servo module {} has no power pins", module.id),
                    )
                    .with_affected([module.id.to_string()]),
                );
                continue;
            }

            let any_connected = power_pins.iter().any(|p| index.is_connected(&p.id));
            if !any_connected {
                violations.push(
                    Violation::error(
                        code::ERC081,
                        format!(
                            "motor/servo module {}'s power pins are all unconnected",
                            module.id
                        ),
                    )
                    .with_affected(
                        power_pins.iter().map(|p| p.id.to_string()).collect::<Vec<_>>(),
                    ),
                );
            }

            if let Some(max_current) = module.max_current_ma {
                if max_current > MAX_CURRENT_INFO_THRESHOLD_MA {
                    violations.push(
                        Violation::info(
                            code::ERC082,
                            format!(
                                "motor/servo module {} draws {max_current} mA, above the {MAX_CURRENT_INFO_THRESHOLD_MA} mA notice threshold"
                            ),
                        )
                        .with_affected([module.id.to_string()]),
                    );
                }
            }
        }

        violations
    }
}
