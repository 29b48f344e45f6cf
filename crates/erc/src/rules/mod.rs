//! The nine built-in rule implementations, registered in the fixed
//! order the design notes specify.

mod current_budget;
mod floating_pins;
mod ground_connections;
mod i2c_pullups;
mod motor_servo_power;
mod pin_type_mismatch;
mod power_distribution;
mod short_circuits;
mod voltage_compatibility;

pub use current_budget::CurrentBudget;
pub use floating_pins::FloatingPins;
pub use ground_connections::GroundConnections;
pub use i2c_pullups::I2cPullUps;
pub use motor_servo_power::MotorServoPower;
pub use pin_type_mismatch::PinTypeMismatch;
pub use power_distribution::PowerDistribution;
pub use short_circuits::ShortCircuits;
pub use voltage_compatibility::VoltageCompatibility;

use crate::RuleEngine;

/// Registers all nine built-in rules with the engine, in execution
/// order.
pub fn register_builtin_rules(engine: &mut RuleEngine) {
    engine.register(Box::new(VoltageCompatibility));
    engine.register(Box::new(CurrentBudget));
    engine.register(Box::new(PowerDistribution));
    engine.register(Box::new(GroundConnections));
    engine.register(Box::new(I2cPullUps));
    engine.register(Box::new(PinTypeMismatch));
    engine.register(Box::new(FloatingPins));
    engine.register(Box::new(ShortCircuits));
    engine.register(Box::new(MotorServoPower));
}
