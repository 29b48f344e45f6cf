//! ERC030: enabled ground pins with no ground-kind connection.

use std::collections::HashSet;

use erc_model::{ConnectionKind, DesignIndex, Options, PinId, PinType};
use erc_report::{code, Violation};

use crate::Rule;

/// Flags every enabled ground pin that is not an endpoint of at least
/// one `ground`-kind connection.
///
/// Note this is stricter than the general connected-pin set used by
/// [`crate::rules::FloatingPins`]: a ground pin wired only into a
/// `signal` or `bus` connection still fires here.
pub struct GroundConnections;

impl Rule for GroundConnections {
    fn identifier(&self) -> &'static str {
        "ground_connections"
    }

    fn check(&self, index: &DesignIndex<'_>, _options: &Options) -> Vec<Violation> {
        let mut ground_connected: HashSet<&PinId> = HashSet::new();
        for conn in index.connections() {
            if conn.kind == ConnectionKind::Ground {
                ground_connected.insert(&conn.from);
                ground_connected.insert(&conn.to);
            }
        }

        let mut violations = Vec::new();
        for module in index.modules() {
            for pin in &module.pins {
                if !pin.enabled || pin.pin_type != PinType::Ground {
                    continue;
                }
                if !ground_connected.contains(&pin.id) {
                    violations.push(
                        Violation::error(
                            code::ERC030,
                            format!("ground pin {} has no ground connection", pin.id),
                        )
                        .with_affected([pin.id.to_string()]),
                    );
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erc_model::{Connection, Design, Module, Pin};

    fn ground_pin(id: &str, enabled: bool) -> Pin {
        Pin {
            id: id.into(),
            name: id.to_string(),
            pin_type: PinType::Ground,
            enabled,
            voltage_mv: None,
            max_voltage_mv: None,
        }
    }

    fn module(id: &str, pins: Vec<Pin>) -> Module {
        Module {
            id: id.into(),
            name: id.to_string(),
            max_current_ma: None,
            avg_power_draw_ma: None,
            is_motor_or_servo: false,
            pins,
        }
    }

    #[test]
    fn unconnected_ground_pin_fires() {
        let design = Design {
            modules: vec![module("A", vec![ground_pin("A.GND", true)])],
            connections: Vec::new(),
        };
        let index = DesignIndex::build(&design);
        let violations = GroundConnections.check(&index, &Options::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, code::ERC030);
    }

    #[test]
    fn ground_connected_pin_is_silent() {
        let design = Design {
            modules: vec![
                module("A", vec![ground_pin("A.GND", true)]),
                module("B", vec![ground_pin("B.GND", true)]),
            ],
            connections: vec![Connection {
                id: "C1".into(),
                from: "A.GND".into(),
                to: "B.GND".into(),
                kind: ConnectionKind::Ground,
                net_name: None,
            }],
        };
        let index = DesignIndex::build(&design);
        let violations = GroundConnections.check(&index, &Options::default());
        assert!(violations.is_empty());
    }

    #[test]
    fn non_ground_kind_connection_does_not_count() {
        let design = Design {
            modules: vec![
                module("A", vec![ground_pin("A.GND", true)]),
                module("B", vec![ground_pin("B.GND", true)]),
            ],
            connections: vec![Connection {
                id: "C1".into(),
                from: "A.GND".into(),
                to: "B.GND".into(),
                kind: ConnectionKind::Signal,
                net_name: None,
            }],
        };
        let index = DesignIndex::build(&design);
        let violations = GroundConnections.check(&index, &Options::default());
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn disabled_ground_pin_is_never_reported() {
        let design = Design {
            modules: vec![module("A", vec![ground_pin("A.GND", false)])],
            connections: Vec::new(),
        };
        let index = DesignIndex::build(&design);
        let violations = GroundConnections.check(&index, &Options::default());
        assert!(violations.is_empty());
    }
}
