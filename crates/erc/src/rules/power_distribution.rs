//! ERC020: power nets that carry more than one distinct nominal voltage.

use std::collections::{BTreeSet, HashMap};

use erc_model::{Connection, ConnectionKind, DesignIndex, Options};
use erc_report::{code, Violation};

use crate::Rule;

/// Groups `power`-kind connections by net name and flags any net whose
/// endpoint pins declare more than one distinct nominal voltage.
pub struct PowerDistribution;

impl Rule for PowerDistribution {
    fn identifier(&self) -> &'static str {
        "power_distribution"
    }

    fn check(&self, index: &DesignIndex<'_>, _options: &Options) -> Vec<Violation> {
        let mut groups: Vec<(String, Vec<&Connection>)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for conn in index.connections() {
            if conn.kind != ConnectionKind::Power {
                continue;
            }
            let Some(net_name) = &conn.net_name else {
                continue;
            };
            match positions.get(net_name) {
                Some(&pos) => groups[pos].1.push(conn),
                None => {
                    positions.insert(net_name.clone(), groups.len());
                    groups.push((net_name.clone(), vec![conn]));
                }
            }
        }

        let mut violations = Vec::new();

        for (net_name, conns) in &groups {
            let mut voltages: BTreeSet<i64> = BTreeSet::new();
            let mut affected: Vec<String> = Vec::new();

            for conn in conns {
                for pin_id in [&conn.from, &conn.to] {
                    affected.push(pin_id.to_string());
                    if let Some(entry) = index.pin(pin_id) {
                        if let Some(voltage) = entry.pin.voltage_mv {
                            voltages.insert(voltage);
                        }
                    }
                }
            }

            if voltages.len() > 1 {
                let voltages: Vec<String> = voltages.iter().map(|v| format!("{v} mV")).collect();
                violations.push(
                    Violation::error(
                        code::ERC020,
                        format!(
                            "power net \"{net_name}\" carries conflicting nominal voltages: {}",
                            voltages.join(", ")
                        ),
                    )
                    .with_affected(affected),
                );
            }
        }

        violations
    }
}
