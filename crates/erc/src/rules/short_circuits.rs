//! ERC070: a single net carrying both a power pin and a ground pin.

use std::collections::HashSet;

use erc_model::{DesignIndex, Options, PinType};
use erc_report::{code, Violation};

use crate::Rule;

/// Flags any net (grouped by net name, regardless of connection kind)
/// whose endpoint pins include both a `power`-typed and a
/// `ground`-typed pin.
pub struct ShortCircuits;

impl Rule for ShortCircuits {
    fn identifier(&self) -> &'static str {
        "short_circuits"
    }

    fn check(&self, index: &DesignIndex<'_>, _options: &Options) -> Vec<Violation> {
        let mut violations = Vec::new();

        for net in index.nets() {
            let mut types: HashSet<PinType> = HashSet::new();
            let mut affected: Vec<String> = Vec::new();

            for pin_id in net.pin_ids() {
                affected.push(pin_id.to_string());
                if let Some(entry) = index.pin(pin_id) {
                    types.insert(entry.pin.pin_type);
                }
            }

            if types.contains(&PinType::Power) && types.contains(&PinType::Ground) {
                violations.push(
                    Violation::error(
                        code::ERC070,
                        format!("net \"{}\" shorts a power pin to a ground pin", net.name),
                    )
                    .with_affected(affected),
                );
            }
        }

        violations
    }
}
