//! ERC040: I²C bus nets without declared pull-ups.

use erc_model::{DesignIndex, Options};
use erc_report::{code, Violation};

use crate::Rule;

/// Flags the design, once, if any net name looks like an I²C bus.
///
/// Matching is a case-sensitive substring check against `I2C`, `SDA`,
/// and `SCL` — a known source quirk: `"i2c_sda"` will not match. This
/// is preserved deliberately rather than normalized.
pub struct I2cPullUps;

fn looks_like_i2c(net_name: &str) -> bool {
    net_name.contains("I2C") || net_name.contains("SDA") || net_name.contains("SCL")
}

impl Rule for I2cPullUps {
    fn identifier(&self) -> &'static str {
        "i2c_pullups"
    }

    fn enabled(&self, options: &Options) -> bool {
        options.require_pull_ups
    }

    fn check(&self, index: &DesignIndex<'_>, _options: &Options) -> Vec<Violation> {
        let matching_nets: Vec<_> = index
            .nets()
            .iter()
            .filter(|net| looks_like_i2c(&net.name))
            .collect();

        if matching_nets.is_empty() {
            return Vec::new();
        }

        let mut affected = Vec::new();
        for net in matching_nets {
            for pin_id in net.pin_ids() {
                affected.push(pin_id.to_string());
            }
        }

        vec![Violation::info(
            code::ERC040,
            "I2C bus net(s) detected; verify pull-up resistors are present",
        )
        .with_affected(affected)
        .with_recommendation("add pull-up resistors on the SDA/SCL lines")]
    }
}
