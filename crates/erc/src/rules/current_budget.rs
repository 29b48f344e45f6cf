//! ERC010/ERC011: aggregate current budget across all modules.

use erc_model::{DesignIndex, Module, Options};
use erc_report::{code, Violation};

use crate::Rule;

/// Sums each module's current contribution and compares it against the
/// configured budget.
///
/// A module contributes `max(maxCurrent, 0)` if present, else
/// `max(avgPowerDraw, 0)` if present, else `0`. Only modules that
/// declare one of those two fields count as "contributing" for the
/// affected-items list.
pub struct CurrentBudget;

fn contribution(module: &Module) -> i64 {
    if let Some(max_current) = module.max_current_ma {
        max_current.max(0)
    } else if let Some(avg_power) = module.avg_power_draw_ma {
        avg_power.max(0)
    } else {
        0
    }
}

fn contributes(module: &Module) -> bool {
    module.max_current_ma.is_some() || module.avg_power_draw_ma.is_some()
}

impl Rule for CurrentBudget {
    fn identifier(&self) -> &'static str {
        "current_budget"
    }

    fn enabled(&self, options: &Options) -> bool {
        options.check_current_budget
    }

    fn check(&self, index: &DesignIndex<'_>, options: &Options) -> Vec<Violation> {
        let modules = index.modules();
        let total: i64 = modules.iter().map(contribution).sum();
        let budget = options.max_total_current_ma;
        let contributing_names: Vec<String> = modules
            .iter()
            .filter(|m| contributes(m))
            .map(|m| m.name.clone())
            .collect();

        if total > budget {
            return vec![Violation::error(
                code::ERC010,
                format!("total current draw {total} mA exceeds the budget of {budget} mA"),
            )
            .with_affected(contributing_names)];
        }

        if (total as f64) > options.current_warning_threshold_ma() {
            return vec![Violation::warning(
                code::ERC011,
                format!(
                    "total current draw {total} mA is within the warning band of the {budget} mA budget"
                ),
            )
            .with_affected(contributing_names)];
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erc_model::Design;

    fn module(name: &str, max_current_ma: Option<i64>) -> Module {
        Module {
            id: name.into(),
            name: name.to_string(),
            max_current_ma,
            avg_power_draw_ma: None,
            is_motor_or_servo: false,
            pins: Vec::new(),
        }
    }

    #[test]
    fn budget_breach_fires_single_error() {
        let design = Design {
            modules: vec![
                module("A", Some(500)),
                module("B", Some(400)),
                module("C", Some(300)),
            ],
            connections: Vec::new(),
        };
        let index = DesignIndex::build(&design);
        let violations = CurrentBudget.check(&index, &Options::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, code::ERC010);
        assert_eq!(violations[0].affected, vec!["A", "B", "C"]);
    }

    #[test]
    fn warning_band_fires_single_warning() {
        let design = Design {
            modules: vec![module("A", Some(500)), module("B", Some(350))],
            connections: Vec::new(),
        };
        let index = DesignIndex::build(&design);
        let violations = CurrentBudget.check(&index, &Options::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, code::ERC011);
    }

    #[test]
    fn under_budget_is_silent() {
        let design = Design {
            modules: vec![module("A", Some(100)), module("B", Some(100))],
            connections: Vec::new(),
        };
        let index = DesignIndex::build(&design);
        let violations = CurrentBudget.check(&index, &Options::default());
        assert!(violations.is_empty());
    }

    #[test]
    fn rule_is_gated_on_check_current_budget() {
        let mut options = Options::default();
        options.check_current_budget = false;
        assert!(!CurrentBudget.enabled(&options));
        options.check_current_budget = true;
        assert!(CurrentBudget.enabled(&options));
    }

    #[test]
    fn avg_power_draw_is_fallback_contribution() {
        let mut module_a = module("A", None);
        module_a.avg_power_draw_ma = Some(1200);
        let design = Design {
            modules: vec![module_a],
            connections: Vec::new(),
        };
        let index = DesignIndex::build(&design);
        let violations = CurrentBudget.check(&index, &Options::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, code::ERC010);
    }
}
