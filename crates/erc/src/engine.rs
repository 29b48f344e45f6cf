//! Rule registry and sequencer.
//!
//! A fixed-order list of boxed rule trait objects, run in sequence.
//! There is no deny/allow severity promotion here: each rule either
//! runs in full or is skipped entirely based on its own gating option.

use erc_model::{Design, DesignIndex, Options};
use erc_report::{assemble_report, Report, Violation};

use crate::rules::register_builtin_rules;

/// A single electrical rule check.
///
/// A pure function from (index, options) to a freshly allocated list of
/// violations — rules never mutate the index and never consult global
/// state.
pub trait Rule {
    /// The rule's stable identifier, recorded in [`Report::checked_rules`]
    /// when the rule runs.
    fn identifier(&self) -> &'static str;

    /// Whether this rule should run at all, given the current options.
    /// Defaults to always-enabled; gated rules override this.
    fn enabled(&self, _options: &Options) -> bool {
        true
    }

    /// Runs the check and returns every violation found, in the order
    /// the rule discovered them.
    fn check(&self, index: &DesignIndex<'_>, options: &Options) -> Vec<Violation>;
}

/// Holds the rule sequence in a fixed, deterministic order and runs
/// them against a design snapshot.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Creates an engine with all nine built-in rules registered, in
    /// the fixed order the design notes specify.
    pub fn new() -> Self {
        let mut engine = Self { rules: Vec::new() };
        register_builtin_rules(&mut engine);
        engine
    }

    /// Registers an additional rule, appended after whatever is
    /// already registered.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs every enabled rule against `design` and assembles a report.
    ///
    /// Every enabled rule always runs to completion; no rule's findings
    /// short-circuit the others.
    pub fn run(&self, design: &Design, options: &Options) -> Report {
        let index = DesignIndex::build(design);
        let mut violations = Vec::new();
        let mut checked_rules = Vec::new();

        for rule in &self.rules {
            if !rule.enabled(options) {
                continue;
            }
            violations.extend(rule.check(&index, options));
            checked_rules.push(rule.identifier().to_string());
        }

        assemble_report(violations, checked_rules)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the full rule set against a design snapshot.
///
/// Equivalent to `RuleEngine::new().run(design, options)`, provided as
/// the one-call convenience entry point the design notes call `runERC`.
pub fn run_erc(design: &Design, options: &Options) -> Report {
    RuleEngine::new().run(design, options)
}
