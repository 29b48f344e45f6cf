//! The assembled report returned from a single ERC run.

use crate::severity::Severity;
use crate::violation::Violation;
use serde::Serialize;

/// Violation counts by severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of error-severity violations.
    pub errors: usize,
    /// Number of warning-severity violations.
    pub warnings: usize,
    /// Number of info-severity violations.
    pub infos: usize,
}

/// The result of a single ERC run.
///
/// `passed` is `true` iff `summary.errors == 0` — this is an invariant
/// of [`assemble_report`], not an independently settable field.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    /// `true` iff no error-severity violation was found.
    pub passed: bool,
    /// Every violation, in the order rules were executed and, within a
    /// rule, in the order that rule emitted them.
    pub violations: Vec<Violation>,
    /// Violation counts by severity.
    pub summary: Summary,
    /// The names of the rules that actually ran, in execution order —
    /// a rule whose gating option disabled it entirely is absent.
    pub checked_rules: Vec<String>,
}

/// Assembles a [`Report`] from the rule engine's collected violations.
///
/// Pure: counts severities, derives `passed`, and records which rules
/// ran. Total ordering of `violations` is whatever order the caller
/// passed them in (the rule engine preserves rule-declaration order and,
/// within a rule, the rule's own emission order).
pub fn assemble_report(violations: Vec<Violation>, checked_rules: Vec<String>) -> Report {
    let mut summary = Summary::default();
    for violation in &violations {
        match violation.severity {
            Severity::Error => summary.errors += 1,
            Severity::Warning => summary.warnings += 1,
            Severity::Info => summary.infos += 1,
        }
    }
    let passed = summary.errors == 0;
    Report {
        passed,
        violations,
        summary,
        checked_rules,
    }
}
