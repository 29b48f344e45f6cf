//! Human-readable text rendering of a [`Report`], for CLI and log
//! surfaces. Not a wire contract — callers must not parse this output,
//! though the emoji-prefixed violation lines are kept stable enough to
//! grep for in logs.

use crate::report::Report;
use crate::severity::Severity;

/// Renders a report as deterministic, human-readable text.
///
/// A header/body split: pass/fail line, severity tally, rules-checked
/// list, then one block per violation — a violation blames design-graph
/// identifiers, not a line and column.
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();

    if report.passed {
        out.push_str("PASS: no error-severity violations\n");
    } else {
        out.push_str("FAIL: error-severity violations found\n");
    }
    out.push_str(&format!(
        "{} error(s), {} warning(s), {} info(s)\n",
        report.summary.errors, report.summary.warnings, report.summary.infos
    ));

    if report.checked_rules.is_empty() {
        out.push_str("rules checked: none\n");
    } else {
        out.push_str(&format!("rules checked: {}\n", report.checked_rules.join(", ")));
    }

    for violation in &report.violations {
        out.push('\n');
        out.push_str(&format!(
            "{} {}: {}\n",
            icon(violation.severity),
            violation.code,
            violation.message
        ));
        if let Some(recommendation) = &violation.recommendation {
            out.push_str(&format!("  recommendation: {recommendation}\n"));
        }
        if !violation.affected.is_empty() {
            out.push_str(&format!("  affected: {}\n", violation.affected.join(", ")));
        }
    }

    out
}

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\u{274c}",
        Severity::Warning => "\u{26a0}\u{fe0f}",
        Severity::Info => "\u{2139}\u{fe0f}",
    }
}
