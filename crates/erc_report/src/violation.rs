//! Individual rule findings.

use crate::code::RuleCode;
use crate::severity::Severity;
use serde::Serialize;

/// A single, immutable finding emitted by a rule.
///
/// A violation blames design-graph identifiers (connection, pin, or
/// module ids), not a source text position — there is no span or label
/// here, since this engine never parses source text.
///
/// `Violation` is an output-only type — it is produced by rules and
/// serialized for callers, never deserialized back in, so it derives
/// `Serialize` only.
#[derive(Clone, Debug, Serialize)]
pub struct Violation {
    /// The finding's severity.
    pub severity: Severity,
    /// The stable rule code that produced this finding.
    pub code: RuleCode,
    /// A human-readable description of the finding.
    pub message: String,
    /// The identifiers (connection, pin, or module ids) this finding
    /// blames, in the order the rule discovered them.
    pub affected: Vec<String>,
    /// An optional suggested remediation.
    pub recommendation: Option<String>,
}

impl Violation {
    /// Creates an error-severity violation.
    pub fn error(code: RuleCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Creates a warning-severity violation.
    pub fn warning(code: RuleCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Creates an info-severity violation.
    pub fn info(code: RuleCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, message)
    }

    fn new(severity: Severity, code: RuleCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            affected: Vec::new(),
            recommendation: None,
        }
    }

    /// Adds affected identifiers, in order, to this violation.
    pub fn with_affected<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affected.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Sets the suggested remediation for this violation.
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}
