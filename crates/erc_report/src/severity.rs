//! Violation severity levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a violation.
///
/// Ordered from least severe (`Info`) to most severe (`Error`), matching
/// the derived `PartialOrd`/`Ord` implementation based on declaration
/// order. Serializes to the exact lowercase wire strings the external
/// contract requires: `"info"`, `"warning"`, `"error"`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// An informational note that does not indicate a problem.
    Info,
    /// A potential issue that should be reviewed.
    Warning,
    /// A definite problem; at least one `Error`-severity violation fails
    /// the report.
    Error,
}

impl Severity {
    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}
