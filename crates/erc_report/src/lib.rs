//! Violation reporting for the ERC engine: severities, rule codes,
//! structured violations, the assembled report, and a text formatter.
//!
//! Split along the usual diagnostic axes (severity / code / message /
//! builder), trimmed down to what a graph-level rule check needs —
//! there is no source span, label, or suggested-fix concept here,
//! because the ERC engine never parses source text.

#![warn(missing_docs)]

pub mod code;
pub mod format;
pub mod report;
pub mod severity;
pub mod violation;

pub use code::RuleCode;
pub use format::format_report;
pub use report::{assemble_report, Report, Summary};
pub use severity::Severity;
pub use violation::Violation;
