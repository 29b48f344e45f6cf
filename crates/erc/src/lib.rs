//! The electrical rule check engine: a deterministic, single-threaded,
//! stateless analyzer over a design graph of modules, pins, and
//! connections.
//!
//! `runERC` from the design notes is [`run_erc`] here. A design snapshot
//! goes in, a [`Report`](erc_report::Report) comes out — the engine
//! never mutates its input and holds no state between calls.

#![warn(missing_docs)]

pub mod engine;
pub mod rules;

pub use engine::{run_erc, Rule, RuleEngine};
