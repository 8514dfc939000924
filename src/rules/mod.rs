//! Rule compiler for pwgate.
//!
//! This module turns declarative password constraints into executable matchers:
//! - `RuleSpec` describes one constraint (kind + parameters + display hint)
//! - `compile` translates a spec into a `CompiledRule` (pattern string + hint)
//! - `CompiledRule::matcher` builds the anchored full-match regex
//!
//! Compilation is pure and never fails. Pattern syntax is only checked when a
//! matcher is built, so a malformed custom pattern surfaces at evaluation time.

mod compile;
mod spec;


// Re-export public API
pub use compile::{CompiledRule, compile, escape_class};
pub use spec::RuleSpec;
