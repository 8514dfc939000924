//! Pwgate: rule-based password strength validation.
//!
//! - [`rules`] compiles declarative constraints into full-match patterns
//! - [`validator`] evaluates candidates, applies the "N of M rules" threshold,
//!   and decides when the error banner is shown
//! - [`config`] loads validator settings and display messages from YAML

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod rules;
pub mod validator;
