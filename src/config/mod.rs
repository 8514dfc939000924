//! Configuration model for pwgate.
//!
//! This module defines the Config struct that represents a validator YAML file.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults matching the sign-in screen's password rules, and validation of
//! config values. It also carries the message table the CLI uses to resolve
//! hint and error keys into display text.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
