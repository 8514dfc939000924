//! Exit code constants for the pwgate CLI.
//!
//! - 0: Success (candidate accepted, or informational command)
//! - 1: User error (bad args, unreadable or invalid config)
//! - 2: Validation failure (candidate rejected)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unusable config file.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the candidate did not satisfy the rule threshold.
pub const VALIDATION_FAILURE: i32 = 2;
