//! Process exit codes

/// Successful termination (including an empty report)
pub const OK: i32 = 0;

/// Any failed run: bad argument, transport failure, bad response, timeout, config
pub const FAILURE: i32 = 1;
