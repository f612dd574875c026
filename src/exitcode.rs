//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error (e.g. a non-positive random value bound)
pub const USAGE: i32 = 64;

/// Data format error (a value that is not an integer)
pub const DATAERR: i32 = 65;

/// Looked-up value is not in the tree
pub const NOINPUT: i32 = 66;

/// Configuration error
pub const CONFIG: i32 = 78;
