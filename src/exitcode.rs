//! Standard exit codes (BSD sysexits.h compatible)

/// Data format error (malformed mobile notation)
pub const DATAERR: i32 = 65;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
