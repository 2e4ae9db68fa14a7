//! Standard exit codes (BSD sysexits.h compatible)

/// Data format error (rejected inventory input)
pub const DATAERR: i32 = 65;

/// Cannot open input (requested host does not exist)
pub const NOINPUT: i32 = 66;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Configuration error
pub const CONFIG: i32 = 78;
