//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, bad configuration, engine or I/O errors.
pub const ERROR: i32 = 2;
