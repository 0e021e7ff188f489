//! Command implementations.
//!
//! - [`analyze`] - Scan one log file and report per-format statistics
//!   (`linux`, `android`, `mac`, `windows` subcommands)

pub mod analyze;
