//! Compiler process execution.

mod runner;

pub use runner::{ProcessRunner, RunError, SystemRunner};

/// Exit status for a configuration, target or usage error.
pub const EXIT_FAILURE: i32 = 1;
/// Reserved: the compiler process could not be started or observed.
pub const EXIT_SPAWN_FAILED: i32 = 127;
/// The timeout policy killed the compiler.
pub const EXIT_TIMED_OUT: i32 = 124;
