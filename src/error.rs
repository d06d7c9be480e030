use thiserror::Error;

use crate::config::ConfigError;
use crate::process::{RunError, EXIT_FAILURE, EXIT_SPAWN_FAILED, EXIT_TIMED_OUT};
use crate::target::TargetError;

/// Any fatal condition of a `compile` run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Target(#[from] TargetError),

    #[error(transparent)]
    Run(#[from] RunError),
}

impl Error {
    /// Map error variant to the process exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::Target(_) => EXIT_FAILURE,
            Error::Run(RunError::TimedOut { .. }) => EXIT_TIMED_OUT,
            Error::Run(_) => EXIT_SPAWN_FAILED,
        }
    }

    /// Short reason printed after the detailed message.
    pub fn summary(&self) -> &'static str {
        match self {
            Error::Config(_) => "targets file is unusable",
            Error::Target(TargetError::Ambiguous { .. }) => "cannot resolve ambiguous targets",
            Error::Target(TargetError::Unresolvable { .. }) => "cannot resolve target",
            Error::Target(TargetError::NoTargets) => "nothing to compile",
            Error::Target(_) => "bad target",
            Error::Run(RunError::TimedOut { .. }) => "compiler timed out",
            Error::Run(_) => "compile failure",
        }
    }
}
