//! Compiler process runner: redirect, wait or time out, map the exit status.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::args::AssembledCommand;

/// How often a child is polled while a timeout is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Errors that can occur when running the compiler.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("could not start compiler process '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("could not wait for compiler process '{program}': {source}")]
    WaitFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot create redirect file '{}': {source}", .path.display())]
    RedirectFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("compiler process '{program}' timed out after {}s and was killed", .after.as_secs_f64())]
    TimedOut { program: String, after: Duration },
}

/// Process runner capability: run a command to completion and return its
/// exit code.
pub trait ProcessRunner {
    fn run(&self, command: &AssembledCommand) -> Result<i32, RunError>;
}

/// Runs commands as real child processes.
///
/// With no timeout the runner blocks until the child exits. With one, the
/// child is polled and killed once the budget is spent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

}

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &AssembledCommand) -> Result<i32, RunError> {
        let program = command.program();
        // Find the program before touching the redirect file, so a missing
        // compiler leaves the previous log in place.
        let executable = which::which(program).map_err(|e| RunError::SpawnFailed {
            program: program.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, e),
        })?;
        tracing::debug!(program, path = %executable.display(), "Resolved compiler");

        let mut cmd = Command::new(&executable);
        cmd.args(command.args());

        if let Some(redirect) = command.redirect.as_deref() {
            let (stdout, stderr) = open_redirect(Path::new(redirect))?;
            cmd.stdout(stdout).stderr(stderr);
        }

        let mut child = cmd.spawn().map_err(|source| RunError::SpawnFailed {
            program: program.to_string(),
            source,
        })?;
        tracing::debug!(program, pid = child.id(), "Spawned compiler");

        let status = match self.timeout {
            Some(budget) => wait_with_timeout(&mut child, program, budget)?,
            None => child.wait().map_err(|source| RunError::WaitFailed {
                program: program.to_string(),
                source,
            })?,
        };

        let code = exit_code(status);
        tracing::info!(program, code, "Compiler exited");
        Ok(code)
    }
}

/// Both output streams go to the same truncated file.
fn open_redirect(path: &Path) -> Result<(Stdio, Stdio), RunError> {
    let redirect_error = |source| RunError::RedirectFailed {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(redirect_error)?;
    let err_file = file.try_clone().map_err(redirect_error)?;
    Ok((Stdio::from(file), Stdio::from(err_file)))
}

fn wait_with_timeout(
    child: &mut Child,
    program: &str,
    budget: Duration,
) -> Result<ExitStatus, RunError> {
    let wait_error = |source| RunError::WaitFailed {
        program: program.to_string(),
        source,
    };
    let started = Instant::now();

    loop {
        if let Some(status) = child.try_wait().map_err(wait_error)? {
            return Ok(status);
        }
        if started.elapsed() >= budget {
            tracing::warn!(program, ?budget, "Compiler timed out, killing it");
            // The child may exit between try_wait and kill; reap either way.
            let _ = child.kill();
            child.wait().map_err(wait_error)?;
            return Err(RunError::TimedOut {
                program: program.to_string(),
                after: budget,
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
