//! Host trait and shared types

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors from host operations
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("Wait failed: {0}")]
    WaitFailed(String),

    #[error("Cleanup failed: {0}")]
    CleanupFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type HostResult<T> = Result<T, HostError>;

/// A fully resolved command: absolute program path plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl std::fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a foreground child ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Exited normally with a code
    Code(i32),
    /// Killed by a signal
    Signaled(i32),
}

impl ExitStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ExitStatus::Code(0))
    }
}

impl std::fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitStatus::Code(code) => write!(f, "exit code {}", code),
            ExitStatus::Signaled(sig) => write!(f, "signal {}", sig),
        }
    }
}

/// Operating-system seam for the runner.
///
/// `sleep` is on the trait so tests can assert the wait is ordered between
/// the launch and client steps without paying wall-clock time.
pub trait Host {
    /// Spawn a command, wait for it, and report how it ended
    fn run_foreground(&self, cmd: &LaunchCommand) -> HostResult<ExitStatus>;

    /// Spawn a command detached into its own session and leave it running.
    /// Returns the child pid.
    fn spawn_daemon(&self, cmd: &LaunchCommand) -> HostResult<u32>;

    /// Block for the given duration
    fn sleep(&self, duration: Duration);

    /// Best-effort termination of processes whose name or command line
    /// contains `pattern`: SIGTERM, grace, then SIGKILL. Returns the number
    /// of matched processes; zero matches is success.
    fn kill_matching(&self, pattern: &str, grace: Duration) -> HostResult<usize>;
}
