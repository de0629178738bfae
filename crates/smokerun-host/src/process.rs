//! Real host implementation

use std::process::{Command, Stdio};
use std::time::Duration;
use tracing::debug;

use crate::matching;
use crate::{ExitStatus, Host, HostError, HostResult, LaunchCommand};

/// Host backed by the operating system
#[derive(Debug, Default)]
pub struct UnixHost;

impl UnixHost {
    pub fn new() -> Self {
        Self
    }
}

impl Host for UnixHost {
    fn run_foreground(&self, cmd: &LaunchCommand) -> HostResult<ExitStatus> {
        let mut child = Command::new(&cmd.program)
            .args(&cmd.args)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| {
                HostError::SpawnFailed(format!("{}: {}", cmd.program.display(), e))
            })?;

        debug!(pid = child.id(), program = %cmd.program.display(), "Foreground process spawned");

        let status = child
            .wait()
            .map_err(|e| HostError::WaitFailed(e.to_string()))?;

        Ok(convert_status(status))
    }

    fn spawn_daemon(&self, cmd: &LaunchCommand) -> HostResult<u32> {
        let mut command = Command::new(&cmd.program);
        command
            .args(&cmd.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Detach into a new session so the daemon outlives the harness and
        // never shares its process group.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // SAFETY: setsid is async-signal-safe, fine in pre-exec context
            unsafe {
                command.pre_exec(|| {
                    nix::unistd::setsid()
                        .map(|_| ())
                        .map_err(|e| std::io::Error::other(e.to_string()))
                });
            }
        }

        let child = command.spawn().map_err(|e| {
            HostError::SpawnFailed(format!("{}: {}", cmd.program.display(), e))
        })?;

        let pid = child.id();
        debug!(pid, program = %cmd.program.display(), "Daemon process spawned");

        Ok(pid)
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn kill_matching(&self, pattern: &str, grace: Duration) -> HostResult<usize> {
        matching::kill_matching(pattern, grace)
    }
}

fn convert_status(status: std::process::ExitStatus) -> ExitStatus {
    if let Some(code) = status.code() {
        ExitStatus::Code(code)
    } else {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(sig) = status.signal() {
                return ExitStatus::Signaled(sig);
            }
            ExitStatus::Code(-1)
        }
        #[cfg(not(unix))]
        {
            ExitStatus::Code(-1)
        }
    }
}
