//! Pattern-based process termination

use std::time::Duration;
use tracing::debug;

use crate::HostResult;

/// Terminate every process whose name or command line contains `pattern`:
/// SIGTERM the full match set, wait `grace`, then SIGKILL it. Signals are
/// best-effort; a process that exits in between is not an error. The calling
/// process itself never matches.
#[cfg(unix)]
pub fn kill_matching(pattern: &str, grace: Duration) -> HostResult<usize> {
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;
    use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

    let my_pid = std::process::id();

    let mut sys = System::new();
    // refresh_processes() doesn't collect command lines; ask for them explicitly
    sys.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::nothing().with_cmd(UpdateKind::Always),
    );

    let mut matched: Vec<u32> = Vec::new();
    for (pid, process) in sys.processes() {
        let pid = pid.as_u32();
        if pid == my_pid {
            continue;
        }

        let name_matches = process.name().to_string_lossy().contains(pattern);
        let cmdline_matches = process
            .cmd()
            .iter()
            .any(|arg| arg.to_string_lossy().contains(pattern));

        if name_matches || cmdline_matches {
            matched.push(pid);
        }
    }

    if matched.is_empty() {
        debug!(pattern, "No matching processes to terminate");
        return Ok(0);
    }

    debug!(
        pattern,
        count = matched.len(),
        pids = ?matched,
        "Terminating matching processes"
    );

    for &pid in &matched {
        let _ = kill(Pid::from_raw(pid as i32), Signal::SIGTERM);
    }

    std::thread::sleep(grace);

    for &pid in &matched {
        let _ = kill(Pid::from_raw(pid as i32), Signal::SIGKILL);
    }

    Ok(matched.len())
}

#[cfg(not(unix))]
pub fn kill_matching(_pattern: &str, _grace: Duration) -> HostResult<usize> {
    Ok(0)
}
