//! Mock host for testing

use std::sync::Mutex;
use std::time::Duration;

use crate::{ExitStatus, Host, HostError, HostResult, LaunchCommand};

/// A single recorded host call, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Foreground(LaunchCommand),
    Daemon(LaunchCommand),
    Sleep(Duration),
    KillMatching { pattern: String, grace: Duration },
}

/// Mock host for unit/integration testing.
///
/// Records every call; nothing is actually spawned and `sleep` returns
/// immediately. Failure switches let tests drive the runner down its error
/// paths.
pub struct MockHost {
    calls: Mutex<Vec<HostCall>>,

    /// Exit status reported for every foreground run
    pub foreground_status: Mutex<ExitStatus>,

    /// Make foreground spawns fail outright
    pub fail_foreground: Mutex<bool>,

    /// Make daemon spawns fail
    pub fail_daemon: Mutex<bool>,

    /// Match count reported by kill_matching
    pub match_count: Mutex<usize>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            foreground_status: Mutex::new(ExitStatus::Code(0)),
            fail_foreground: Mutex::new(false),
            fail_daemon: Mutex::new(false),
            match_count: Mutex::new(0),
        }
    }

    /// Snapshot of all recorded calls, in order
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_foreground_status(&self, status: ExitStatus) {
        *self.foreground_status.lock().unwrap() = status;
    }

    pub fn set_fail_foreground(&self, fail: bool) {
        *self.fail_foreground.lock().unwrap() = fail;
    }

    pub fn set_fail_daemon(&self, fail: bool) {
        *self.fail_daemon.lock().unwrap() = fail;
    }

    pub fn set_match_count(&self, count: usize) {
        *self.match_count.lock().unwrap() = count;
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for MockHost {
    fn run_foreground(&self, cmd: &LaunchCommand) -> HostResult<ExitStatus> {
        if *self.fail_foreground.lock().unwrap() {
            return Err(HostError::SpawnFailed(format!(
                "mock spawn failure: {}",
                cmd.program.display()
            )));
        }

        self.record(HostCall::Foreground(cmd.clone()));
        Ok(*self.foreground_status.lock().unwrap())
    }

    fn spawn_daemon(&self, cmd: &LaunchCommand) -> HostResult<u32> {
        if *self.fail_daemon.lock().unwrap() {
            return Err(HostError::SpawnFailed(format!(
                "mock spawn failure: {}",
                cmd.program.display()
            )));
        }

        self.record(HostCall::Daemon(cmd.clone()));
        Ok(1)
    }

    fn sleep(&self, duration: Duration) {
        self.record(HostCall::Sleep(duration));
    }

    fn kill_matching(&self, pattern: &str, grace: Duration) -> HostResult<usize> {
        self.record(HostCall::KillMatching {
            pattern: pattern.to_string(),
            grace,
        });
        Ok(*self.match_count.lock().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let host = MockHost::new();
        host.spawn_daemon(&LaunchCommand::new("http", vec![])).unwrap();
        host.sleep(Duration::from_millis(5));
        host.kill_matching("http", Duration::from_millis(1)).unwrap();

        let calls = host.calls();
        assert!(matches!(calls[0], HostCall::Daemon(_)));
        assert!(matches!(calls[1], HostCall::Sleep(_)));
        assert!(matches!(calls[2], HostCall::KillMatching { .. }));
    }

    #[test]
    fn fail_daemon_switch_fails_spawns() {
        let host = MockHost::new();
        host.set_fail_daemon(true);
        let result = host.spawn_daemon(&LaunchCommand::new("http", vec![]));
        assert!(matches!(result, Err(HostError::SpawnFailed(_))));
        assert!(host.calls().is_empty());
    }
}
