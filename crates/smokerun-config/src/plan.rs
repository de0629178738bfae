//! Validated launch plan

use crate::schema::{RawConfig, RawTarget};
use std::path::PathBuf;
use std::time::Duration;

/// Default startup wait, matching the script this replaces
const DEFAULT_STARTUP_WAIT: Duration = Duration::from_millis(1000);

/// Default grace between SIGTERM and SIGKILL during cleanup
const DEFAULT_CLEANUP_GRACE: Duration = Duration::from_millis(200);

/// Name a positional argument must exactly equal to select a target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetName(String);

impl TargetName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A launchable target
#[derive(Debug, Clone)]
pub struct Target {
    pub name: TargetName,

    /// Executable, resolved against the bin dir when relative
    pub program: PathBuf,

    pub args: Vec<String>,

    /// Daemon targets detach into their own session and are left running;
    /// foreground targets run to completion before the next step.
    pub daemon: bool,
}

/// Client helper invocation
#[derive(Debug, Clone)]
pub struct ClientSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Pattern-based process cleanup
#[derive(Debug, Clone)]
pub struct CleanupSpec {
    /// Substring matched against process names and command lines
    pub pattern: String,

    /// Wait between SIGTERM and SIGKILL
    pub grace: Duration,
}

/// Validated plan ready for the runner
#[derive(Debug, Clone)]
pub struct Plan {
    /// Bin dir from the config file, if any. CLI and env overrides are
    /// layered on top by the binary.
    pub bin_dir: Option<PathBuf>,

    /// Wait between launching targets and running the client
    pub startup_wait: Duration,

    /// Targets in launch order
    pub targets: Vec<Target>,

    pub client: ClientSpec,

    pub cleanup: CleanupSpec,
}

impl Plan {
    /// The stock arrangement used when no config file exists: the thread
    /// demo in the foreground, the http demo as a daemon, `client http`
    /// afterwards, and http processes cleaned up at the end.
    pub fn builtin() -> Self {
        Self {
            bin_dir: None,
            startup_wait: DEFAULT_STARTUP_WAIT,
            targets: vec![
                Target {
                    name: TargetName::new("thread"),
                    program: PathBuf::from("thread"),
                    args: vec![],
                    daemon: false,
                },
                Target {
                    name: TargetName::new("http"),
                    program: PathBuf::from("http"),
                    args: vec![],
                    daemon: true,
                },
            ],
            client: ClientSpec {
                program: PathBuf::from("client"),
                args: vec!["http".into()],
            },
            cleanup: CleanupSpec {
                pattern: "http".into(),
                grace: DEFAULT_CLEANUP_GRACE,
            },
        }
    }

    /// Convert from raw config (after validation)
    pub fn from_raw(raw: RawConfig) -> Self {
        let builtin = Self::builtin();

        let targets = if raw.targets.is_empty() {
            builtin.targets
        } else {
            raw.targets.into_iter().map(Target::from_raw).collect()
        };

        let client = raw
            .client
            .map(|c| ClientSpec {
                program: c.program,
                args: c.args,
            })
            .unwrap_or(builtin.client);

        let cleanup = raw
            .cleanup
            .map(|c| CleanupSpec {
                pattern: c.pattern,
                grace: c
                    .grace_ms
                    .map(Duration::from_millis)
                    .unwrap_or(DEFAULT_CLEANUP_GRACE),
            })
            .unwrap_or(builtin.cleanup);

        Self {
            bin_dir: raw.harness.bin_dir,
            startup_wait: raw
                .harness
                .startup_wait_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_STARTUP_WAIT),
            targets,
            client,
            cleanup,
        }
    }

    /// Get target by name
    pub fn get_target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name.as_str() == name)
    }
}

impl Target {
    fn from_raw(raw: RawTarget) -> Self {
        Self {
            name: TargetName::new(raw.name),
            program: raw.program,
            args: raw.args,
            daemon: raw.daemon,
        }
    }
}
