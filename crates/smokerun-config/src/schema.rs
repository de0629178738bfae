//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Harness-level settings
    #[serde(default)]
    pub harness: RawHarness,

    /// Launchable targets, in launch order. Empty means the built-in pair.
    #[serde(default)]
    pub targets: Vec<RawTarget>,

    /// Client helper run after the startup wait
    pub client: Option<RawClient>,

    /// Pattern-based process cleanup
    pub cleanup: Option<RawCleanup>,
}

/// Harness-level settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawHarness {
    /// Directory holding the target executables
    /// (default: the directory containing smokerun itself)
    pub bin_dir: Option<PathBuf>,

    /// Wait between launching targets and running the client, in ms
    /// (default: 1000)
    pub startup_wait_ms: Option<u64>,
}

/// Raw target definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawTarget {
    /// Name a positional CLI argument must equal to select this target
    pub name: String,

    /// Executable, resolved against bin_dir when relative
    pub program: PathBuf,

    /// Additional command-line arguments
    #[serde(default)]
    pub args: Vec<String>,

    /// Detach into its own session and leave running
    #[serde(default)]
    pub daemon: bool,
}

/// Raw client definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawClient {
    pub program: PathBuf,

    #[serde(default)]
    pub args: Vec<String>,
}

/// Raw cleanup definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawCleanup {
    /// Substring matched against process names and command lines
    pub pattern: String,

    /// Wait between SIGTERM and SIGKILL, in ms (default: 200)
    pub grace_ms: Option<u64>,
}
