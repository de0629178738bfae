//! Default paths for smokerun
//!
//! The harness launches executables that live next to its own binary unless
//! told otherwise:
//! - Bin dir: `$SMOKERUN_BIN_DIR` or the directory containing the harness
//! - Config: `$SMOKERUN_CONFIG` or `smokerun.toml` in the bin dir

use std::path::{Path, PathBuf};

/// Environment variable for overriding the target bin directory
pub const SMOKERUN_BIN_DIR_ENV: &str = "SMOKERUN_BIN_DIR";

/// Environment variable for overriding the config file path
pub const SMOKERUN_CONFIG_ENV: &str = "SMOKERUN_CONFIG";

/// Config filename within the bin directory
const CONFIG_FILENAME: &str = "smokerun.toml";

/// Get the default bin directory.
///
/// Order of precedence:
/// 1. `$SMOKERUN_BIN_DIR` environment variable (if set)
/// 2. The directory containing the running executable
/// 3. The current directory (fallback when the exe path is unavailable)
pub fn default_bin_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(SMOKERUN_BIN_DIR_ENV) {
        return PathBuf::from(dir);
    }

    exe_adjacent_dir()
}

/// Get the bin directory without checking SMOKERUN_BIN_DIR env var.
/// Used for default values where the env var is checked separately.
pub fn exe_adjacent_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.to_path_buf();
        }
    }

    PathBuf::from(".")
}

/// Get the default config file path.
///
/// Order of precedence:
/// 1. `$SMOKERUN_CONFIG` environment variable (if set)
/// 2. `smokerun.toml` next to the running executable
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(SMOKERUN_CONFIG_ENV) {
        return PathBuf::from(path);
    }

    exe_adjacent_dir().join(CONFIG_FILENAME)
}

/// Resolve a program path against a bin directory.
///
/// Absolute paths pass through unchanged; relative ones (including bare
/// names) are joined onto the bin dir. The script this replaces always ran
/// siblings of itself, so bare names never fall through to `$PATH` lookup.
pub fn resolve_program(bin_dir: &Path, program: &Path) -> PathBuf {
    if program.is_absolute() {
        program.to_path_buf()
    } else {
        bin_dir.join(program)
    }
}
