//! Configuration parsing and validation for smokerun
//!
//! Supports TOML configuration with:
//! - Versioned schema
//! - Target definitions (foreground or daemon)
//! - Client and cleanup settings
//! - Validation with clear error messages
//!
//! When no config file exists, [`Plan::builtin`] supplies the stock
//! thread/http/client arrangement the harness ships with.

mod plan;
mod schema;
mod validation;

pub use plan::*;
pub use schema::*;
pub use validation::*;

use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load and validate configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Plan> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<Plan> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    let errors = validate_config(&raw);
    if !errors.is_empty() {
        return Err(ConfigError::ValidationFailed { errors });
    }

    Ok(Plan::from_raw(raw))
}

/// Current supported config version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn parse_minimal_config() {
        let config = r#"
            config_version = 1

            [[targets]]
            name = "thread"
            program = "thread"
        "#;

        let plan = parse_config(config).unwrap();
        assert_eq!(plan.targets.len(), 1);
        assert_eq!(plan.targets[0].name.as_str(), "thread");
        assert!(!plan.targets[0].daemon);
    }

    #[test]
    fn missing_sections_fall_back_to_builtin() {
        let plan = parse_config("config_version = 1").unwrap();
        let builtin = Plan::builtin();

        assert_eq!(plan.targets.len(), builtin.targets.len());
        assert_eq!(plan.client.program, builtin.client.program);
        assert_eq!(plan.cleanup.pattern, builtin.cleanup.pattern);
        assert_eq!(plan.startup_wait, Duration::from_millis(1000));
    }

    #[test]
    fn reject_wrong_version() {
        let config = r#"
            config_version = 99

            [[targets]]
            name = "thread"
            program = "thread"
        "#;

        let result = parse_config(config);
        assert!(matches!(result, Err(ConfigError::UnsupportedVersion(99))));
    }

    #[test]
    fn full_config_round_trip() {
        let config = r#"
            config_version = 1

            [harness]
            bin_dir = "/opt/demo/bin"
            startup_wait_ms = 250

            [[targets]]
            name = "thread"
            program = "thread"

            [[targets]]
            name = "http"
            program = "http"
            args = ["--port", "8080"]
            daemon = true

            [client]
            program = "client"
            args = ["http"]

            [cleanup]
            pattern = "http"
            grace_ms = 50
        "#;

        let plan = parse_config(config).unwrap();
        assert_eq!(plan.bin_dir.as_deref(), Some(std::path::Path::new("/opt/demo/bin")));
        assert_eq!(plan.startup_wait, Duration::from_millis(250));
        assert_eq!(plan.targets.len(), 2);
        assert!(plan.targets[1].daemon);
        assert_eq!(plan.targets[1].args, vec!["--port", "8080"]);
        assert_eq!(plan.cleanup.grace, Duration::from_millis(50));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smokerun.toml");
        std::fs::write(&path, "config_version = 1\n").unwrap();

        let plan = load_config(&path).unwrap();
        assert!(!plan.targets.is_empty());
    }
}
