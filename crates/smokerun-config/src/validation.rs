//! Configuration validation

use crate::schema::RawConfig;
use std::collections::HashSet;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Target '{target}': {message}")]
    TargetError { target: String, message: String },

    #[error("Duplicate target name: {0}")]
    DuplicateTargetName(String),

    #[error("Client: {0}")]
    ClientError(String),

    #[error("Cleanup: {0}")]
    CleanupError(String),
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut seen_names = HashSet::new();
    for target in &config.targets {
        if !seen_names.insert(&target.name) {
            errors.push(ValidationError::DuplicateTargetName(target.name.clone()));
        }

        if target.name.is_empty() {
            errors.push(ValidationError::TargetError {
                target: target.name.clone(),
                message: "name cannot be empty".into(),
            });
        }

        if target.program.as_os_str().is_empty() {
            errors.push(ValidationError::TargetError {
                target: target.name.clone(),
                message: "program cannot be empty".into(),
            });
        }
    }

    if let Some(client) = &config.client {
        if client.program.as_os_str().is_empty() {
            errors.push(ValidationError::ClientError("program cannot be empty".into()));
        }
    }

    if let Some(cleanup) = &config.cleanup {
        if cleanup.pattern.is_empty() {
            errors.push(ValidationError::CleanupError("pattern cannot be empty".into()));
        }
    }

    errors
}
