//! Error types for smokerun

use thiserror::Error;

/// Core error type for smokerun operations
#[derive(Debug, Error)]
pub enum SmokerunError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Host error: {0}")]
    HostError(String),

    #[error("Target '{target}' exited with failure: {status}")]
    TargetFailed { target: String, status: String },

    #[error("Client exited with failure: {0}")]
    ClientFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SmokerunError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn host(msg: impl Into<String>) -> Self {
        Self::HostError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SmokerunError>;
