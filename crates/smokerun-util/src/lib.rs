//! Shared utilities for smokerun
//!
//! This crate provides:
//! - Error types
//! - Default paths for the target bin directory and config file

mod error;
mod paths;

pub use error::*;
pub use paths::*;
