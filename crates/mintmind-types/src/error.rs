//! Error hierarchy for MintMind.
//!
//! Editing itself never fails: capacity and absence conditions are reported
//! as `false` from the buffer and engine operations. These errors cover the
//! host concerns around the editor (configuration, files, the build step).

use thiserror::Error;

/// Top-level error type for MintMind host operations.
#[derive(Debug, Error)]
pub enum MintmindError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file parse error at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the compile-and-run step.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Compilation failed with {status}")]
    CompileFailed { status: String },
}
