//! Error types for the replay tool

use std::path::PathBuf;

use examine_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read script {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse script {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An event must carry exactly one of action, message, despawn, reset or render
    #[error("event {index}: {reason}")]
    InvalidEvent { index: usize, reason: &'static str },

    #[error("event {index}: time goes backwards ({at_ms} ms after {previous_ms} ms)")]
    OutOfOrder {
        index: usize,
        at_ms: u64,
        previous_ms: u64,
    },
}
