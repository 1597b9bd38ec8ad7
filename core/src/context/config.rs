//! Examine configuration persistence
//!
//! This module re-exports the shared config types from examine-types and
//! provides confy-backed persistence for them.

use std::path::{Path, PathBuf};

pub use examine_types::{Color, ExamineConfig, OverlayLayer, overlay_colors};

use super::error::ConfigError;

const APP_NAME: &str = "examine-overlay";
const CONFIG_NAME: &str = "config";

/// Extension trait for ExamineConfig persistence
pub trait ExamineConfigExt: Sized {
    /// Load from the platform config directory, falling back to defaults
    fn load() -> Self;
    fn load_from(path: &Path) -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn store_to(&self, path: &Path) -> Result<(), ConfigError>;
    fn config_path() -> Result<PathBuf, ConfigError>;
}

impl ExamineConfigExt for ExamineConfig {
    fn load() -> Self {
        match confy::load::<ExamineConfig>(APP_NAME, CONFIG_NAME) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load examine config, using defaults");
                Self::default()
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        confy::load_path::<ExamineConfig>(path)
            .map(ExamineConfig::sanitized)
            .map_err(|source| ConfigError::Load {
                path: path.to_path_buf(),
                source,
            })
    }

    fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        self.store_to(&path)
    }

    fn store_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self.clone()).map_err(|source| ConfigError::Save {
            path: path.to_path_buf(),
            source,
        })
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Locate)
    }
}
