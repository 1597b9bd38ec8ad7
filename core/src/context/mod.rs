mod config;
mod error;

pub use config::{Color, ExamineConfig, ExamineConfigExt, OverlayLayer, overlay_colors};
pub use error::ConfigError;
