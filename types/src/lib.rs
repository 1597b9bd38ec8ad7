//! Shared configuration types for the examine overlay
//!
//! This crate contains serializable configuration types that are shared between
//! the event path (examine-core), the render path (examine-overlay) and the
//! replay tool.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Color Type
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color as [r, g, b, a] bytes
pub type Color = [u8; 4];

pub mod overlay_colors {
    use super::Color;

    pub const WHITE: Color = [255, 255, 255, 255];
    /// Host default for tooltip-style boxes when nothing else is configured
    pub const TOOLTIP_BG: Color = [70, 61, 50, 156];
}

// ─────────────────────────────────────────────────────────────────────────────
// Enums
// ─────────────────────────────────────────────────────────────────────────────

/// Which overlay layer the examine boxes are drawn on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayLayer {
    /// Drawn above everything, including the right-click menu
    #[default]
    AlwaysOnTop,
    /// Drawn above game interfaces but below the right-click menu
    AboveWidgets,
}

impl OverlayLayer {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AlwaysOnTop => "Always on top",
            Self::AboveWidgets => "Above widgets",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ranges
// ─────────────────────────────────────────────────────────────────────────────

pub const TIMEOUT_SECS_MIN: u32 = 1;
pub const TIMEOUT_SECS_MAX: u32 = 10;
pub const FADEOUT_MS_MAX: u32 = 3000;
pub const PATCH_EXTRA_SECS_MAX: u32 = 10;
pub const WRAP_COLUMNS_MIN: u16 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Examine Config
// ─────────────────────────────────────────────────────────────────────────────

/// User configuration for the examine overlay.
///
/// Every field carries its own serde default so a partially written file
/// still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamineConfig {
    // ─── Anchored display ───────────────────────────────────────────────────
    /// Show examines in a box under the examined entity instead of at the cursor
    #[serde(default = "default_true")]
    pub anchored_style: bool,
    /// Keep anchored boxes inside the game viewport
    #[serde(default = "default_true")]
    pub clamp_anchored: bool,
    /// Reuse the last known screen location when the entity cannot be found
    #[serde(default = "default_true")]
    pub previous_bounds_fallback: bool,
    /// Show as a cursor tooltip when the entity cannot be found
    #[serde(default = "default_true")]
    pub tooltip_fallback: bool,

    // ─── Examine types ──────────────────────────────────────────────────────
    /// Price check text ("Price of ..."), always shown as a cursor tooltip
    #[serde(default)]
    pub show_price_check: bool,
    /// Items examined in interfaces (inventory, bank, ...)
    #[serde(default = "default_true")]
    pub show_item_examines: bool,
    #[serde(default = "default_true")]
    pub show_ground_item_examines: bool,
    #[serde(default = "default_true")]
    pub show_object_examines: bool,
    #[serde(default = "default_true")]
    pub show_npc_examines: bool,
    #[serde(default = "default_true")]
    pub show_patch_inspects: bool,
    /// Messages from the patch payment companion plugin, always shown as a cursor tooltip
    #[serde(default = "default_true")]
    pub show_patch_payment: bool,

    // ─── Box display ────────────────────────────────────────────────────────
    #[serde(default = "default_tooltip_timeout_secs")]
    pub tooltip_timeout_secs: u32,
    /// Start fading this many milliseconds before the box disappears, 0 disables fading
    #[serde(default = "default_tooltip_fadeout_ms")]
    pub tooltip_fadeout_ms: u32,
    /// Extra seconds for farming patch inspects (the text is long)
    #[serde(default = "default_patch_inspect_extra_secs")]
    pub patch_inspect_extra_secs: u32,
    #[serde(default = "default_true")]
    pub wrap_tooltip: bool,
    #[serde(default = "default_wrap_columns")]
    pub wrap_columns: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_background_color: Option<Color>,
    #[serde(default)]
    pub overlay_layer: OverlayLayer,

    // ─── Correlation ────────────────────────────────────────────────────────
    /// Ticks of skew tolerated between an action and its response
    #[serde(default = "default_tick_grace")]
    pub tick_grace: u32,
}

fn default_true() -> bool {
    true
}
fn default_tooltip_timeout_secs() -> u32 {
    4
}
fn default_tooltip_fadeout_ms() -> u32 {
    1000
}
fn default_patch_inspect_extra_secs() -> u32 {
    2
}
fn default_wrap_columns() -> u16 {
    30
}
fn default_tick_grace() -> u32 {
    1
}

impl Default for ExamineConfig {
    fn default() -> Self {
        Self {
            anchored_style: true,
            clamp_anchored: true,
            previous_bounds_fallback: true,
            tooltip_fallback: true,
            show_price_check: false,
            show_item_examines: true,
            show_ground_item_examines: true,
            show_object_examines: true,
            show_npc_examines: true,
            show_patch_inspects: true,
            show_patch_payment: true,
            tooltip_timeout_secs: default_tooltip_timeout_secs(),
            tooltip_fadeout_ms: default_tooltip_fadeout_ms(),
            patch_inspect_extra_secs: default_patch_inspect_extra_secs(),
            wrap_tooltip: true,
            wrap_columns: default_wrap_columns(),
            custom_background_color: None,
            overlay_layer: OverlayLayer::default(),
            tick_grace: default_tick_grace(),
        }
    }
}

impl ExamineConfig {
    /// Clamp numeric settings into their supported ranges
    pub fn sanitized(mut self) -> Self {
        self.tooltip_timeout_secs = self
            .tooltip_timeout_secs
            .clamp(TIMEOUT_SECS_MIN, TIMEOUT_SECS_MAX);
        self.tooltip_fadeout_ms = self.tooltip_fadeout_ms.min(FADEOUT_MS_MAX);
        self.patch_inspect_extra_secs = self.patch_inspect_extra_secs.min(PATCH_EXTRA_SECS_MAX);
        self.wrap_columns = self.wrap_columns.max(WRAP_COLUMNS_MIN);
        self
    }

    /// Background for examine boxes, preferring the custom color when set
    pub fn background_or(&self, host_default: Color) -> Color {
        self.custom_background_color.unwrap_or(host_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ExamineConfig = toml::from_str("tooltip_timeout_secs = 7\n").unwrap();
        assert_eq!(config.tooltip_timeout_secs, 7);
        assert_eq!(config.tooltip_fadeout_ms, 1000);
        assert!(config.anchored_style);
        assert!(!config.show_price_check);
        assert_eq!(config.overlay_layer, OverlayLayer::AlwaysOnTop);
    }

    #[test]
    fn test_sanitized_clamps_ranges() {
        let config = ExamineConfig {
            tooltip_timeout_secs: 0,
            tooltip_fadeout_ms: 9000,
            patch_inspect_extra_secs: 60,
            wrap_columns: 5,
            ..ExamineConfig::default()
        }
        .sanitized();

        assert_eq!(config.tooltip_timeout_secs, TIMEOUT_SECS_MIN);
        assert_eq!(config.tooltip_fadeout_ms, FADEOUT_MS_MAX);
        assert_eq!(config.patch_inspect_extra_secs, PATCH_EXTRA_SECS_MAX);
        assert_eq!(config.wrap_columns, WRAP_COLUMNS_MIN);
    }

    #[test]
    fn test_background_prefers_custom() {
        let mut config = ExamineConfig::default();
        assert_eq!(config.background_or(overlay_colors::TOOLTIP_BG), overlay_colors::TOOLTIP_BG);

        config.custom_background_color = Some([1, 2, 3, 4]);
        assert_eq!(config.background_or(overlay_colors::TOOLTIP_BG), [1, 2, 3, 4]);
    }

    #[test]
    fn test_overlay_layer_snake_case() {
        let config: ExamineConfig = toml::from_str("overlay_layer = \"above_widgets\"\n").unwrap();
        assert_eq!(config.overlay_layer, OverlayLayer::AboveWidgets);
    }
}
