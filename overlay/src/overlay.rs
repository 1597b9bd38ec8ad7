//! Examine overlay driver
//!
//! Called once per render cycle. Reads the recency store, asks the scheduler
//! which records are visible, and draws each one either anchored under its
//! entity or as a cursor tooltip.
//!
//! Two side tables keyed by [`RecordId`] carry state between cycles: the size
//! each record last rendered at (for clamping) and the last anchor rectangle
//! it resolved to (for the remembered-bounds fallback).

use std::time::Instant;

use hashbrown::HashMap;

use examine_core::{
    AnchorStrategy, DisplayTimings, ExamineConfig, ExamineRecord, RecencyStore, RecordId, Scheduled,
    schedule,
};
use examine_types::{Color, overlay_colors};

use crate::anchor::{AnchorResolver, AnchorSource, Resolution};
use crate::geometry::{Point, Rect, Size};
use crate::layout::{clamp_container, clamp_position, initial_position};
use crate::scene::SceneQuery;
use crate::surface::{RenderSurface, TextBox};
use crate::utils::{apply_opacity, wrap_text};

/// Side tables are dropped once they grow past this many entries
pub const SIDE_TABLE_LIMIT: usize = 10;

/// What happened to one visible record this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Anchored {
        id: RecordId,
        position: Point,
        source: AnchorSource,
    },
    Tooltip {
        id: RecordId,
    },
    /// Anchor lost and tooltip fallback disabled
    Skipped {
        id: RecordId,
    },
}

#[derive(Debug)]
pub struct ExamineOverlay {
    config: ExamineConfig,
    timings: DisplayTimings,
    resolver: AnchorResolver,
    /// Host overlay background, used unless a custom colour is configured
    host_background: Color,
    sizes: HashMap<RecordId, Size>,
    bounds: HashMap<RecordId, Rect>,
}

impl Default for ExamineOverlay {
    fn default() -> Self {
        Self::new(ExamineConfig::default(), overlay_colors::TOOLTIP_BG)
    }
}

impl ExamineOverlay {
    pub fn new(config: ExamineConfig, host_background: Color) -> Self {
        Self {
            timings: DisplayTimings::from_config(&config),
            resolver: AnchorResolver::from_config(&config),
            config,
            host_background,
            sizes: HashMap::new(),
            bounds: HashMap::new(),
        }
    }

    /// Update the config
    pub fn set_config(&mut self, config: ExamineConfig) {
        self.timings = DisplayTimings::from_config(&config);
        self.resolver = AnchorResolver::from_config(&config);
        self.config = config;
    }

    pub fn set_host_background(&mut self, color: Color) {
        self.host_background = color;
    }

    pub fn config(&self) -> &ExamineConfig {
        &self.config
    }

    /// Last rendered size of a record, if it was drawn anchored
    pub fn remembered_size(&self, id: RecordId) -> Option<Size> {
        self.sizes.get(&id).copied()
    }

    /// Last anchor rectangle of a record
    pub fn remembered_bounds(&self, id: RecordId) -> Option<Rect> {
        self.bounds.get(&id).copied()
    }

    /// Forget all per-record state (session reset)
    pub fn reset(&mut self) {
        self.sizes.clear();
        self.bounds.clear();
    }

    /// Draw every visible record in store order
    pub fn render(
        &mut self,
        store: &RecencyStore,
        scene: &dyn SceneQuery,
        surface: &mut dyn RenderSurface,
        now: Instant,
    ) -> Vec<RenderOutcome> {
        let mut outcomes = Vec::new();
        let mut any_anchored = false;

        for Scheduled { record, opacity } in schedule(store, &self.timings, now) {
            let text_box = self.text_box(record, opacity);

            if !self.wants_anchor(record) {
                surface.draw_tooltip(&text_box);
                outcomes.push(RenderOutcome::Tooltip { id: record.id() });
                continue;
            }

            any_anchored = true;
            let outcome = self.render_anchored(record, &text_box, scene, surface);
            tracing::trace!(id = record.id().0, ?outcome, opacity, "Examine render");
            outcomes.push(outcome);
        }

        self.trim_side_tables(any_anchored);
        outcomes
    }

    fn wants_anchor(&self, record: &ExamineRecord) -> bool {
        let rule = record.kind.rule();
        self.config.anchored_style && !rule.tooltip_only && rule.anchor != AnchorStrategy::None
    }

    fn render_anchored(
        &mut self,
        record: &ExamineRecord,
        text_box: &TextBox,
        scene: &dyn SceneQuery,
        surface: &mut dyn RenderSurface,
    ) -> RenderOutcome {
        let id = record.id();
        let remembered = self.bounds.get(&id).copied();

        let (bounds, source) = match self.resolver.resolve(record, scene, remembered) {
            Resolution::Anchored { bounds, source } => (bounds, source),
            Resolution::Tooltip => {
                surface.draw_tooltip(text_box);
                return RenderOutcome::Tooltip { id };
            }
            Resolution::Skip => return RenderOutcome::Skipped { id },
        };

        // Interface boxes are always clamped, to the whole canvas
        let interface = record.kind.rule().anchor == AnchorStrategy::Widget;
        let mut position = initial_position(bounds, interface);
        if interface || self.config.clamp_anchored {
            if let Some(size) = self.sizes.get(&id) {
                position = clamp_position(position, *size, clamp_container(scene, interface));
            }
        }

        let size = surface.draw_box(text_box, position);
        self.sizes.insert(id, size);
        self.bounds.insert(id, bounds);

        RenderOutcome::Anchored { id, position, source }
    }

    fn text_box(&self, record: &ExamineRecord, opacity: f32) -> TextBox {
        let lines = if self.config.wrap_tooltip {
            wrap_text(&record.text, self.config.wrap_columns as usize)
        } else {
            record.text.lines().map(str::to_owned).collect()
        };

        TextBox {
            lines,
            background: apply_opacity(self.config.background_or(self.host_background), opacity),
            text_color: apply_opacity(overlay_colors::WHITE, opacity),
            opacity,
            layer: self.config.overlay_layer,
        }
    }

    fn trim_side_tables(&mut self, any_anchored: bool) {
        if !any_anchored || self.sizes.len() > SIDE_TABLE_LIMIT {
            self.sizes.clear();
        }
        if !any_anchored || self.bounds.len() > SIDE_TABLE_LIMIT {
            self.bounds.clear();
        }
    }
}

#[cfg(test)]
mod overlay_tests;
