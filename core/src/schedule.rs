//! Display scheduling
//!
//! Computes, for each stored record, whether it is still visible and at what
//! opacity. Pure function of (resolution time, kind, configured timings, now);
//! nothing is carried between render cycles and records are never mutated.

use std::time::{Duration, Instant};

use examine_types::ExamineConfig;

use crate::kinds::ExamineKind;
use crate::store::{ExamineRecord, RecencyStore};

/// Timing settings used by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTimings {
    pub base_timeout: Duration,
    /// Added to the base timeout for farming patch inspects
    pub patch_extra: Duration,
    /// Length of the linear fade at the end of the lifetime, zero disables fading
    pub fade: Duration,
}

impl DisplayTimings {
    pub fn from_config(config: &ExamineConfig) -> Self {
        Self {
            base_timeout: Duration::from_secs(config.tooltip_timeout_secs as u64),
            patch_extra: Duration::from_secs(config.patch_inspect_extra_secs as u64),
            fade: Duration::from_millis(config.tooltip_fadeout_ms as u64),
        }
    }

    pub fn timeout_for(&self, kind: ExamineKind) -> Duration {
        match kind {
            ExamineKind::FarmingPatchInspect => self.base_timeout + self.patch_extra,
            _ => self.base_timeout,
        }
    }

    /// Opacity for a record at `now`, or `None` when its lifetime has elapsed
    pub fn opacity_at(&self, record: &ExamineRecord, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(record.resolved_at);
        let timeout = self.timeout_for(record.kind);
        if elapsed >= timeout {
            return None;
        }

        let remaining = timeout - elapsed;
        if !self.fade.is_zero() && remaining < self.fade {
            let ratio = remaining.as_secs_f64() / self.fade.as_secs_f64();
            Some(ratio.clamp(0.0, 1.0) as f32)
        } else {
            Some(1.0)
        }
    }
}

impl Default for DisplayTimings {
    fn default() -> Self {
        Self::from_config(&ExamineConfig::default())
    }
}

/// A record that should be drawn this cycle
#[derive(Debug, Clone, Copy)]
pub struct Scheduled<'a> {
    pub record: &'a ExamineRecord,
    pub opacity: f32,
}

/// Visible records in store order (oldest first)
pub fn schedule<'a>(store: &'a RecencyStore, timings: &DisplayTimings, now: Instant) -> Vec<Scheduled<'a>> {
    store
        .iter()
        .filter_map(|record| {
            timings
                .opacity_at(record, now)
                .map(|opacity| Scheduled { record, opacity })
        })
        .collect()
}
