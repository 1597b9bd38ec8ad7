//! Scripted replay of an examine session
//!
//! Feeds script events through a [`Correlator`] and renders the recency store
//! with an [`ExamineOverlay`] against a fake scene. Time is virtual: each
//! event's `at_ms` is added to the instant the replay started, so a replay
//! never sleeps and always produces the same transcript.

use std::time::{Duration, Instant};

use examine_core::{Correlation, Correlator, ExamineConfig, RecencyStore};
use examine_overlay::fake::FakeScene;
use examine_overlay::{ExamineOverlay, Point, RenderOutcome, RenderSurface, Size, TextBox};
use examine_types::overlay_colors;

use crate::error::ReplayError;
use crate::script::{Script, Step};

/// Approximate glyph metrics used to size boxes in the transcript
const CHAR_WIDTH: i32 = 6;
const LINE_HEIGHT: i32 = 14;
const BOX_PADDING: i32 = 4;

/// Render surface that writes draw calls to the transcript
#[derive(Debug, Default)]
pub struct TranscriptSurface {
    lines: Vec<String>,
}

impl TranscriptSurface {
    fn measure(text_box: &TextBox) -> Size {
        let widest = text_box
            .lines
            .iter()
            .map(|l| l.chars().count() as i32)
            .max()
            .unwrap_or(0);
        Size::new(
            widest * CHAR_WIDTH + 2 * BOX_PADDING,
            text_box.lines.len() as i32 * LINE_HEIGHT + 2 * BOX_PADDING,
        )
    }

    fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl RenderSurface for TranscriptSurface {
    fn draw_box(&mut self, text_box: &TextBox, position: Point) -> Size {
        let size = Self::measure(text_box);
        self.lines.push(format!(
            "  box     ({:>4},{:>4}) {:>3}x{:<3} a={:.2} | {}",
            position.x,
            position.y,
            size.width,
            size.height,
            text_box.opacity,
            text_box.lines.join(" / ")
        ));
        size
    }

    fn draw_tooltip(&mut self, text_box: &TextBox) {
        self.lines.push(format!(
            "  tooltip a={:.2} | {}",
            text_box.opacity,
            text_box.lines.join(" / ")
        ));
    }
}

/// Counters reported at the end of a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub resolved: usize,
    pub desyncs: usize,
    pub dropped: usize,
    pub renders: usize,
}

pub struct Replay {
    correlator: Correlator,
    overlay: ExamineOverlay,
    scene: FakeScene,
    surface: TranscriptSurface,
    started_at: Instant,
    summary: ReplaySummary,
    transcript: Vec<String>,
}

impl Replay {
    pub fn new(config: ExamineConfig, scene: FakeScene) -> Self {
        Self {
            correlator: Correlator::new(config.clone()),
            overlay: ExamineOverlay::new(config, overlay_colors::TOOLTIP_BG),
            scene,
            surface: TranscriptSurface::default(),
            started_at: Instant::now(),
            summary: ReplaySummary::default(),
            transcript: Vec::new(),
        }
    }

    pub fn store(&self) -> &RecencyStore {
        self.correlator.store()
    }

    pub fn summary(&self) -> ReplaySummary {
        self.summary
    }

    /// Lines written so far
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Replay every event of `script` in order
    pub fn run(&mut self, script: &Script) -> Result<ReplaySummary, ReplayError> {
        let mut previous_ms = 0;
        for (index, event) in script.events.iter().enumerate() {
            if event.at_ms < previous_ms {
                return Err(ReplayError::OutOfOrder {
                    index,
                    at_ms: event.at_ms,
                    previous_ms,
                });
            }
            previous_ms = event.at_ms;

            let now = self.started_at + Duration::from_millis(event.at_ms);
            let step = event.step(index)?;
            self.summary.events += 1;

            match step {
                Step::Action(action) => {
                    let outcome = self.correlator.on_action(action, event.tick);
                    self.log(event.at_ms, format!("action  {:?} {} -> {:?}", action.kind, action.id, outcome));
                }
                Step::Message(message) => {
                    let outcome = self
                        .correlator
                        .on_message(message.channel, &message.text, event.tick, now);
                    self.count(&outcome);
                    self.log(event.at_ms, format!("message {:?} {:?} -> {:?}", message.channel, message.text, outcome));
                }
                Step::DespawnNpc(index) => {
                    self.scene = std::mem::take(&mut self.scene).without_npc(index);
                    self.log(event.at_ms, format!("despawn npc {index}"));
                }
                Step::Reset => {
                    self.correlator.reset();
                    self.overlay.reset();
                    self.log(event.at_ms, "reset".to_string());
                }
                Step::Render => self.render(event.at_ms, now),
            }
        }

        tracing::info!(summary = ?self.summary, "Replay finished");
        Ok(self.summary)
    }

    fn render(&mut self, at_ms: u64, now: Instant) {
        self.summary.renders += 1;
        let outcomes = self
            .overlay
            .render(self.correlator.store(), &self.scene, &mut self.surface, now);

        let skipped = outcomes
            .iter()
            .filter(|o| matches!(o, RenderOutcome::Skipped { .. }))
            .count();
        let mut header = format!("render  {} visible", outcomes.len());
        if skipped > 0 {
            header.push_str(&format!(", {skipped} skipped"));
        }
        self.log(at_ms, header);
        let drawn = self.surface.take();
        self.transcript.extend(drawn);
    }

    fn count(&mut self, outcome: &Correlation) {
        match outcome {
            Correlation::Resolved(_) | Correlation::Direct(_) => self.summary.resolved += 1,
            Correlation::Desync { .. } => self.summary.desyncs += 1,
            Correlation::NoIntent | Correlation::Hidden => self.summary.dropped += 1,
            Correlation::Queued | Correlation::Ignored => {}
        }
    }

    fn log(&mut self, at_ms: u64, line: String) {
        self.transcript.push(format!("{at_ms:>6} ms  {line}"));
    }
}
