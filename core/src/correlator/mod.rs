//! Action/text correlation
//!
//! Pairs each classified text event with the action that caused it and
//! appends the result to the [`RecencyStore`]. The correlator is the only
//! writer of the intent queue, the inspect slot and the store; the render
//! path only reads the store.
//!
//! # Pairing
//!
//! - Standalone kinds (price check, patch payment) become records directly.
//! - Farming patch inspects consume the single inspect slot.
//! - Everything else pops the oldest queued intent. A channel or kind
//!   mismatch, or a tick skew past the grace window, is a desync: the whole
//!   queue is cleared and the text is dropped. No guessing.

use std::time::Instant;

use examine_types::ExamineConfig;

use crate::classifier::{Classified, classify};
use crate::intents::{GameTick, IntentQueue, PendingIntent, UserAction};
use crate::kinds::{Channel, Pairing};
use crate::store::{ExamineRecord, RecencyStore, RecordId};

/// Outcome of feeding one event to the correlator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correlation {
    /// Action queued (or placed in the inspect slot)
    Queued,
    /// Text paired with an intent and stored
    Resolved(RecordId),
    /// Standalone text stored without an intent
    Direct(RecordId),
    /// Paired or standalone, but the kind is hidden by configuration
    Hidden,
    /// Mismatch detected; the queue was cleared
    Desync { dropped_intents: usize },
    /// Text needs an intent but none is pending
    NoIntent,
    /// Not examine related
    Ignored,
}

#[derive(Debug, Default)]
pub struct Correlator {
    intents: IntentQueue,
    store: RecencyStore,
    config: ExamineConfig,
}

impl Correlator {
    pub fn new(config: ExamineConfig) -> Self {
        Self {
            intents: IntentQueue::new(),
            store: RecencyStore::new(),
            config,
        }
    }

    pub fn set_config(&mut self, config: ExamineConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ExamineConfig {
        &self.config
    }

    pub fn store(&self) -> &RecencyStore {
        &self.store
    }

    pub fn intents(&self) -> &IntentQueue {
        &self.intents
    }

    /// Session boundary (world reload, login screen, plugin start/stop)
    pub fn reset(&mut self) {
        self.intents.clear();
        self.store.clear();
        tracing::debug!("Examine state reset");
    }

    /// Record a user action as a pending intent
    pub fn on_action(&mut self, action: &UserAction, tick: GameTick) -> Correlation {
        let Some(intent) = PendingIntent::from_action(action, tick) else {
            return Correlation::Ignored;
        };

        tracing::debug!(kind = ?intent.kind, id = intent.origin.id, tick, "Examine intent");

        match intent.kind.rule().pairing {
            Pairing::InspectSlot => {
                if let Some(replaced) = self.intents.set_inspect(intent) {
                    tracing::debug!(id = replaced.origin.id, "Replaced unfinished inspect");
                }
            }
            Pairing::Queued => self.intents.push(intent),
            Pairing::Standalone => return Correlation::Ignored,
        }
        Correlation::Queued
    }

    /// Classify and correlate a text event
    pub fn on_message(&mut self, channel: Channel, text: &str, tick: GameTick, now: Instant) -> Correlation {
        match classify(channel, text) {
            Some(classified) => self.on_classified(classified, tick, now),
            None => Correlation::Ignored,
        }
    }

    /// Correlate an already classified text event
    pub fn on_classified(&mut self, message: Classified, tick: GameTick, now: Instant) -> Correlation {
        let rule = message.kind.rule();
        match rule.pairing {
            Pairing::Standalone => {
                if !(rule.visible)(&self.config) {
                    return Correlation::Hidden;
                }
                let record = ExamineRecord::new(message.kind, message.text, now).with_price(message.price);
                Correlation::Direct(self.push(record))
            }
            Pairing::InspectSlot => {
                if self.intents.inspect().is_none() || !(rule.visible)(&self.config) {
                    return Correlation::NoIntent;
                }
                match self.intents.take_inspect() {
                    Some(intent) => Correlation::Resolved(self.resolve(intent, message, now)),
                    None => Correlation::NoIntent,
                }
            }
            Pairing::Queued => self.pair_with_oldest(message, tick, now),
        }
    }

    fn pair_with_oldest(&mut self, message: Classified, tick: GameTick, now: Instant) -> Correlation {
        let Some(intent) = self.intents.pop_oldest() else {
            return Correlation::NoIntent;
        };

        let intent_rule = intent.kind.rule();
        let skew = tick.abs_diff(intent.tick);
        let in_window = skew <= self.config.tick_grace as u64;

        let accepted = intent.expected_channels.contains(&message.channel)
            && intent_rule.satisfied_by.contains(&message.kind);

        if !in_window || !accepted {
            let dropped_intents = 1 + self.intents.clear_queue();
            tracing::debug!(
                expected = ?intent.kind,
                expected_channels = ?intent.expected_channels,
                actual = ?message.kind,
                channel = ?message.channel,
                skew,
                dropped_intents,
                "Examine desync, clearing pending intents"
            );
            return Correlation::Desync { dropped_intents };
        }

        if !(intent_rule.visible)(&self.config) {
            return Correlation::Hidden;
        }

        Correlation::Resolved(self.resolve(intent, message, now))
    }

    fn resolve(&mut self, intent: PendingIntent, message: Classified, now: Instant) -> RecordId {
        let mut record = ExamineRecord::new(intent.kind, message.text, now)
            .with_origin(intent.origin)
            .with_price(message.price);
        if !intent.target.is_empty() {
            record = record.with_target(intent.target);
        }
        let id = self.push(record);
        tracing::debug!(id = id.0, kind = ?intent.kind, "Examine resolved");
        id
    }

    fn push(&mut self, record: ExamineRecord) -> RecordId {
        self.store.push(record)
    }
}
