use std::collections::VecDeque;

use super::PendingIntent;

/// Strict FIFO of pending intents plus the single inspect slot.
///
/// The inspect slot is independent of the queue: an inspect needs the player
/// to walk before the answer arrives, so a newer inspect replaces an older
/// unfinished one instead of queueing behind it.
#[derive(Debug, Default)]
pub struct IntentQueue {
    pending: VecDeque<PendingIntent>,
    inspect: Option<PendingIntent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: PendingIntent) {
        self.pending.push_back(intent);
    }

    pub fn pop_oldest(&mut self) -> Option<PendingIntent> {
        self.pending.pop_front()
    }

    pub fn peek_oldest(&self) -> Option<&PendingIntent> {
        self.pending.front()
    }

    /// Drop every queued intent. Returns how many were dropped.
    /// The inspect slot is left alone.
    pub fn clear_queue(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingIntent> {
        self.pending.iter()
    }

    /// Occupy the inspect slot, returning the intent it replaced
    pub fn set_inspect(&mut self, intent: PendingIntent) -> Option<PendingIntent> {
        self.inspect.replace(intent)
    }

    pub fn take_inspect(&mut self) -> Option<PendingIntent> {
        self.inspect.take()
    }

    pub fn inspect(&self) -> Option<&PendingIntent> {
        self.inspect.as_ref()
    }

    /// Clear queue and inspect slot
    pub fn clear(&mut self) {
        self.pending.clear();
        self.inspect = None;
    }
}
