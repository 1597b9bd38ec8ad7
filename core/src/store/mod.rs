//! Recency store of resolved examine records
//!
//! Fixed capacity, insertion ordered, oldest first. Pushing a record whose
//! text matches an existing one removes the old entry before appending, so
//! re-examining the same thing refreshes its age instead of duplicating it.
//! Two different entities with identical text are merged this way too.

use std::collections::VecDeque;
use std::time::Instant;

use crate::classifier::PriceCheck;
use crate::intents::Origin;
use crate::kinds::ExamineKind;

/// Number of records kept
pub const STORE_CAPACITY: usize = 5;

/// Identity of a record, assigned by the store on push
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RecordId(pub u64);

/// A resolved examine, eligible for display
#[derive(Debug, Clone, PartialEq)]
pub struct ExamineRecord {
    id: RecordId,
    pub kind: ExamineKind,
    /// Identifiers of the examined entity, `None` for standalone text
    pub origin: Option<Origin>,
    pub text: String,
    /// When the text was resolved; the display lifetime counts from here
    pub resolved_at: Instant,
    /// Menu target of the originating action
    pub target: Option<String>,
    pub price: Option<PriceCheck>,
}

impl ExamineRecord {
    pub fn new(kind: ExamineKind, text: impl Into<String>, resolved_at: Instant) -> Self {
        Self {
            id: RecordId::default(),
            kind,
            origin: None,
            text: text.into(),
            resolved_at,
            target: None,
            price: None,
        }
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_price(mut self, price: Option<PriceCheck>) -> Self {
        self.price = price;
        self
    }

    pub fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug)]
pub struct RecencyStore {
    records: VecDeque<ExamineRecord>,
    capacity: usize,
    next_id: u64,
}

impl Default for RecencyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecencyStore {
    pub fn new() -> Self {
        Self::with_capacity(STORE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity + 1),
            capacity: capacity.max(1),
            next_id: 1,
        }
    }

    /// Dedup by text, append, then evict from the head past capacity
    pub fn push(&mut self, mut record: ExamineRecord) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        record.id = id;

        let before = self.records.len();
        self.records.retain(|r| r.text != record.text);
        if self.records.len() != before {
            tracing::trace!(text = %record.text, "Replacing record with identical text");
        }

        self.records.push_back(record);
        while self.records.len() > self.capacity {
            if let Some(evicted) = self.records.pop_front() {
                tracing::trace!(id = evicted.id.0, "Evicted oldest record");
            }
        }
        id
    }

    /// Records oldest first
    pub fn iter(&self) -> impl Iterator<Item = &ExamineRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: RecordId) -> Option<&ExamineRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn newest(&self) -> Option<&ExamineRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
