//! Examine overlay core
//!
//! The event path of the examine overlay: classify incoming text, queue
//! examine actions as intents, pair the two, and keep the most recent
//! resolved records for the render path to read.
//!
//! ```text
//! user action ──► IntentQueue ─┐
//!                              ├─► Correlator ──► RecencyStore ──► schedule() ──► overlay
//! text event ──► classify() ───┘
//! ```

pub mod classifier;
pub mod context;
pub mod correlator;
pub mod intents;
pub mod kinds;
pub mod schedule;
pub mod store;

// Re-exports for convenience
pub use classifier::{Classified, PriceCheck, classify};
pub use context::{ConfigError, ExamineConfig, ExamineConfigExt, OverlayLayer};
pub use correlator::{Correlation, Correlator};
pub use intents::{ActionKind, GameTick, IntentQueue, Origin, PendingIntent, UserAction};
pub use kinds::{AnchorStrategy, Channel, ExamineKind, KindRule, Pairing};
pub use schedule::{DisplayTimings, Scheduled, schedule};
pub use store::{ExamineRecord, RecencyStore, RecordId, STORE_CAPACITY};
