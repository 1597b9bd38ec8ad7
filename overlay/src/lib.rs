//! Examine Overlay Library
//!
//! Render path of the examine overlay: decides where each visible record is
//! drawn this cycle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    overlay                          │
//! │                 ExamineOverlay                      │
//! │   (per-cycle driver, size and bounds side tables)   │
//! ├──────────────────────────┬──────────────────────────┤
//! │         anchor/          │         layout           │
//! │      AnchorResolver      │   initial position and   │
//! │   (fallback chain, slot  │   clamp to viewport or   │
//! │       addressing)        │         canvas           │
//! ├──────────────────────────┴──────────────────────────┤
//! │            scene              │       surface       │
//! │          SceneQuery           │    RenderSurface    │
//! │    (host game state seam)     │  (host draw seam)   │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod anchor;
pub mod fake;
pub mod geometry;
pub mod layout;
pub mod overlay;
pub mod scene;
pub mod surface;
pub mod utils;

// Re-export commonly used types
pub use anchor::{AnchorResolver, AnchorSource, Resolution};
pub use geometry::{Point, Rect, Size};
pub use overlay::{ExamineOverlay, RenderOutcome, SIDE_TABLE_LIMIT};
pub use scene::{ObjectLayer, SceneQuery, SceneTile, TileLevel, TileObject, WidgetId};
pub use surface::{RenderSurface, TextBox};
