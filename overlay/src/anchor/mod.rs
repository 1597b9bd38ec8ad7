//! Anchor resolution
//!
//! Finds where on screen the origin of a record is this frame. Stops at the
//! first step that yields a rectangle:
//!
//! 1. Live lookup by kind (NPC index, interface widget slot, tile object or item)
//! 2. The same tile lookup on the tile's bridge tile
//! 3. Screen projection of the tile itself (tile kinds only)
//! 4. The last rectangle resolved for this record, if enabled
//! 5. A cursor tooltip for this cycle, if enabled; otherwise nothing
//!
//! Resolution never mutates the record.

mod slots;

pub use slots::{
    BANK_GROUP, BANK_INVENTORY_GROUP, EQUIPMENT_BONUSES_GROUP, EQUIPMENT_GROUP, INVENTORY_GROUP,
    LOOTING_BAG_GROUP, SHOP_GROUP, SHOP_INVENTORY_GROUP, SlotAddressing, addressing_for,
    find_item_bounds,
};

use examine_core::{AnchorStrategy, ExamineConfig, ExamineKind, ExamineRecord, Origin};

use crate::geometry::Rect;
use crate::scene::{SceneQuery, SceneTile, TileLevel, WidgetId};

/// Which step of the chain produced the rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSource {
    Live,
    Bridge,
    TileProjection,
    Remembered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Anchored { bounds: Rect, source: AnchorSource },
    /// Draw as a cursor tooltip this cycle
    Tooltip,
    /// Draw nothing this cycle
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorResolver {
    pub previous_bounds_fallback: bool,
    pub tooltip_fallback: bool,
}

impl Default for AnchorResolver {
    fn default() -> Self {
        Self::from_config(&ExamineConfig::default())
    }
}

impl AnchorResolver {
    pub fn from_config(config: &ExamineConfig) -> Self {
        Self {
            previous_bounds_fallback: config.previous_bounds_fallback,
            tooltip_fallback: config.tooltip_fallback,
        }
    }

    /// Resolve the anchor of `record`. `remembered` is the last rectangle
    /// resolved for this exact record, if any.
    pub fn resolve(&self, record: &ExamineRecord, scene: &dyn SceneQuery, remembered: Option<Rect>) -> Resolution {
        let found = record
            .origin
            .and_then(|origin| locate(record.kind, origin, scene));

        if let Some((bounds, source)) = found {
            return Resolution::Anchored { bounds, source };
        }

        if self.previous_bounds_fallback {
            if let Some(bounds) = remembered {
                return Resolution::Anchored {
                    bounds,
                    source: AnchorSource::Remembered,
                };
            }
        }

        if self.tooltip_fallback {
            Resolution::Tooltip
        } else {
            Resolution::Skip
        }
    }
}

/// Steps 1 to 3 of the chain
fn locate(kind: ExamineKind, origin: Origin, scene: &dyn SceneQuery) -> Option<(Rect, AnchorSource)> {
    match kind.rule().anchor {
        AnchorStrategy::None => None,
        AnchorStrategy::Npc => scene
            .npc_bounds(origin.id)
            .map(|r| (r, AnchorSource::Live)),
        AnchorStrategy::Widget => find_item_bounds(scene, WidgetId(origin.widget_id()), origin.slot())
            .map(|r| (r, AnchorSource::Live)),
        AnchorStrategy::Tile => locate_on_tile(kind, origin, scene),
    }
}

fn locate_on_tile(kind: ExamineKind, origin: Origin, scene: &dyn SceneQuery) -> Option<(Rect, AnchorSource)> {
    let tile = SceneTile {
        x: origin.scene_x(),
        y: origin.scene_y(),
    };
    if !scene.has_tile(tile) {
        return None;
    }

    if let Some(bounds) = find_on_tile(kind, origin.id, tile, TileLevel::Ground, scene) {
        return Some((bounds, AnchorSource::Live));
    }

    if scene.has_bridge(tile) {
        if let Some(bounds) = find_on_tile(kind, origin.id, tile, TileLevel::Bridge, scene) {
            return Some((bounds, AnchorSource::Bridge));
        }
    }

    scene
        .tile_bounds(tile)
        .map(|r| (r, AnchorSource::TileProjection))
}

fn find_on_tile(kind: ExamineKind, id: i32, tile: SceneTile, level: TileLevel, scene: &dyn SceneQuery) -> Option<Rect> {
    if kind == ExamineKind::ItemOnGround {
        return scene.ground_item_bounds(tile, level, id);
    }

    let mut objects = scene.tile_objects(tile, level);
    objects.sort_by_key(|o| o.layer);
    objects
        .iter()
        .filter(|o| object_id_matches(scene, o.id, id))
        .find_map(|o| o.hull)
}

/// The examine action reports the transformed object id, so also match the
/// object's impostor ids.
fn object_id_matches(scene: &dyn SceneQuery, object_id: i32, examined_id: i32) -> bool {
    object_id == examined_id || scene.impostor_ids(object_id).contains(&examined_id)
}
