//! Scene query seam
//!
//! The host's live game state (NPC table, widgets, scene tiles, object
//! definitions) is reached only through [`SceneQuery`]. Every lookup returns
//! an optional screen-space rectangle, so the anchor fallback chain can be
//! exercised against a fake scene.

use crate::geometry::Rect;

/// Packed interface component id: group in the high 16 bits, child in the low 16
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub i32);

impl WidgetId {
    pub const fn new(group: u16, child: u16) -> Self {
        Self(((group as i32) << 16) | child as i32)
    }

    pub fn group(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    pub fn child(&self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }
}

/// Scene tile coordinate on the current plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneTile {
    pub x: i32,
    pub y: i32,
}

/// Which copy of a tile to search: the tile itself or the bridge tile above it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileLevel {
    Ground,
    Bridge,
}

/// Object slots on a tile, in lookup order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectLayer {
    Game,
    Ground,
    Decorative,
    Wall,
}

/// An object found on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileObject {
    pub id: i32,
    pub layer: ObjectLayer,
    /// Screen bounds of the object's hull, `None` when off screen
    pub hull: Option<Rect>,
}

pub trait SceneQuery {
    /// Full client canvas
    fn canvas(&self) -> Rect;

    /// 3-D game viewport within the canvas
    fn viewport(&self) -> Rect;

    fn npc_bounds(&self, index: i32) -> Option<Rect>;

    fn widget_bounds(&self, widget: WidgetId) -> Option<Rect>;

    fn widget_child_bounds(&self, widget: WidgetId, child: i32) -> Option<Rect>;

    /// Whether the tile is loaded in the current scene
    fn has_tile(&self, tile: SceneTile) -> bool;

    /// Whether the tile has a bridge tile above it
    fn has_bridge(&self, _tile: SceneTile) -> bool {
        false
    }

    fn tile_objects(&self, tile: SceneTile, level: TileLevel) -> Vec<TileObject>;

    /// Bounds of the item pile on a tile if it contains `item_id`
    fn ground_item_bounds(&self, tile: SceneTile, level: TileLevel, item_id: i32) -> Option<Rect>;

    /// Transformed ids an object definition may present as
    fn impostor_ids(&self, _object_id: i32) -> Vec<i32> {
        Vec::new()
    }

    /// Screen projection of the tile itself
    fn tile_bounds(&self, tile: SceneTile) -> Option<Rect>;
}
