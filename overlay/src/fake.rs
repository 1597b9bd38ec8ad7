//! In-memory scene and render surface, used by tests and offline replay

use hashbrown::{HashMap, HashSet};

use crate::geometry::{Point, Rect, Size};
use crate::scene::{SceneQuery, SceneTile, TileLevel, TileObject, WidgetId};
use crate::surface::{RenderSurface, TextBox};

/// In-memory scene; anything not added is absent
#[derive(Debug, Clone)]
pub struct FakeScene {
    canvas: Rect,
    viewport: Rect,
    npcs: HashMap<i32, Rect>,
    widgets: HashMap<WidgetId, Rect>,
    widget_children: HashMap<(WidgetId, i32), Rect>,
    tiles: HashSet<SceneTile>,
    bridges: HashSet<SceneTile>,
    objects: HashMap<(SceneTile, TileLevel), Vec<TileObject>>,
    ground_items: HashMap<(SceneTile, TileLevel, i32), Rect>,
    impostors: HashMap<i32, Vec<i32>>,
    tile_bounds: HashMap<SceneTile, Rect>,
}

impl Default for FakeScene {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeScene {
    pub fn new() -> Self {
        Self {
            canvas: Rect::new(0, 0, 800, 600),
            viewport: Rect::new(0, 0, 800, 600),
            npcs: HashMap::new(),
            widgets: HashMap::new(),
            widget_children: HashMap::new(),
            tiles: HashSet::new(),
            bridges: HashSet::new(),
            objects: HashMap::new(),
            ground_items: HashMap::new(),
            impostors: HashMap::new(),
            tile_bounds: HashMap::new(),
        }
    }

    pub fn with_canvas(mut self, canvas: Rect) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_viewport(mut self, viewport: Rect) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_npc(mut self, index: i32, bounds: Rect) -> Self {
        self.npcs.insert(index, bounds);
        self
    }

    pub fn with_widget(mut self, widget: WidgetId, bounds: Rect) -> Self {
        self.widgets.insert(widget, bounds);
        self
    }

    pub fn with_widget_child(mut self, widget: WidgetId, child: i32, bounds: Rect) -> Self {
        self.widget_children.insert((widget, child), bounds);
        self
    }

    pub fn with_tile(mut self, tile: SceneTile) -> Self {
        self.tiles.insert(tile);
        self
    }

    pub fn with_bridge(mut self, tile: SceneTile) -> Self {
        self.bridges.insert(tile);
        self
    }

    pub fn with_object(mut self, tile: SceneTile, level: TileLevel, object: TileObject) -> Self {
        self.objects.entry((tile, level)).or_default().push(object);
        self
    }

    pub fn with_ground_item(mut self, tile: SceneTile, level: TileLevel, item_id: i32, bounds: Rect) -> Self {
        self.ground_items.insert((tile, level, item_id), bounds);
        self
    }

    pub fn with_impostors(mut self, object_id: i32, ids: &[i32]) -> Self {
        self.impostors.insert(object_id, ids.to_vec());
        self
    }

    pub fn with_tile_bounds(mut self, tile: SceneTile, bounds: Rect) -> Self {
        self.tile_bounds.insert(tile, bounds);
        self
    }

    /// Drop an NPC, as if it left the scene
    pub fn without_npc(mut self, index: i32) -> Self {
        self.npcs.remove(&index);
        self
    }

    pub fn without_tile(mut self, tile: SceneTile) -> Self {
        self.tiles.remove(&tile);
        self
    }
}

impl SceneQuery for FakeScene {
    fn canvas(&self) -> Rect {
        self.canvas
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn npc_bounds(&self, index: i32) -> Option<Rect> {
        self.npcs.get(&index).copied()
    }

    fn widget_bounds(&self, widget: WidgetId) -> Option<Rect> {
        self.widgets.get(&widget).copied()
    }

    fn widget_child_bounds(&self, widget: WidgetId, child: i32) -> Option<Rect> {
        self.widget_children.get(&(widget, child)).copied()
    }

    fn has_tile(&self, tile: SceneTile) -> bool {
        self.tiles.contains(&tile)
    }

    fn has_bridge(&self, tile: SceneTile) -> bool {
        self.bridges.contains(&tile)
    }

    fn tile_objects(&self, tile: SceneTile, level: TileLevel) -> Vec<TileObject> {
        self.objects.get(&(tile, level)).cloned().unwrap_or_default()
    }

    fn ground_item_bounds(&self, tile: SceneTile, level: TileLevel, item_id: i32) -> Option<Rect> {
        self.ground_items.get(&(tile, level, item_id)).copied()
    }

    fn impostor_ids(&self, object_id: i32) -> Vec<i32> {
        self.impostors.get(&object_id).cloned().unwrap_or_default()
    }

    fn tile_bounds(&self, tile: SceneTile) -> Option<Rect> {
        self.tile_bounds.get(&tile).copied()
    }
}

/// One draw call seen by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum Drawn {
    Box { text_box: TextBox, position: Point },
    Tooltip(TextBox),
}

/// Surface that records draw calls and reports a fixed box size
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub box_size: Size,
    pub drawn: Vec<Drawn>,
}

impl RecordingSurface {
    pub fn new(box_size: Size) -> Self {
        Self {
            box_size,
            drawn: Vec::new(),
        }
    }

    pub fn boxes(&self) -> Vec<(&TextBox, Point)> {
        self.drawn
            .iter()
            .filter_map(|d| match d {
                Drawn::Box { text_box, position } => Some((text_box, *position)),
                Drawn::Tooltip(_) => None,
            })
            .collect()
    }

    pub fn tooltips(&self) -> Vec<&TextBox> {
        self.drawn
            .iter()
            .filter_map(|d| match d {
                Drawn::Tooltip(text_box) => Some(text_box),
                Drawn::Box { .. } => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.drawn.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_box(&mut self, text_box: &TextBox, position: Point) -> Size {
        self.drawn.push(Drawn::Box {
            text_box: text_box.clone(),
            position,
        });
        self.box_size
    }

    fn draw_tooltip(&mut self, text_box: &TextBox) {
        self.drawn.push(Drawn::Tooltip(text_box.clone()));
    }
}
