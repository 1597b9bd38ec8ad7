//! Replay script format
//!
//! A script is a TOML file with an optional `[scene]` table describing what
//! the fake host can see, and a list of `[[event]]` entries replayed in order:
//!
//! ```toml
//! [scene]
//! viewport = [4, 4, 512, 334]
//!
//! [[scene.npc]]
//! index = 17
//! bounds = [200, 120, 40, 90]
//!
//! [[event]]
//! at_ms = 0
//! tick = 100
//! action = { kind = "examine_npc", id = 17, param0 = 0, param1 = 0, option = "Examine" }
//!
//! [[event]]
//! at_ms = 30
//! tick = 100
//! message = { channel = "npc_examine", text = "A guard of the city." }
//!
//! [[event]]
//! at_ms = 100
//! render = true
//! ```

use std::path::Path;

use serde::Deserialize;

use examine_core::{Channel, GameTick, UserAction};
use examine_overlay::fake::FakeScene;
use examine_overlay::{ObjectLayer, Rect, SceneTile, TileLevel, TileObject, WidgetId};

use crate::error::ReplayError;

/// `[x, y, width, height]`
pub type RectSpec = [i32; 4];

fn rect(r: RectSpec) -> Rect {
    Rect::new(r[0], r[1], r[2], r[3])
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub scene: SceneSpec,
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Load a script from a TOML file
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ReplayError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct MessageSpec {
    pub channel: Channel,
    pub text: String,
}

/// One scripted event. Exactly one of the payload fields must be set.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptEvent {
    /// Milliseconds since the start of the replay
    pub at_ms: u64,
    #[serde(default)]
    pub tick: GameTick,
    #[serde(default)]
    pub action: Option<UserAction>,
    #[serde(default)]
    pub message: Option<MessageSpec>,
    /// Index of an NPC that leaves the scene
    #[serde(default)]
    pub despawn_npc: Option<i32>,
    #[serde(default)]
    pub reset: bool,
    #[serde(default)]
    pub render: bool,
}

/// Payload of a [`ScriptEvent`]
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    Action(&'a UserAction),
    Message(&'a MessageSpec),
    DespawnNpc(i32),
    Reset,
    Render,
}

impl ScriptEvent {
    pub fn step(&self, index: usize) -> Result<Step<'_>, ReplayError> {
        let mut steps = Vec::with_capacity(1);
        if let Some(action) = &self.action {
            steps.push(Step::Action(action));
        }
        if let Some(message) = &self.message {
            steps.push(Step::Message(message));
        }
        if let Some(npc) = self.despawn_npc {
            steps.push(Step::DespawnNpc(npc));
        }
        if self.reset {
            steps.push(Step::Reset);
        }
        if self.render {
            steps.push(Step::Render);
        }

        match steps.as_slice() {
            [step] => Ok(*step),
            [] => Err(ReplayError::InvalidEvent {
                index,
                reason: "event has no payload",
            }),
            _ => Err(ReplayError::InvalidEvent {
                index,
                reason: "event has more than one payload",
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scene
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SceneSpec {
    #[serde(default = "default_canvas")]
    pub canvas: RectSpec,
    #[serde(default = "default_canvas")]
    pub viewport: RectSpec,
    #[serde(default, rename = "npc")]
    pub npcs: Vec<NpcSpec>,
    #[serde(default, rename = "widget")]
    pub widgets: Vec<WidgetSpec>,
    #[serde(default, rename = "tile")]
    pub tiles: Vec<TileSpec>,
    #[serde(default, rename = "impostor")]
    pub impostors: Vec<ImpostorSpec>,
}

fn default_canvas() -> RectSpec {
    [0, 0, 765, 503]
}

impl Default for SceneSpec {
    fn default() -> Self {
        Self {
            canvas: default_canvas(),
            viewport: default_canvas(),
            npcs: Vec::new(),
            widgets: Vec::new(),
            tiles: Vec::new(),
            impostors: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NpcSpec {
    pub index: i32,
    pub bounds: RectSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WidgetSpec {
    pub group: u16,
    #[serde(default)]
    pub child: u16,
    pub bounds: RectSpec,
    #[serde(default, rename = "slot")]
    pub slots: Vec<SlotSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotSpec {
    pub index: i32,
    pub bounds: RectSpec,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelSpec {
    #[default]
    Ground,
    Bridge,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerSpec {
    #[default]
    Game,
    Ground,
    Decorative,
    Wall,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TileSpec {
    pub x: i32,
    pub y: i32,
    /// Screen projection of the tile, absent when off screen
    #[serde(default)]
    pub bounds: Option<RectSpec>,
    #[serde(default)]
    pub bridge: bool,
    #[serde(default, rename = "object")]
    pub objects: Vec<ObjectSpec>,
    #[serde(default, rename = "item")]
    pub items: Vec<GroundItemSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectSpec {
    pub id: i32,
    #[serde(default)]
    pub layer: LayerSpec,
    #[serde(default)]
    pub level: LevelSpec,
    #[serde(default)]
    pub hull: Option<RectSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroundItemSpec {
    pub id: i32,
    #[serde(default)]
    pub level: LevelSpec,
    pub bounds: RectSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImpostorSpec {
    pub id: i32,
    pub ids: Vec<i32>,
}

impl From<LevelSpec> for TileLevel {
    fn from(level: LevelSpec) -> Self {
        match level {
            LevelSpec::Ground => TileLevel::Ground,
            LevelSpec::Bridge => TileLevel::Bridge,
        }
    }
}

impl From<LayerSpec> for ObjectLayer {
    fn from(layer: LayerSpec) -> Self {
        match layer {
            LayerSpec::Game => ObjectLayer::Game,
            LayerSpec::Ground => ObjectLayer::Ground,
            LayerSpec::Decorative => ObjectLayer::Decorative,
            LayerSpec::Wall => ObjectLayer::Wall,
        }
    }
}

impl SceneSpec {
    pub fn build(&self) -> FakeScene {
        let mut scene = FakeScene::new()
            .with_canvas(rect(self.canvas))
            .with_viewport(rect(self.viewport));

        for npc in &self.npcs {
            scene = scene.with_npc(npc.index, rect(npc.bounds));
        }

        for widget in &self.widgets {
            let id = WidgetId::new(widget.group, widget.child);
            scene = scene.with_widget(id, rect(widget.bounds));
            for slot in &widget.slots {
                scene = scene.with_widget_child(id, slot.index, rect(slot.bounds));
            }
        }

        for entry in &self.tiles {
            let tile = SceneTile { x: entry.x, y: entry.y };
            scene = scene.with_tile(tile);
            if entry.bridge {
                scene = scene.with_bridge(tile);
            }
            if let Some(bounds) = entry.bounds {
                scene = scene.with_tile_bounds(tile, rect(bounds));
            }
            for object in &entry.objects {
                let placed = TileObject {
                    id: object.id,
                    layer: object.layer.into(),
                    hull: object.hull.map(rect),
                };
                scene = scene.with_object(tile, object.level.into(), placed);
            }
            for item in &entry.items {
                scene = scene.with_ground_item(tile, item.level.into(), item.id, rect(item.bounds));
            }
        }

        for impostor in &self.impostors {
            scene = scene.with_impostors(impostor.id, &impostor.ids);
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examine_core::ActionKind;
    use examine_overlay::SceneQuery;

    const DEMO: &str = include_str!("../scripts/demo.toml");

    #[test]
    fn test_demo_script_parses() {
        let script: Script = toml::from_str(DEMO).unwrap();
        assert!(!script.events.is_empty());
        for (index, event) in script.events.iter().enumerate() {
            event.step(index).unwrap();
        }
    }

    #[test]
    fn test_event_payloads() {
        let script: Script = toml::from_str(
            r#"
            [[event]]
            at_ms = 0
            tick = 5
            action = { kind = "examine_object", id = 1276, param0 = 52, param1 = 48, option = "Examine", target = "Tree" }

            [[event]]
            at_ms = 10
            message = { channel = "object_examine", text = "A commonly found tree." }

            [[event]]
            at_ms = 20
            render = true
            reset = true

            [[event]]
            at_ms = 30
            "#,
        )
        .unwrap();

        let Step::Action(action) = script.events[0].step(0).unwrap() else {
            panic!("expected action");
        };
        assert_eq!(action.kind, ActionKind::ExamineObject);
        assert_eq!(action.target, "Tree");
        assert_eq!(script.events[0].tick, 5);

        assert!(matches!(
            script.events[1].step(1).unwrap(),
            Step::Message(m) if m.channel == Channel::ObjectExamine
        ));
        assert!(matches!(
            script.events[2].step(2),
            Err(ReplayError::InvalidEvent { index: 2, .. })
        ));
        assert!(matches!(
            script.events[3].step(3),
            Err(ReplayError::InvalidEvent { index: 3, .. })
        ));
    }

    #[test]
    fn test_scene_build() {
        let script: Script = toml::from_str(
            r#"
            [scene]
            viewport = [4, 4, 512, 334]

            [[scene.npc]]
            index = 17
            bounds = [200, 120, 40, 90]

            [[scene.widget]]
            group = 149
            bounds = [550, 200, 180, 260]
            slot = [{ index = 3, bounds = [600, 205, 36, 32] }]

            [[scene.tile]]
            x = 52
            y = 48
            bridge = true
            object = [{ id = 1276, level = "bridge", hull = [10, 10, 50, 80] }]
            "#,
        )
        .unwrap();

        let scene = script.scene.build();
        let tile = SceneTile { x: 52, y: 48 };
        assert_eq!(scene.viewport(), Rect::new(4, 4, 512, 334));
        assert_eq!(scene.canvas(), Rect::new(0, 0, 765, 503));
        assert_eq!(scene.npc_bounds(17), Some(Rect::new(200, 120, 40, 90)));
        assert_eq!(
            scene.widget_child_bounds(WidgetId::new(149, 0), 3),
            Some(Rect::new(600, 205, 36, 32))
        );
        assert!(scene.has_bridge(tile));
        assert_eq!(scene.tile_objects(tile, TileLevel::Bridge).len(), 1);
        assert!(scene.tile_objects(tile, TileLevel::Ground).is_empty());
    }
}
