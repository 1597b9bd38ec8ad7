//! Render driver tests

use std::time::{Duration, Instant};

use examine_core::{ExamineKind, ExamineRecord, Origin, RecencyStore};
use examine_types::ExamineConfig;

use super::*;
use crate::anchor::INVENTORY_GROUP;
use crate::fake::{FakeScene, RecordingSurface};
use crate::scene::WidgetId;

const NPC: i32 = 17;

fn npc_record(text: &str, at: Instant) -> ExamineRecord {
    ExamineRecord::new(ExamineKind::Npc, text, at).with_origin(Origin {
        id: NPC,
        param0: 0,
        param1: 0,
    })
}

fn ms(t0: Instant, millis: u64) -> Instant {
    t0 + Duration::from_millis(millis)
}

fn new_surface() -> RecordingSurface {
    RecordingSurface::new(Size::new(200, 40))
}

#[test]
fn test_anchored_box_clamped_from_second_cycle() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    let id = store.push(npc_record("A guard.", t0));
    let scene = FakeScene::new().with_npc(NPC, Rect::new(750, 100, 40, 80));
    let mut overlay = ExamineOverlay::default();

    // No size known yet, drawn where it lands
    let mut surface = new_surface();
    let outcomes = overlay.render(&store, &scene, &mut surface, ms(t0, 100));
    assert_eq!(
        outcomes,
        [RenderOutcome::Anchored {
            id,
            position: Point::new(740, 190),
            source: AnchorSource::Live
        }]
    );
    assert_eq!(overlay.remembered_size(id), Some(Size::new(200, 40)));

    let mut surface = new_surface();
    overlay.render(&store, &scene, &mut surface, ms(t0, 200));
    assert_eq!(surface.boxes()[0].1, Point::new(595, 190));
}

#[test]
fn test_world_box_unclamped_when_disabled() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    store.push(npc_record("A guard.", t0));
    let scene = FakeScene::new().with_npc(NPC, Rect::new(750, 100, 40, 80));
    let config = ExamineConfig {
        clamp_anchored: false,
        ..Default::default()
    };
    let mut overlay = ExamineOverlay::new(config, overlay_colors::TOOLTIP_BG);

    for at in [100, 200] {
        let mut surface = new_surface();
        overlay.render(&store, &scene, &mut surface, ms(t0, at));
        assert_eq!(surface.boxes()[0].1, Point::new(740, 190));
    }
}

#[test]
fn test_interface_box_always_clamped_to_canvas() {
    let t0 = Instant::now();
    let inv = WidgetId::new(INVENTORY_GROUP, 0);
    let mut store = RecencyStore::new();
    store.push(
        ExamineRecord::new(ExamineKind::ItemInInterface, "Lovely money!", t0).with_origin(Origin {
            id: 995,
            param0: 4,
            param1: inv.0,
        }),
    );
    let scene = FakeScene::new()
        .with_viewport(Rect::new(4, 4, 512, 334))
        .with_widget(inv, Rect::new(550, 200, 180, 400))
        .with_widget_child(inv, 4, Rect::new(700, 560, 36, 32));
    let config = ExamineConfig {
        clamp_anchored: false,
        ..Default::default()
    };
    let mut overlay = ExamineOverlay::new(config, overlay_colors::TOOLTIP_BG);

    let mut surface = new_surface();
    overlay.render(&store, &scene, &mut surface, ms(t0, 100));
    assert_eq!(surface.boxes()[0].1, Point::new(700, 592));

    let mut surface = new_surface();
    overlay.render(&store, &scene, &mut surface, ms(t0, 200));
    assert_eq!(surface.boxes()[0].1, Point::new(595, 555));
}

#[test]
fn test_lost_anchor_reuses_remembered_bounds() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    let id = store.push(npc_record("A guard.", t0));
    let scene = FakeScene::new().with_npc(NPC, Rect::new(100, 100, 40, 80));
    let mut overlay = ExamineOverlay::default();

    let mut surface = new_surface();
    overlay.render(&store, &scene, &mut surface, ms(t0, 100));

    let scene = scene.without_npc(NPC);
    let outcomes = overlay.render(&store, &scene, &mut surface, ms(t0, 200));
    assert_eq!(
        outcomes,
        [RenderOutcome::Anchored {
            id,
            position: Point::new(90, 190),
            source: AnchorSource::Remembered
        }]
    );
}

#[test]
fn test_lost_anchor_falls_back_to_tooltip() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    let id = store.push(npc_record("A guard.", t0));
    let mut overlay = ExamineOverlay::default();

    let mut surface = new_surface();
    let outcomes = overlay.render(&store, &FakeScene::new(), &mut surface, ms(t0, 100));
    assert_eq!(outcomes, [RenderOutcome::Tooltip { id }]);
    assert_eq!(surface.tooltips().len(), 1);
}

#[test]
fn test_lost_anchor_skipped_without_tooltip_fallback() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    let id = store.push(npc_record("A guard.", t0));
    let config = ExamineConfig {
        tooltip_fallback: false,
        ..Default::default()
    };
    let mut overlay = ExamineOverlay::new(config, overlay_colors::TOOLTIP_BG);

    let mut surface = new_surface();
    let outcomes = overlay.render(&store, &FakeScene::new(), &mut surface, ms(t0, 100));
    assert_eq!(outcomes, [RenderOutcome::Skipped { id }]);
    assert!(surface.drawn.is_empty());
}

#[test]
fn test_tooltip_mode_never_anchors() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    store.push(npc_record("A guard.", t0));
    let scene = FakeScene::new().with_npc(NPC, Rect::new(100, 100, 40, 80));
    let config = ExamineConfig {
        anchored_style: false,
        ..Default::default()
    };
    let mut overlay = ExamineOverlay::new(config, overlay_colors::TOOLTIP_BG);

    let mut surface = new_surface();
    overlay.render(&store, &scene, &mut surface, ms(t0, 100));
    assert_eq!(surface.tooltips().len(), 1);
    assert!(surface.boxes().is_empty());
}

#[test]
fn test_non_spatial_kinds_render_as_tooltips() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    store.push(ExamineRecord::new(ExamineKind::PriceCheck, "Price of Coins: GE average 1", t0));
    store.push(ExamineRecord::new(ExamineKind::Item, "Lovely money!", t0));
    let mut overlay = ExamineOverlay::default();

    let mut surface = new_surface();
    overlay.render(&store, &FakeScene::new(), &mut surface, ms(t0, 100));
    assert_eq!(surface.tooltips().len(), 2);
}

#[test]
fn test_expired_records_not_drawn() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    store.push(npc_record("A guard.", t0));
    let scene = FakeScene::new().with_npc(NPC, Rect::new(100, 100, 40, 80));
    let mut overlay = ExamineOverlay::default();

    let mut surface = new_surface();
    assert!(overlay.render(&store, &scene, &mut surface, ms(t0, 4000)).is_empty());
    assert!(surface.drawn.is_empty());
}

#[test]
fn test_fade_applies_to_colours() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    store.push(ExamineRecord::new(ExamineKind::Item, "Lovely money!", t0));
    let config = ExamineConfig {
        custom_background_color: Some([0, 0, 0, 200]),
        ..Default::default()
    };
    let mut overlay = ExamineOverlay::new(config, overlay_colors::TOOLTIP_BG);

    let mut surface = new_surface();
    overlay.render(&store, &FakeScene::new(), &mut surface, ms(t0, 3500));
    let text_box = surface.tooltips()[0];
    assert_eq!(text_box.opacity, 0.5);
    assert_eq!(text_box.background, [0, 0, 0, 100]);
    assert_eq!(text_box.text_color, [255, 255, 255, 128]);
}

#[test]
fn test_host_background_used_by_default() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    store.push(ExamineRecord::new(ExamineKind::Item, "Lovely money!", t0));
    let mut overlay = ExamineOverlay::new(ExamineConfig::default(), [10, 20, 30, 255]);

    let mut surface = new_surface();
    overlay.render(&store, &FakeScene::new(), &mut surface, ms(t0, 100));
    assert_eq!(surface.tooltips()[0].background, [10, 20, 30, 255]);
}

#[test]
fn test_wrapping_follows_config() {
    let t0 = Instant::now();
    let text = "The soil has been treated with supercompost. The patch is fully grown.";
    let mut store = RecencyStore::new();
    store.push(ExamineRecord::new(ExamineKind::Item, text, t0));

    let mut overlay = ExamineOverlay::default();
    let mut surface = new_surface();
    overlay.render(&store, &FakeScene::new(), &mut surface, ms(t0, 100));
    assert!(surface.tooltips()[0].lines.len() > 1);

    overlay.set_config(ExamineConfig {
        wrap_tooltip: false,
        ..Default::default()
    });
    let mut surface = new_surface();
    overlay.render(&store, &FakeScene::new(), &mut surface, ms(t0, 100));
    assert_eq!(surface.tooltips()[0].lines, [text]);
}

#[test]
fn test_side_tables_cleared_when_nothing_anchored() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    let id = store.push(npc_record("A guard.", t0));
    let scene = FakeScene::new().with_npc(NPC, Rect::new(100, 100, 40, 80));
    let mut overlay = ExamineOverlay::default();

    let mut surface = new_surface();
    overlay.render(&store, &scene, &mut surface, ms(t0, 100));
    assert!(overlay.remembered_bounds(id).is_some());

    overlay.render(&store, &scene, &mut surface, ms(t0, 5000));
    assert!(overlay.remembered_bounds(id).is_none());
    assert!(overlay.remembered_size(id).is_none());
}

#[test]
fn test_side_tables_bounded() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    let scene = FakeScene::new().with_npc(NPC, Rect::new(100, 100, 40, 80));
    let mut overlay = ExamineOverlay::default();
    let mut surface = new_surface();

    for i in 0..(SIDE_TABLE_LIMIT as u64 + 5) {
        let at = ms(t0, i * 10);
        store.push(npc_record(&format!("Guard {i}"), at));
        overlay.render(&store, &scene, &mut surface, at);
        assert!(overlay.sizes.len() <= SIDE_TABLE_LIMIT);
        assert!(overlay.bounds.len() <= SIDE_TABLE_LIMIT);
    }
}

#[test]
fn test_reset_forgets_side_tables() {
    let t0 = Instant::now();
    let mut store = RecencyStore::new();
    let id = store.push(npc_record("A guard.", t0));
    let scene = FakeScene::new().with_npc(NPC, Rect::new(100, 100, 40, 80));
    let mut overlay = ExamineOverlay::default();

    let mut surface = new_surface();
    overlay.render(&store, &scene, &mut surface, ms(t0, 100));
    overlay.reset();
    assert!(overlay.remembered_size(id).is_none());
}
