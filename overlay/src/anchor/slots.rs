//! Interface slot addressing
//!
//! Containers address their item slots differently. Most expose one child per
//! slot indexed by the action parameter; equipment-style screens make the
//! clicked widget the slot itself with the item drawn on a fixed child; a few
//! draw items in a separate container widget.

use crate::geometry::Rect;
use crate::scene::{SceneQuery, WidgetId};

pub const INVENTORY_GROUP: u16 = 149;
pub const BANK_GROUP: u16 = 12;
pub const BANK_INVENTORY_GROUP: u16 = 15;
pub const SHOP_GROUP: u16 = 300;
pub const SHOP_INVENTORY_GROUP: u16 = 301;
pub const EQUIPMENT_GROUP: u16 = 387;
pub const EQUIPMENT_BONUSES_GROUP: u16 = 84;
pub const LOOTING_BAG_GROUP: u16 = 81;

/// Child of an equipment slot widget that holds the item sprite
const EQUIPMENT_ITEM_CHILD: i32 = 1;

/// Where the looting bag draws its items
const LOOTING_BAG_ITEMS: WidgetId = WidgetId::new(LOOTING_BAG_GROUP, 5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAddressing {
    /// Child `slot` of the clicked widget, or the widget itself when `slot < 0`
    ActionParam,
    /// The clicked widget is the slot; the item is drawn on a fixed child
    FixedChild(i32),
    /// Items are drawn as children of another widget, indexed by slot
    Container(WidgetId),
}

pub fn addressing_for(group: u16) -> SlotAddressing {
    match group {
        EQUIPMENT_GROUP | EQUIPMENT_BONUSES_GROUP => SlotAddressing::FixedChild(EQUIPMENT_ITEM_CHILD),
        LOOTING_BAG_GROUP => SlotAddressing::Container(LOOTING_BAG_ITEMS),
        _ => SlotAddressing::ActionParam,
    }
}

/// Bounds of the item at `slot` in `widget`
pub fn find_item_bounds(scene: &dyn SceneQuery, widget: WidgetId, slot: i32) -> Option<Rect> {
    match addressing_for(widget.group()) {
        SlotAddressing::ActionParam if slot < 0 => scene.widget_bounds(widget),
        SlotAddressing::ActionParam => {
            // The clicked widget has to exist before its children are trusted
            scene.widget_bounds(widget)?;
            scene.widget_child_bounds(widget, slot)
        }
        SlotAddressing::FixedChild(child) => scene
            .widget_child_bounds(widget, child)
            .or_else(|| scene.widget_bounds(widget)),
        SlotAddressing::Container(container) if slot >= 0 => {
            scene.widget_child_bounds(container, slot)
        }
        SlotAddressing::Container(_) => scene.widget_bounds(widget),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeScene;

    #[test]
    fn test_addressing_table() {
        assert_eq!(addressing_for(INVENTORY_GROUP), SlotAddressing::ActionParam);
        assert_eq!(addressing_for(BANK_GROUP), SlotAddressing::ActionParam);
        assert_eq!(addressing_for(EQUIPMENT_GROUP), SlotAddressing::FixedChild(1));
        assert!(matches!(addressing_for(LOOTING_BAG_GROUP), SlotAddressing::Container(_)));
    }

    #[test]
    fn test_action_param_child() {
        let inv = WidgetId::new(INVENTORY_GROUP, 0);
        let scene = FakeScene::new()
            .with_widget(inv, Rect::new(550, 200, 180, 260))
            .with_widget_child(inv, 3, Rect::new(600, 205, 36, 32));

        assert_eq!(find_item_bounds(&scene, inv, 3), Some(Rect::new(600, 205, 36, 32)));
        assert_eq!(find_item_bounds(&scene, inv, 4), None);
        assert_eq!(find_item_bounds(&scene, inv, -1), Some(Rect::new(550, 200, 180, 260)));
    }

    #[test]
    fn test_missing_widget() {
        let scene = FakeScene::new();
        assert_eq!(find_item_bounds(&scene, WidgetId::new(BANK_GROUP, 13), 0), None);
    }

    #[test]
    fn test_equipment_slot_uses_fixed_child() {
        let helmet = WidgetId::new(EQUIPMENT_GROUP, 15);
        let scene = FakeScene::new()
            .with_widget(helmet, Rect::new(600, 210, 40, 40))
            .with_widget_child(helmet, 1, Rect::new(604, 214, 32, 32));

        assert_eq!(find_item_bounds(&scene, helmet, -1), Some(Rect::new(604, 214, 32, 32)));
    }

    #[test]
    fn test_container_redirect() {
        let clicked = WidgetId::new(LOOTING_BAG_GROUP, 2);
        let scene = FakeScene::new()
            .with_widget(clicked, Rect::new(0, 0, 10, 10))
            .with_widget_child(LOOTING_BAG_ITEMS, 7, Rect::new(50, 60, 36, 32));

        assert_eq!(find_item_bounds(&scene, clicked, 7), Some(Rect::new(50, 60, 36, 32)));
    }
}
