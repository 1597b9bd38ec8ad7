use serde::{Deserialize, Serialize};

use crate::kinds::ExamineKind;

/// Menu action categories forwarded by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ExamineItem,
    ExamineGroundItem,
    ExamineInterfaceItem,
    ExamineObject,
    ExamineNpc,
    InspectPatch,
    /// Any other option on an interface item
    ItemOption,
}

impl ActionKind {
    pub(crate) fn examine_kind(self) -> Option<ExamineKind> {
        match self {
            Self::ExamineItem => Some(ExamineKind::Item),
            Self::ExamineGroundItem => Some(ExamineKind::ItemOnGround),
            Self::ExamineInterfaceItem => Some(ExamineKind::ItemInInterface),
            Self::ExamineObject => Some(ExamineKind::Object),
            Self::ExamineNpc => Some(ExamineKind::Npc),
            Self::InspectPatch => Some(ExamineKind::FarmingPatchInspect),
            Self::ItemOption => None,
        }
    }
}

/// A user-action notification from the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAction {
    pub kind: ActionKind,
    /// Entity or item id (NPC index for NPCs)
    pub id: i32,
    /// Action parameter: item slot for interface items, scene x for tile kinds
    pub param0: i32,
    /// Widget id for interface items, scene y for tile kinds
    pub param1: i32,
    /// Menu option with markup stripped ("Examine", "Inspect", "Check", ...)
    pub option: String,
    /// Menu target with markup stripped
    #[serde(default)]
    pub target: String,
}

impl UserAction {
    pub fn origin(&self) -> Origin {
        Origin {
            id: self.id,
            param0: self.param0,
            param1: self.param1,
        }
    }
}

/// Identifiers of the examined entity. The meaning of the two parameters
/// depends on the kind; use the accessors rather than the raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Origin {
    pub id: i32,
    pub param0: i32,
    pub param1: i32,
}

impl Origin {
    /// Packed widget id (interface items)
    pub fn widget_id(&self) -> i32 {
        self.param1
    }

    /// Item slot within the widget, negative when the widget itself is the item
    pub fn slot(&self) -> i32 {
        self.param0
    }

    /// Scene x (tile kinds)
    pub fn scene_x(&self) -> i32 {
        self.param0
    }

    /// Scene y (tile kinds)
    pub fn scene_y(&self) -> i32 {
        self.param1
    }
}
