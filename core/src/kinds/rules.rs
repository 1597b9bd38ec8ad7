//! Static per-kind rule table
//!
//! Expected response channels, cross-satisfaction, visibility toggles and
//! anchor strategy for each [`ExamineKind`]. The correlator and the overlay
//! only ever consult this table.

use examine_types::ExamineConfig;

use super::{Channel, ExamineKind};

/// How a message of this kind finds its originating action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// Oldest entry of the FIFO intent queue
    Queued,
    /// The single inspect slot (the player walks before the answer arrives)
    InspectSlot,
    /// Self-contained text, no action involved
    Standalone,
}

/// How the overlay relocates the origin of a record on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorStrategy {
    /// Never anchored, always a cursor tooltip
    None,
    /// NPC table lookup by index
    Npc,
    /// Interface widget lookup by widget id and slot
    Widget,
    /// Scene tile lookup (objects, ground items, patches)
    Tile,
}

/// One row of the rule table
#[derive(Debug)]
pub struct KindRule {
    pub kind: ExamineKind,
    pub pairing: Pairing,
    /// Channels a response to an action of this kind may arrive on
    pub expected_channels: &'static [Channel],
    /// Classified message kinds that may answer an action of this kind
    pub satisfied_by: &'static [ExamineKind],
    pub anchor: AnchorStrategy,
    /// Always drawn as a cursor tooltip, even in anchored mode
    pub tooltip_only: bool,
    /// User visibility toggle
    pub visible: fn(&ExamineConfig) -> bool,
}

impl KindRule {
    /// Whether a message of `kind` on `channel` answers an action governed by this rule
    pub fn accepts(&self, kind: ExamineKind, channel: Channel) -> bool {
        self.satisfied_by.contains(&kind) && self.expected_channels.contains(&channel)
    }
}

const ITEM_FAMILY: &[ExamineKind] = &[
    ExamineKind::Item,
    ExamineKind::ItemOnGround,
    ExamineKind::ItemInInterface,
];

pub static KIND_RULES: [KindRule; 8] = [
    KindRule {
        kind: ExamineKind::Item,
        pairing: Pairing::Queued,
        expected_channels: &[Channel::ItemExamine],
        satisfied_by: &[ExamineKind::Item],
        anchor: AnchorStrategy::None,
        tooltip_only: false,
        visible: |_| true,
    },
    KindRule {
        kind: ExamineKind::ItemOnGround,
        pairing: Pairing::Queued,
        expected_channels: &[Channel::ItemExamine, Channel::GameMessage],
        satisfied_by: ITEM_FAMILY,
        anchor: AnchorStrategy::Tile,
        tooltip_only: false,
        visible: |c| c.show_ground_item_examines,
    },
    KindRule {
        kind: ExamineKind::ItemInInterface,
        pairing: Pairing::Queued,
        expected_channels: &[Channel::ItemExamine, Channel::GameMessage],
        satisfied_by: ITEM_FAMILY,
        anchor: AnchorStrategy::Widget,
        tooltip_only: false,
        visible: |c| c.show_item_examines,
    },
    KindRule {
        kind: ExamineKind::Object,
        pairing: Pairing::Queued,
        expected_channels: &[Channel::ObjectExamine],
        satisfied_by: &[ExamineKind::Object],
        anchor: AnchorStrategy::Tile,
        tooltip_only: false,
        visible: |c| c.show_object_examines,
    },
    KindRule {
        kind: ExamineKind::Npc,
        pairing: Pairing::Queued,
        expected_channels: &[Channel::NpcExamine],
        satisfied_by: &[ExamineKind::Npc],
        anchor: AnchorStrategy::Npc,
        tooltip_only: false,
        visible: |c| c.show_npc_examines,
    },
    KindRule {
        kind: ExamineKind::FarmingPatchInspect,
        pairing: Pairing::InspectSlot,
        expected_channels: &[Channel::GameMessage],
        satisfied_by: &[ExamineKind::FarmingPatchInspect],
        anchor: AnchorStrategy::Tile,
        tooltip_only: false,
        visible: |c| c.show_patch_inspects,
    },
    KindRule {
        kind: ExamineKind::PriceCheck,
        pairing: Pairing::Standalone,
        expected_channels: &[Channel::ItemExamine],
        satisfied_by: &[],
        anchor: AnchorStrategy::None,
        tooltip_only: true,
        visible: |c| c.show_price_check,
    },
    KindRule {
        kind: ExamineKind::ThirdPartyPatchPayment,
        pairing: Pairing::Standalone,
        expected_channels: &[Channel::GameMessage],
        satisfied_by: &[],
        anchor: AnchorStrategy::None,
        tooltip_only: true,
        visible: |c| c.show_patch_payment,
    },
];

/// Look up the rule row for a kind
pub fn rule(kind: ExamineKind) -> &'static KindRule {
    let idx = match kind {
        ExamineKind::Item => 0,
        ExamineKind::ItemOnGround => 1,
        ExamineKind::ItemInInterface => 2,
        ExamineKind::Object => 3,
        ExamineKind::Npc => 4,
        ExamineKind::FarmingPatchInspect => 5,
        ExamineKind::PriceCheck => 6,
        ExamineKind::ThirdPartyPatchPayment => 7,
    };
    &KIND_RULES[idx]
}
