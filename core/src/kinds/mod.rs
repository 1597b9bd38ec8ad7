//! Examine kinds and response channels
//!
//! Every examine interaction is tagged with an [`ExamineKind`]. The kind decides
//! how the correlator pairs text with a pending action and how the overlay
//! finds the examined entity again. Those decisions live in a static rule
//! table (see [`rules`]) so that adding a kind never touches control flow.

mod rules;

pub use rules::{AnchorStrategy, KindRule, Pairing, KIND_RULES, rule};

use serde::{Deserialize, Serialize};

/// Semantic category of an examine interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamineKind {
    /// Item examined without a locatable origin
    Item,
    /// Item lying on a scene tile
    ItemOnGround,
    /// Item inside an interface (inventory, bank, equipment, ...)
    ItemInInterface,
    /// Scenery object on a scene tile
    Object,
    Npc,
    /// "Inspect" on a farming patch
    FarmingPatchInspect,
    /// Price check text from the host's examine helper
    PriceCheck,
    /// Message from the patch payment companion plugin
    ThirdPartyPatchPayment,
}

impl ExamineKind {
    pub const ALL: [ExamineKind; 8] = [
        Self::Item,
        Self::ItemOnGround,
        Self::ItemInInterface,
        Self::Object,
        Self::Npc,
        Self::FarmingPatchInspect,
        Self::PriceCheck,
        Self::ThirdPartyPatchPayment,
    ];

    /// Rule row for this kind
    pub fn rule(self) -> &'static KindRule {
        rule(self)
    }

    /// True for the kinds whose origin can be found on screen again
    pub fn is_spatial(self) -> bool {
        self.rule().anchor != AnchorStrategy::None
    }
}

/// Host-defined category tag of an incoming text event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    ItemExamine,
    NpcExamine,
    ObjectExamine,
    GameMessage,
    /// Any channel the overlay does not listen to (public chat, clan, ...)
    Other,
}
