//! User actions and pending intents
//!
//! A click on "Examine" (or "Inspect", or one of a few item options that
//! answer in chat) becomes a [`PendingIntent`] waiting for its text. Intents
//! live in the [`IntentQueue`] until the correlator matches or discards them.

mod action;
mod item_options;
mod queue;

pub use action::{ActionKind, Origin, UserAction};
pub use item_options::expected_channels_for_option;
pub use queue::IntentQueue;

use crate::kinds::{Channel, ExamineKind};

/// Discrete game step counter supplied by the host
pub type GameTick = u64;

/// A recorded user action awaiting its textual response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingIntent {
    pub kind: ExamineKind,
    pub origin: Origin,
    /// Channels the response may arrive on
    pub expected_channels: &'static [Channel],
    /// Tick of the click
    pub tick: GameTick,
    /// Menu target with markup stripped
    pub target: String,
}

impl PendingIntent {
    /// Build an intent from a user action, or `None` when the action is not examine-related
    pub fn from_action(action: &UserAction, tick: GameTick) -> Option<Self> {
        let (kind, expected_channels) = match action.kind {
            ActionKind::ItemOption => {
                let channels = expected_channels_for_option(action.id, &action.option)?;
                (ExamineKind::ItemInInterface, channels)
            }
            ActionKind::InspectPatch if action.option == "Inspect" => {
                let kind = ExamineKind::FarmingPatchInspect;
                (kind, kind.rule().expected_channels)
            }
            ActionKind::InspectPatch => return None,
            _ if action.option != "Examine" => return None,
            other => {
                let kind = other.examine_kind()?;
                (kind, kind.rule().expected_channels)
            }
        };

        Some(Self {
            kind,
            origin: action.origin(),
            expected_channels,
            tick,
            target: action.target.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(kind: ActionKind, option: &str) -> UserAction {
        UserAction {
            kind,
            id: 1,
            param0: 2,
            param1: 3,
            option: option.to_string(),
            target: "Thing".to_string(),
        }
    }

    #[test]
    fn test_examine_actions_create_intents() {
        let intent = PendingIntent::from_action(&action(ActionKind::ExamineNpc, "Examine"), 7).unwrap();
        assert_eq!(intent.kind, ExamineKind::Npc);
        assert_eq!(intent.expected_channels, &[Channel::NpcExamine]);
        assert_eq!(intent.tick, 7);
        assert_eq!(intent.origin, Origin { id: 1, param0: 2, param1: 3 });
    }

    #[test]
    fn test_non_examine_option_is_ignored() {
        assert!(PendingIntent::from_action(&action(ActionKind::ExamineNpc, "Talk-to"), 0).is_none());
        assert!(PendingIntent::from_action(&action(ActionKind::InspectPatch, "Examine"), 0).is_none());
    }

    #[test]
    fn test_inspect_patch() {
        let intent = PendingIntent::from_action(&action(ActionKind::InspectPatch, "Inspect"), 0).unwrap();
        assert_eq!(intent.kind, ExamineKind::FarmingPatchInspect);
    }

    #[test]
    fn test_item_option_uses_option_table() {
        let mut check = action(ActionKind::ItemOption, "Check");
        check.id = super::item_options::BONECRUSHER;
        let intent = PendingIntent::from_action(&check, 0).unwrap();
        assert_eq!(intent.kind, ExamineKind::ItemInInterface);
        assert_eq!(intent.expected_channels, &[Channel::GameMessage]);

        let mut wield = action(ActionKind::ItemOption, "Wield");
        wield.id = super::item_options::BONECRUSHER;
        assert!(PendingIntent::from_action(&wield, 0).is_none());
    }
}
