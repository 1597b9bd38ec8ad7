//! Incoming text classification
//!
//! Maps a (channel, text) pair to an [`ExamineKind`]. Channels map mostly
//! one-to-one onto kinds; the generic game-message channel is disambiguated
//! by text pattern. Text is expected with markup already stripped.

mod price_check;

pub use price_check::PriceCheck;

use std::sync::LazyLock;

use regex::Regex;

use crate::kinds::{Channel, ExamineKind};

const PRICE_CHECK_START: &str = "Price of";

static PATCH_INSPECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^This is an? [^.]+\. The soil ").unwrap());

static PATCH_PAYMENT_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Patch payment: .+$").unwrap());

static PATCH_PAYMENT_PROTECTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:This|The) patch (?:is|has been) paid for\.?$").unwrap());

/// A text event with its semantic kind attached
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    pub kind: ExamineKind,
    pub channel: Channel,
    pub text: String,
    /// Parsed fields when the text is a well-formed price check
    pub price: Option<PriceCheck>,
}

/// Classify a text event. Returns `None` for channels and texts the overlay ignores.
pub fn classify(channel: Channel, text: &str) -> Option<Classified> {
    let kind = match channel {
        Channel::ItemExamine if text.starts_with(PRICE_CHECK_START) => ExamineKind::PriceCheck,
        Channel::ItemExamine => ExamineKind::Item,
        Channel::NpcExamine => ExamineKind::Npc,
        Channel::ObjectExamine => ExamineKind::Object,
        Channel::GameMessage => classify_game_message(text),
        Channel::Other => return None,
    };

    if text.is_empty() {
        return None;
    }

    let price = match kind {
        ExamineKind::PriceCheck => PriceCheck::parse(text),
        _ => None,
    };

    Some(Classified {
        kind,
        channel,
        text: text.to_string(),
        price,
    })
}

fn classify_game_message(text: &str) -> ExamineKind {
    if PATCH_INSPECT.is_match(text) {
        ExamineKind::FarmingPatchInspect
    } else if PATCH_PAYMENT_LIST.is_match(text) || PATCH_PAYMENT_PROTECTED.is_match(text) {
        ExamineKind::ThirdPartyPatchPayment
    } else {
        ExamineKind::ItemInInterface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(channel: Channel, text: &str) -> Option<ExamineKind> {
        classify(channel, text).map(|c| c.kind)
    }

    #[test]
    fn test_examine_channels_map_directly() {
        assert_eq!(kind_of(Channel::ItemExamine, "A bronze dagger."), Some(ExamineKind::Item));
        assert_eq!(kind_of(Channel::NpcExamine, "A scary man."), Some(ExamineKind::Npc));
        assert_eq!(kind_of(Channel::ObjectExamine, "A sturdy tree."), Some(ExamineKind::Object));
    }

    #[test]
    fn test_price_check_on_item_channel() {
        let classified = classify(
            Channel::ItemExamine,
            "Price of 2 x Rune scimitar: GE average 30,000 (15,000ea) HA value 25,600 (12,800ea)",
        )
        .unwrap();
        assert_eq!(classified.kind, ExamineKind::PriceCheck);
        assert_eq!(classified.price.unwrap().item_name, "Rune scimitar");
    }

    #[test]
    fn test_price_prefix_on_game_message_is_not_price_check() {
        assert_eq!(
            kind_of(Channel::GameMessage, "Price of nothing: GE average 0"),
            Some(ExamineKind::ItemInInterface)
        );
    }

    #[test]
    fn test_game_message_patterns() {
        assert_eq!(
            kind_of(
                Channel::GameMessage,
                "This is an allotment. The soil has not been treated. The patch is empty and weeded."
            ),
            Some(ExamineKind::FarmingPatchInspect)
        );
        assert_eq!(
            kind_of(Channel::GameMessage, "Patch payment: 10 x Compost"),
            Some(ExamineKind::ThirdPartyPatchPayment)
        );
        assert_eq!(
            kind_of(Channel::GameMessage, "This patch is paid for."),
            Some(ExamineKind::ThirdPartyPatchPayment)
        );
        assert_eq!(
            kind_of(Channel::GameMessage, "Your bonecrusher has 120 charges left."),
            Some(ExamineKind::ItemInInterface)
        );
    }

    #[test]
    fn test_ignored_inputs() {
        assert_eq!(kind_of(Channel::Other, "hello"), None);
        assert_eq!(kind_of(Channel::NpcExamine, ""), None);
    }
}
