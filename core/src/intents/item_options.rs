//! Interface item options that answer in chat
//!
//! Some items report their state through a game message when a specific
//! option is used. Those options are queued like an examine so the answer
//! can be shown next to the item.

use crate::kinds::Channel;

pub const BONECRUSHER: i32 = 13116;
pub const BONECRUSHER_NECKLACE: i32 = 22986;
pub const SLAYER_RING_1: i32 = 11873;
pub const SLAYER_RING_8: i32 = 11866;
pub const SLAYER_RING_ETERNAL: i32 = 21268;
pub const GEM_BAG: i32 = 12020;
pub const OPEN_GEM_BAG: i32 = 24481;

const GAME_MESSAGE: &[Channel] = &[Channel::GameMessage];

const BONECRUSHER_OPTIONS: &[(&str, &[Channel])] =
    &[("Activity", GAME_MESSAGE), ("Check", GAME_MESSAGE)];
const SLAYER_RING_OPTIONS: &[(&str, &[Channel])] = &[("Check", GAME_MESSAGE)];
const GEM_BAG_OPTIONS: &[(&str, &[Channel])] = &[
    ("Check", GAME_MESSAGE),
    ("Open", GAME_MESSAGE),
    ("Close", GAME_MESSAGE),
];

fn options_for(item_id: i32) -> Option<&'static [(&'static str, &'static [Channel])]> {
    match item_id {
        BONECRUSHER | BONECRUSHER_NECKLACE => Some(BONECRUSHER_OPTIONS),
        // Slayer rings (8) through (1) use consecutive ids
        SLAYER_RING_8..=SLAYER_RING_1 | SLAYER_RING_ETERNAL => Some(SLAYER_RING_OPTIONS),
        GEM_BAG | OPEN_GEM_BAG => Some(GEM_BAG_OPTIONS),
        _ => None,
    }
}

/// Channels the answer to `option` on `item_id` arrives on, if the option is tracked
pub fn expected_channels_for_option(item_id: i32, option: &str) -> Option<&'static [Channel]> {
    options_for(item_id)?
        .iter()
        .find(|(name, _)| *name == option)
        .map(|(_, channels)| *channels)
}
