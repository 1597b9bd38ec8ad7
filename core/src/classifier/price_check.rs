//! Price check text parsing
//!
//! `Price of [<qty> x ]<name>:[ GE average <value>][ HA value <value>]`

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static PRICE_CHECK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Price of (?:([\d,.]+) x )?(.+?):(?: GE average ([\d,.]+(?: \([\d,.]+ea\))?))?(?: HA value ([\d,.]+(?: \([\d,.]+ea\))?))?$",
    )
    .unwrap()
});

/// Fields extracted from a price check line. Values are kept as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCheck {
    pub quantity: Option<String>,
    pub item_name: String,
    pub ge_value: Option<String>,
    pub ha_value: Option<String>,
}

impl PriceCheck {
    pub fn parse(text: &str) -> Option<Self> {
        let caps = PRICE_CHECK.captures(text)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str().to_string());

        Some(Self {
            quantity: group(1),
            item_name: group(2)?,
            ge_value: group(3),
            ha_value: group(4),
        })
    }
}
