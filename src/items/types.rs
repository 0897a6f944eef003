use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::character::Character;
use crate::core::constants::*;

/// A one-shot item effect, applied exactly once when the item is
/// consumed. Effects are data; adding an item is a catalog entry, and a
/// genuinely new behavior is one variant plus one match arm here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Restore a fixed amount of HP, capped at max HP.
    Heal(u32),
    /// Permanently raise power.
    PowerBoost(u32),
}

impl ItemEffect {
    pub fn apply(&self, target: &mut Character) {
        match self {
            ItemEffect::Heal(amount) => {
                target.heal(*amount);
            }
            ItemEffect::PowerBoost(amount) => {
                target.power += amount;
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ItemEffect::Heal(amount) => format!("+{amount} health"),
            ItemEffect::PowerBoost(amount) => format!("+{amount} power"),
        }
    }
}

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub cost: u32,
    pub effect: ItemEffect,
}

impl Item {
    pub fn new(name: impl Into<String>, cost: u32, effect: ItemEffect) -> Self {
        Self {
            name: name.into(),
            cost,
            effect,
        }
    }
}

/// The stock list every store starts with.
pub fn default_catalog() -> Vec<Item> {
    vec![
        Item::new("Tonic", TONIC_COST, ItemEffect::Heal(TONIC_HEAL_AMOUNT)),
        Item::new("Sword", SWORD_COST, ItemEffect::PowerBoost(SWORD_POWER_BONUS)),
    ]
}

/// A store or inventory transaction that could not be applied. All of
/// these are recoverable and leave state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not enough coins: costs {cost}, you have {coins}")]
    InsufficientFunds { cost: u32, coins: u32 },
    #[error("no item at slot {index} (you have {len})")]
    InvalidIndex { index: usize, len: usize },
    #[error("your pack is full ({capacity} items)")]
    InventoryFull { capacity: usize },
}
