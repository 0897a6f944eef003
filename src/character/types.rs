use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::archetype::{Archetype, PlayerClass};
use crate::core::constants::SHADOW_EVASION_PERCENT;

/// Outcome of a single `receive_damage` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageResult {
    /// The hit connected. `knocked_down` is set when an un-killable
    /// target was driven to 0 HP by this hit.
    Landed { amount: u32, knocked_down: bool },
    /// The target evaded; health unchanged.
    Evaded,
}

/// A combatant. One struct covers every archetype; variant behavior
/// dispatches on the `archetype` tag.
///
/// HP is only ever mutated through [`Character::receive_damage`] and
/// [`Character::heal`], which keep `current_hp <= max_hp` (u32 keeps the
/// lower bound structural).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub archetype: Archetype,
    pub current_hp: u32,
    pub max_hp: u32,
    pub power: u32,
    pub coins: u32,
    /// Reward paid to whoever kills this character.
    pub bounty: u32,
    pub mana: u32,
    pub max_mana: u32,
}

impl Character {
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        let stats = archetype.base_stats();
        Self {
            name: name.into(),
            archetype,
            current_hp: stats.hp,
            max_hp: stats.hp,
            power: stats.power,
            coins: stats.coins,
            bounty: stats.bounty,
            mana: stats.mana,
            max_mana: stats.mana,
        }
    }

    pub fn for_class(name: impl Into<String>, class: PlayerClass) -> Self {
        Self::new(name, class.archetype())
    }

    /// A character reports dead once its HP reaches 0, except the Zombie,
    /// which stays a valid combat target no matter what.
    pub fn is_alive(&self) -> bool {
        match self.archetype {
            Archetype::Zombie => true,
            _ => self.current_hp > 0,
        }
    }

    /// Applies incoming damage. The Shadow evades the hit entirely with
    /// `SHADOW_EVASION_PERCENT` probability; everyone else takes the full
    /// amount, floored at 0 HP.
    pub fn receive_damage<R: Rng>(&mut self, amount: u32, rng: &mut R) -> DamageResult {
        if self.archetype == Archetype::Shadow
            && rng.gen_range(0..100) < SHADOW_EVASION_PERCENT
        {
            return DamageResult::Evaded;
        }
        let was_up = self.current_hp > 0;
        self.current_hp = self.current_hp.saturating_sub(amount);
        let knocked_down =
            self.archetype.is_unkillable() && was_up && self.current_hp == 0;
        DamageResult::Landed {
            amount,
            knocked_down,
        }
    }

    /// Restores HP, capped at `max_hp`. Returns the amount actually
    /// restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp - self.current_hp);
        self.current_hp += healed;
        healed
    }

    /// One-line status description of current attributes.
    pub fn status(&self) -> String {
        let mut parts = vec![
            format!("{}/{} health", self.current_hp, self.max_hp),
            format!("{} power", self.power),
        ];
        if self.max_mana > 0 {
            parts.push(format!("{}/{} mana", self.mana, self.max_mana));
        }
        if self.archetype.is_player() {
            parts.push(format!("{} coins", self.coins));
        }
        format!("{} has {}.", self.name, parts.join(", "))
    }
}
