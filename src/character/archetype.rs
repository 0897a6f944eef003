use serde::{Deserialize, Serialize};

use crate::core::constants::*;

/// The closed set of combat behavior variants.
///
/// Every character is one of these; all variant-specific rules (damage
/// rolls, evasion, death semantics) dispatch on this tag rather than on
/// a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    /// Player: 20% chance to land a critical hit for double damage.
    Warrior,
    /// Player: casts a triple-damage spell while mana holds out.
    Wizard,
    /// Player: 20% chance to patch themselves up after attacking.
    Medic,
    /// Enemy: baseline stats, pays a bounty when killed.
    Goblin,
    /// Enemy: evades 90% of incoming hits, low health, higher bounty.
    Shadow,
    /// Enemy: never reports dead and pays no bounty. Reaching 0 HP only
    /// knocks it down.
    Zombie,
}

/// Creation-time stats for one archetype.
#[derive(Debug, Clone, Copy)]
pub struct BaseStats {
    pub hp: u32,
    pub power: u32,
    pub coins: u32,
    pub bounty: u32,
    pub mana: u32,
}

impl Archetype {
    pub fn base_stats(self) -> BaseStats {
        let (hp, power, coins, bounty, mana) = match self {
            Archetype::Warrior => (WARRIOR_BASE_HP, WARRIOR_POWER, PLAYER_STARTING_COINS, 0, 0),
            Archetype::Wizard => (
                WIZARD_BASE_HP,
                WIZARD_POWER,
                PLAYER_STARTING_COINS,
                0,
                WIZARD_BASE_MANA,
            ),
            Archetype::Medic => (MEDIC_BASE_HP, MEDIC_POWER, PLAYER_STARTING_COINS, 0, 0),
            Archetype::Goblin => (GOBLIN_BASE_HP, GOBLIN_POWER, 0, GOBLIN_BOUNTY, 0),
            Archetype::Shadow => (SHADOW_BASE_HP, SHADOW_POWER, 0, SHADOW_BOUNTY, 0),
            Archetype::Zombie => (ZOMBIE_BASE_HP, ZOMBIE_POWER, 0, 0, 0),
        };
        BaseStats {
            hp,
            power,
            coins,
            bounty,
            mana,
        }
    }

    pub fn is_player(self) -> bool {
        matches!(self, Archetype::Warrior | Archetype::Wizard | Archetype::Medic)
    }

    /// Un-killable variants are never removed from the enemy pool through
    /// ordinary combat.
    pub fn is_unkillable(self) -> bool {
        matches!(self, Archetype::Zombie)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Archetype::Warrior => "Warrior",
            Archetype::Wizard => "Wizard",
            Archetype::Medic => "Medic",
            Archetype::Goblin => "Goblin",
            Archetype::Shadow => "Shadow",
            Archetype::Zombie => "Zombie",
        }
    }
}

/// Player class choice made at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerClass {
    Warrior,
    Wizard,
    Medic,
}

impl PlayerClass {
    pub fn all() -> [PlayerClass; 3] {
        [PlayerClass::Warrior, PlayerClass::Wizard, PlayerClass::Medic]
    }

    pub fn archetype(self) -> Archetype {
        match self {
            PlayerClass::Warrior => Archetype::Warrior,
            PlayerClass::Wizard => Archetype::Wizard,
            PlayerClass::Medic => Archetype::Medic,
        }
    }

    pub fn display_name(self) -> &'static str {
        self.archetype().display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_archetypes_start_with_coins() {
        for class in PlayerClass::all() {
            let stats = class.archetype().base_stats();
            assert_eq!(stats.coins, PLAYER_STARTING_COINS);
            assert_eq!(stats.bounty, 0, "players pay no bounty");
            assert!(stats.hp > 0);
        }
    }

    #[test]
    fn test_only_wizard_has_mana() {
        for class in PlayerClass::all() {
            let archetype = class.archetype();
            let stats = archetype.base_stats();
            if archetype == Archetype::Wizard {
                assert_eq!(stats.mana, WIZARD_BASE_MANA);
            } else {
                assert_eq!(stats.mana, 0);
            }
        }
    }

    #[test]
    fn test_enemy_bounties() {
        assert_eq!(Archetype::Goblin.base_stats().bounty, GOBLIN_BOUNTY);
        assert_eq!(Archetype::Shadow.base_stats().bounty, SHADOW_BOUNTY);
        assert_eq!(
            Archetype::Zombie.base_stats().bounty,
            0,
            "zombies pay no bounty"
        );
    }

    #[test]
    fn test_player_split() {
        assert!(Archetype::Warrior.is_player());
        assert!(Archetype::Wizard.is_player());
        assert!(Archetype::Medic.is_player());
        assert!(!Archetype::Goblin.is_player());
        assert!(!Archetype::Shadow.is_player());
        assert!(!Archetype::Zombie.is_player());
    }

    #[test]
    fn test_only_zombie_is_unkillable() {
        assert!(Archetype::Zombie.is_unkillable());
        assert!(!Archetype::Goblin.is_unkillable());
        assert!(!Archetype::Shadow.is_unkillable());
    }
}
