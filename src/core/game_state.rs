use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::character::{Archetype, Character, PlayerClass};
use crate::core::constants::BATTLE_LOG_CAPACITY;
use crate::items::types::{default_catalog, Item};

/// A discrete player action for one turn. Produced by the presentation
/// layer; the core never parses raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Attack,
    /// Forfeit the turn; the enemy attacks unconditionally.
    Pass,
    /// Consume the inventory item at this slot. Does not consume the
    /// enemy's turn.
    UseItem(usize),
    /// Buy the catalog item at this slot. Does not consume the enemy's
    /// turn.
    Buy(usize),
    Flee,
}

/// Terminal outcome of a session. Final: no transition leaves these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
    Fled,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub message: String,
    pub is_crit: bool,
    pub is_player_action: bool,
}

/// The whole encounter state: the player, the active enemy, the
/// remaining pool, the store, and the battle log the UI renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Character,
    pub current_enemy: Option<Character>,
    /// Remaining enemies; the next one is drawn uniformly at random.
    pub enemy_pool: Vec<Character>,
    pub inventory: Vec<Item>,
    pub catalog: Vec<Item>,
    pub outcome: Option<Outcome>,
    #[serde(skip)]
    pub battle_log: VecDeque<LogEntry>,
}

impl GameState {
    pub fn new(
        name: impl Into<String>,
        class: PlayerClass,
        enemy_pool: Vec<Character>,
        catalog: Vec<Item>,
    ) -> Self {
        Self {
            player: Character::for_class(name, class),
            current_enemy: None,
            enemy_pool,
            inventory: Vec::new(),
            catalog,
            outcome: None,
            battle_log: VecDeque::with_capacity(BATTLE_LOG_CAPACITY),
        }
    }

    /// The standard session: a goblin, a shadow, and a goblin chief, with
    /// the default store stock.
    pub fn default_encounter(name: impl Into<String>, class: PlayerClass) -> Self {
        let pool = vec![
            Character::new("Goblin", Archetype::Goblin),
            Character::new("Shadow", Archetype::Shadow),
            Character::new("Goblin Chief", Archetype::Goblin),
        ];
        Self::new(name, class, pool, default_catalog())
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn add_log_entry(&mut self, message: String, is_crit: bool, is_player_action: bool) {
        if self.battle_log.len() >= BATTLE_LOG_CAPACITY {
            self.battle_log.pop_front();
        }
        self.battle_log.push_back(LogEntry {
            message,
            is_crit,
            is_player_action,
        });
    }

    /// Read-only projection for the presentation layer.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            player: CharacterSnapshot::from(&self.player),
            current_enemy: self.current_enemy.as_ref().map(CharacterSnapshot::from),
            enemies_remaining: self.enemy_pool.len(),
            inventory: self.inventory.clone(),
            outcome: self.outcome,
        }
    }
}

/// Display-ready view of one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub name: String,
    pub archetype: Archetype,
    pub current_hp: u32,
    pub max_hp: u32,
    pub power: u32,
    pub coins: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub status: String,
}

impl From<&Character> for CharacterSnapshot {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            archetype: character.archetype,
            current_hp: character.current_hp,
            max_hp: character.max_hp,
            power: character.power,
            coins: character.coins,
            mana: character.mana,
            max_mana: character.max_mana,
            status: character.status(),
        }
    }
}

/// Read-only projection of the full session for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub player: CharacterSnapshot,
    pub current_enemy: Option<CharacterSnapshot>,
    pub enemies_remaining: usize,
    pub inventory: Vec<Item>,
    pub outcome: Option<Outcome>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_encounter_initial_values() {
        let state = GameState::default_encounter("Brynn", PlayerClass::Warrior);
        assert_eq!(state.player.name, "Brynn");
        assert_eq!(state.player.archetype, Archetype::Warrior);
        assert!(state.current_enemy.is_none());
        assert_eq!(state.enemy_pool.len(), 3);
        assert!(state.inventory.is_empty());
        assert_eq!(state.catalog.len(), 2);
        assert!(state.outcome.is_none());
        assert!(!state.is_over());
    }

    #[test]
    fn test_battle_log_is_bounded() {
        let mut state = GameState::default_encounter("Brynn", PlayerClass::Warrior);
        for i in 0..25 {
            state.add_log_entry(format!("entry {i}"), false, true);
        }
        assert_eq!(state.battle_log.len(), BATTLE_LOG_CAPACITY);
        assert_eq!(state.battle_log.front().unwrap().message, "entry 15");
        assert_eq!(state.battle_log.back().unwrap().message, "entry 24");
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::default_encounter("Imra", PlayerClass::Wizard);
        state.current_enemy = Some(Character::new("Goblin", Archetype::Goblin));

        let snap = state.snapshot();
        assert_eq!(snap.player.name, "Imra");
        assert_eq!(snap.player.mana, 10);
        assert_eq!(snap.enemies_remaining, 3);
        let enemy = snap.current_enemy.expect("enemy in snapshot");
        assert_eq!(enemy.name, "Goblin");
        assert_eq!(enemy.status, "Goblin has 6/6 health, 2 power.");
        assert!(snap.outcome.is_none());
    }
}
