//! Integration test: store and inventory transactions
//!
//! Exercises purchases and item use through the turn controller, the
//! fail-closed error paths, and the shopping digression's exemption from
//! enemy retaliation.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish::character::PlayerClass;
use skirmish::core::game_state::{GameState, Intent};
use skirmish::core::turn::{take_turn, TurnError, TurnEvent};
use skirmish::items::types::{Item, ItemEffect, StoreError};

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn state_with_catalog(catalog: Vec<Item>) -> GameState {
    let mut state = GameState::default_encounter("Brynn", PlayerClass::Warrior);
    state.catalog = catalog;
    state
}

#[test]
fn test_purchase_then_failed_purchase() {
    let mut rng = test_rng();
    let mut state = state_with_catalog(vec![
        Item::new("Sword", 10, ItemEffect::PowerBoost(2)),
        Item::new("Greatsword", 15, ItemEffect::PowerBoost(4)),
    ]);
    assert_eq!(state.player.coins, 20);

    let events = take_turn(&mut state, Intent::Buy(0), &mut rng).unwrap();
    assert!(matches!(
        events.last(),
        Some(TurnEvent::ItemPurchased { cost: 10, .. })
    ));
    assert_eq!(state.player.coins, 10);
    assert_eq!(state.inventory.len(), 1);

    let err = take_turn(&mut state, Intent::Buy(1), &mut rng).unwrap_err();
    assert_eq!(
        err,
        TurnError::Store(StoreError::InsufficientFunds { cost: 15, coins: 10 })
    );
    assert_eq!(state.player.coins, 10, "coins unchanged on failure");
    assert_eq!(state.inventory.len(), 1, "inventory unchanged on failure");
}

#[test]
fn test_shopping_never_triggers_retaliation() {
    let mut rng = test_rng();
    let mut state = state_with_catalog(vec![Item::new("Tonic", 5, ItemEffect::Heal(2))]);

    take_turn(&mut state, Intent::Buy(0), &mut rng).unwrap();
    take_turn(&mut state, Intent::UseItem(0), &mut rng).unwrap();

    assert_eq!(
        state.player.current_hp, state.player.max_hp,
        "two shopping turns, zero enemy attacks"
    );
    let enemy = state.current_enemy.as_ref().expect("enemy drawn");
    assert_eq!(enemy.current_hp, enemy.max_hp, "the enemy was never touched");
}

#[test]
fn test_used_item_applies_once_and_only_once() {
    let mut rng = test_rng();
    let mut state = state_with_catalog(vec![
        Item::new("Sword", 10, ItemEffect::PowerBoost(2)),
        Item::new("Tonic", 5, ItemEffect::Heal(2)),
    ]);
    let base_power = state.player.power;

    take_turn(&mut state, Intent::Buy(0), &mut rng).unwrap();
    take_turn(&mut state, Intent::Buy(1), &mut rng).unwrap();
    assert_eq!(state.inventory.len(), 2);

    take_turn(&mut state, Intent::UseItem(0), &mut rng).unwrap();
    assert_eq!(state.player.power, base_power + 2);

    // Slot 0 now holds the tonic; the sword's effect must not reapply
    take_turn(&mut state, Intent::UseItem(0), &mut rng).unwrap();
    assert_eq!(state.player.power, base_power + 2);
    assert!(state.inventory.is_empty());

    let err = take_turn(&mut state, Intent::UseItem(0), &mut rng).unwrap_err();
    assert_eq!(
        err,
        TurnError::Store(StoreError::InvalidIndex { index: 0, len: 0 })
    );
    assert_eq!(state.player.power, base_power + 2);
}

#[test]
fn test_bounty_money_is_spendable() {
    let mut rng = test_rng();
    let mut state = GameState::new(
        "Brynn",
        PlayerClass::Warrior,
        vec![skirmish::character::Character::new(
            "Goblin",
            skirmish::character::Archetype::Goblin,
        )],
        vec![Item::new("Warchest", 22, ItemEffect::PowerBoost(5))],
    );

    // Cannot afford the warchest on starting coins alone
    let err = take_turn(&mut state, Intent::Buy(0), &mut rng).unwrap_err();
    assert_eq!(
        err,
        TurnError::Store(StoreError::InsufficientFunds { cost: 22, coins: 20 })
    );

    // Earn the goblin's bounty, then the purchase goes through
    while state.current_enemy.is_some() || !state.enemy_pool.is_empty() {
        if state.is_over() {
            break;
        }
        take_turn(&mut state, Intent::Attack, &mut rng).unwrap();
    }
    assert_eq!(state.player.coins, 25);

    // The session is already won, so the store is closed
    assert_eq!(
        take_turn(&mut state, Intent::Buy(0), &mut rng).unwrap_err(),
        TurnError::BattleOver
    );
}
