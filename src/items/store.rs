use crate::core::constants::MAX_INVENTORY_SIZE;
use crate::core::game_state::GameState;
use crate::core::turn::TurnEvent;
use crate::items::types::StoreError;

/// Buys the catalog item at `catalog_index` into the inventory.
///
/// Fails closed: the coin check, the index check, and the inventory
/// bound are all validated before any state changes.
pub fn buy(state: &mut GameState, catalog_index: usize) -> Result<TurnEvent, StoreError> {
    let item = match state.catalog.get(catalog_index) {
        Some(item) => item.clone(),
        None => {
            return Err(StoreError::InvalidIndex {
                index: catalog_index,
                len: state.catalog.len(),
            })
        }
    };
    if state.inventory.len() >= MAX_INVENTORY_SIZE {
        return Err(StoreError::InventoryFull {
            capacity: MAX_INVENTORY_SIZE,
        });
    }
    if state.player.coins < item.cost {
        return Err(StoreError::InsufficientFunds {
            cost: item.cost,
            coins: state.player.coins,
        });
    }

    state.player.coins -= item.cost;
    let message = format!(
        "{} buys the {} for {} coins.",
        state.player.name, item.name, item.cost
    );
    let event = TurnEvent::ItemPurchased {
        name: item.name.clone(),
        cost: item.cost,
        message,
    };
    state.inventory.push(item);
    Ok(event)
}

/// Consumes the inventory item at `index`: removes it and applies its
/// effect exactly once.
pub fn use_item(state: &mut GameState, index: usize) -> Result<TurnEvent, StoreError> {
    if index >= state.inventory.len() {
        return Err(StoreError::InvalidIndex {
            index,
            len: state.inventory.len(),
        });
    }
    let item = state.inventory.remove(index);
    item.effect.apply(&mut state.player);
    let message = format!(
        "{} uses the {} ({}).",
        state.player.name,
        item.name,
        item.effect.describe()
    );
    Ok(TurnEvent::ItemUsed {
        name: item.name,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::PlayerClass;
    use crate::core::constants::*;
    use crate::items::types::{Item, ItemEffect};

    fn test_state() -> GameState {
        GameState::default_encounter("Brynn", PlayerClass::Warrior)
    }

    #[test]
    fn test_buy_deducts_coins_and_appends() {
        let mut state = test_state();
        state.catalog = vec![Item::new("Sword", 10, ItemEffect::PowerBoost(2))];
        assert_eq!(state.player.coins, 20);

        buy(&mut state, 0).expect("purchase succeeds");
        assert_eq!(state.player.coins, 10);
        assert_eq!(state.inventory.len(), 1);
        assert_eq!(state.inventory[0].name, "Sword");
    }

    #[test]
    fn test_buy_fails_closed_on_insufficient_funds() {
        let mut state = test_state();
        state.catalog = vec![
            Item::new("Sword", 10, ItemEffect::PowerBoost(2)),
            Item::new("Greatsword", 15, ItemEffect::PowerBoost(4)),
        ];

        buy(&mut state, 0).expect("first purchase succeeds");
        assert_eq!(state.player.coins, 10);

        let err = buy(&mut state, 1).expect_err("cannot afford");
        assert_eq!(err, StoreError::InsufficientFunds { cost: 15, coins: 10 });
        assert_eq!(state.player.coins, 10, "coins unchanged");
        assert_eq!(state.inventory.len(), 1, "inventory unchanged");
    }

    #[test]
    fn test_buy_rejects_bad_catalog_index() {
        let mut state = test_state();
        let err = buy(&mut state, 9).expect_err("index out of range");
        assert_eq!(err, StoreError::InvalidIndex { index: 9, len: 2 });
        assert_eq!(state.player.coins, 20);
    }

    #[test]
    fn test_buy_respects_inventory_bound() {
        let mut state = test_state();
        state.player.coins = 1000;
        state.catalog = vec![Item::new("Tonic", 5, ItemEffect::Heal(2))];
        for _ in 0..MAX_INVENTORY_SIZE {
            buy(&mut state, 0).expect("room in the pack");
        }
        let coins_before = state.player.coins;
        let err = buy(&mut state, 0).expect_err("pack full");
        assert_eq!(
            err,
            StoreError::InventoryFull {
                capacity: MAX_INVENTORY_SIZE
            }
        );
        assert_eq!(state.player.coins, coins_before, "no charge on failure");
        assert_eq!(state.inventory.len(), MAX_INVENTORY_SIZE);
    }

    #[test]
    fn test_use_item_applies_effect_exactly_once() {
        let mut state = test_state();
        state.inventory = vec![
            Item::new("Sword", 10, ItemEffect::PowerBoost(2)),
            Item::new("Tonic", 5, ItemEffect::Heal(2)),
        ];
        let power_before = state.player.power;

        use_item(&mut state, 0).expect("valid slot");
        assert_eq!(state.player.power, power_before + 2);
        assert_eq!(state.inventory.len(), 1);

        // Slot 0 now holds the Tonic; using it must not reapply the sword
        use_item(&mut state, 0).expect("valid slot");
        assert_eq!(state.player.power, power_before + 2);
        assert!(state.inventory.is_empty());

        let err = use_item(&mut state, 0).expect_err("nothing left");
        assert_eq!(err, StoreError::InvalidIndex { index: 0, len: 0 });
        assert_eq!(state.player.power, power_before + 2);
    }

    #[test]
    fn test_use_tonic_heals_capped() {
        let mut state = test_state();
        state.player.current_hp = state.player.max_hp - 1;
        state.inventory = vec![Item::new("Tonic", 5, ItemEffect::Heal(2))];

        use_item(&mut state, 0).expect("valid slot");
        assert_eq!(state.player.current_hp, state.player.max_hp);
    }
}
