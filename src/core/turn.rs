//! The encounter/turn controller: a state machine sequencing player
//! intents, enemy retaliation, enemy replacement, and terminal
//! conditions.
//!
//! All randomness flows through the injected `rng` argument. Pass
//! `rand::thread_rng()` in production or a seeded
//! `rand_chacha::ChaCha8Rng` in tests for deterministic runs.

use rand::Rng;
use thiserror::Error;

use crate::combat::logic::resolve_attack;
use crate::combat::types::{AttackKind, CombatEvent};
use crate::core::game_state::{GameState, Intent, Outcome};
use crate::items::store;
use crate::items::types::StoreError;

/// A single event produced by a turn.
///
/// The presentation layer maps these to combat log lines and UI state;
/// the game logic layer never touches UI types directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// A new enemy was drawn from the pool.
    EnemyAppeared { name: String, message: String },
    /// The player's attack landed.
    PlayerHit {
        damage: u32,
        kind: AttackKind,
        message: String,
    },
    /// An attack was evaded entirely.
    AttackEvaded { message: String },
    /// The current enemy hit the player.
    EnemyHit { damage: u32, message: String },
    /// The attacker healed itself after attacking (Medic).
    SelfHeal { amount: u32, message: String },
    /// An un-killable enemy was driven to 0 HP, to no lasting effect.
    EnemyKnockedDown { message: String },
    /// The current enemy died and paid its bounty.
    EnemyDefeated {
        name: String,
        bounty: u32,
        message: String,
    },
    ItemPurchased {
        name: String,
        cost: u32,
        message: String,
    },
    ItemUsed { name: String, message: String },
    PlayerDefeated { message: String },
    Victory { message: String },
    Fled { message: String },
}

impl TurnEvent {
    pub fn message(&self) -> &str {
        match self {
            TurnEvent::EnemyAppeared { message, .. }
            | TurnEvent::PlayerHit { message, .. }
            | TurnEvent::AttackEvaded { message }
            | TurnEvent::EnemyHit { message, .. }
            | TurnEvent::SelfHeal { message, .. }
            | TurnEvent::EnemyKnockedDown { message }
            | TurnEvent::EnemyDefeated { message, .. }
            | TurnEvent::ItemPurchased { message, .. }
            | TurnEvent::ItemUsed { message, .. }
            | TurnEvent::PlayerDefeated { message }
            | TurnEvent::Victory { message }
            | TurnEvent::Fled { message } => message,
        }
    }

    pub fn is_crit(&self) -> bool {
        matches!(
            self,
            TurnEvent::PlayerHit {
                kind: AttackKind::Critical,
                ..
            }
        )
    }

    pub fn is_player_action(&self) -> bool {
        !matches!(
            self,
            TurnEvent::EnemyAppeared { .. }
                | TurnEvent::EnemyHit { .. }
                | TurnEvent::PlayerDefeated { .. }
        )
    }
}

/// A turn that could not be taken. Locally recoverable; state is
/// unchanged by the rejected part of the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("the battle is already over")]
    BattleOver,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Draws the next enemy uniformly at random if none is active. With an
/// empty pool the session ends in victory. Returns the event (already
/// logged) if anything happened.
pub fn spawn_enemy_if_needed<R: Rng>(state: &mut GameState, rng: &mut R) -> Option<TurnEvent> {
    if state.is_over() || state.current_enemy.is_some() {
        return None;
    }
    let event = if state.enemy_pool.is_empty() {
        state.outcome = Some(Outcome::Victory);
        TurnEvent::Victory {
            message: "All enemies are defeated. Victory!".to_string(),
        }
    } else {
        let index = rng.gen_range(0..state.enemy_pool.len());
        let enemy = state.enemy_pool.swap_remove(index);
        let message = format!("A {} draws near!", enemy.name);
        let name = enemy.name.clone();
        state.current_enemy = Some(enemy);
        TurnEvent::EnemyAppeared { name, message }
    };
    log_event(state, &event);
    Some(event)
}

/// Resolves one player intent. Attack and Pass give the surviving enemy
/// its retaliation; item and store intents do not consume the enemy's
/// turn. Terminal outcomes are final: any further intent is
/// [`TurnError::BattleOver`].
pub fn take_turn<R: Rng>(
    state: &mut GameState,
    intent: Intent,
    rng: &mut R,
) -> Result<Vec<TurnEvent>, TurnError> {
    if state.is_over() {
        return Err(TurnError::BattleOver);
    }

    let mut events = Vec::new();
    if let Some(event) = spawn_enemy_if_needed(state, rng) {
        events.push(event);
    }
    if state.is_over() {
        // The pool ran dry; the drawn intent no longer applies.
        return Ok(events);
    }

    match intent {
        Intent::Attack | Intent::Pass => {
            let mut attack_events = Vec::new();
            let mut retaliation_events = Vec::new();
            let mut enemy_down = false;
            if let Some(enemy) = state.current_enemy.as_mut() {
                if intent == Intent::Attack {
                    attack_events = resolve_attack(&mut state.player, enemy, rng);
                    enemy_down = !enemy.is_alive();
                }
                if !enemy_down {
                    retaliation_events = resolve_attack(enemy, &mut state.player, rng);
                }
            }
            for event in attack_events {
                push_event(state, &mut events, player_event(event));
            }
            if enemy_down {
                state.current_enemy = None;
            }
            for event in retaliation_events {
                if let Some(turn_event) = enemy_event(event) {
                    push_event(state, &mut events, turn_event);
                }
            }

            if !state.player.is_alive() {
                state.outcome = Some(Outcome::Defeat);
                push_event(
                    state,
                    &mut events,
                    TurnEvent::PlayerDefeated {
                        message: "You have been defeated. Game over.".to_string(),
                    },
                );
            } else if state.current_enemy.is_none() && state.enemy_pool.is_empty() {
                state.outcome = Some(Outcome::Victory);
                push_event(
                    state,
                    &mut events,
                    TurnEvent::Victory {
                        message: "All enemies are defeated. Victory!".to_string(),
                    },
                );
            }
        }
        Intent::UseItem(index) => {
            let event = store::use_item(state, index)?;
            push_event(state, &mut events, event);
        }
        Intent::Buy(index) => {
            let event = store::buy(state, index)?;
            push_event(state, &mut events, event);
        }
        Intent::Flee => {
            state.outcome = Some(Outcome::Fled);
            push_event(
                state,
                &mut events,
                TurnEvent::Fled {
                    message: "You flee from the battle. Make haste!".to_string(),
                },
            );
        }
    }

    Ok(events)
}

fn log_event(state: &mut GameState, event: &TurnEvent) {
    state.add_log_entry(
        event.message().to_string(),
        event.is_crit(),
        event.is_player_action(),
    );
}

fn push_event(state: &mut GameState, events: &mut Vec<TurnEvent>, event: TurnEvent) {
    log_event(state, &event);
    events.push(event);
}

/// Maps a combat event from the player's attack exchange.
fn player_event(event: CombatEvent) -> TurnEvent {
    match event {
        CombatEvent::Hit {
            attacker,
            target,
            damage,
            kind,
        } => {
            let message = match kind {
                AttackKind::Normal => {
                    format!("{attacker} does {damage} damage to {target}.")
                }
                AttackKind::Critical => {
                    format!("{attacker} lands a critical hit! {damage} damage to {target}.")
                }
                AttackKind::Spell => {
                    format!("{attacker} unleashes a spell! {damage} damage to {target}.")
                }
            };
            TurnEvent::PlayerHit {
                damage,
                kind,
                message,
            }
        }
        CombatEvent::Evaded { attacker, target } => TurnEvent::AttackEvaded {
            message: format!("{target} slips away from {attacker}'s attack."),
        },
        CombatEvent::KnockedDown { target } => TurnEvent::EnemyKnockedDown {
            message: format!("{target} collapses... and rises again."),
        },
        CombatEvent::Killed { target, bounty } => TurnEvent::EnemyDefeated {
            message: format!("{target} is dead. Bounty: {bounty} coins."),
            name: target,
            bounty,
        },
        CombatEvent::SelfHeal { name, amount } => TurnEvent::SelfHeal {
            amount,
            message: format!("{name} patches a wound (+{amount} health)."),
        },
    }
}

/// Maps a combat event from the enemy's retaliation. Death bookkeeping
/// for the player is handled by the controller, not the exchange.
fn enemy_event(event: CombatEvent) -> Option<TurnEvent> {
    match event {
        CombatEvent::Hit {
            attacker,
            target,
            damage,
            ..
        } => Some(TurnEvent::EnemyHit {
            damage,
            message: format!("{attacker} does {damage} damage to {target}."),
        }),
        CombatEvent::Evaded { attacker, target } => Some(TurnEvent::AttackEvaded {
            message: format!("{target} slips away from {attacker}'s attack."),
        }),
        CombatEvent::SelfHeal { name, amount } => Some(TurnEvent::SelfHeal {
            amount,
            message: format!("{name} patches a wound (+{amount} health)."),
        }),
        CombatEvent::KnockedDown { .. } | CombatEvent::Killed { .. } => None,
    }
}
