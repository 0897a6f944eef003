use rand::Rng;

use crate::character::types::{Character, DamageResult};
use crate::character::Archetype;
use crate::combat::types::{AttackKind, CombatEvent};
use crate::core::constants::*;

/// Rolls the damage for one attack per the attacker's archetype rule.
/// Mutates the attacker where the rule has a resource cost (Wizard mana).
pub fn roll_damage<R: Rng>(attacker: &mut Character, rng: &mut R) -> (u32, AttackKind) {
    match attacker.archetype {
        Archetype::Warrior => {
            if rng.gen_range(0..100) < CRIT_CHANCE_PERCENT {
                (attacker.power * CRIT_MULTIPLIER, AttackKind::Critical)
            } else {
                (attacker.power, AttackKind::Normal)
            }
        }
        Archetype::Wizard => {
            if attacker.mana >= SPELL_MANA_COST {
                attacker.mana -= SPELL_MANA_COST;
                (attacker.power * SPELL_POWER_MULTIPLIER, AttackKind::Spell)
            } else {
                (attacker.power, AttackKind::Normal)
            }
        }
        _ => (attacker.power, AttackKind::Normal),
    }
}

/// Resolves one attack exchange atomically: damage roll, application,
/// death and bounty evaluation, then the attacker's post-attack effect.
///
/// On a kill the target's bounty moves into the attacker's coins. The
/// Wizard always regenerates 1..=3 mana afterwards (capped), whichever
/// damage branch fired; the Medic has a 20% chance to self-heal.
pub fn resolve_attack<R: Rng>(
    attacker: &mut Character,
    target: &mut Character,
    rng: &mut R,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();

    let (damage, kind) = roll_damage(attacker, rng);
    let was_alive = target.is_alive();

    match target.receive_damage(damage, rng) {
        DamageResult::Evaded => {
            events.push(CombatEvent::Evaded {
                attacker: attacker.name.clone(),
                target: target.name.clone(),
            });
        }
        DamageResult::Landed {
            amount,
            knocked_down,
        } => {
            events.push(CombatEvent::Hit {
                attacker: attacker.name.clone(),
                target: target.name.clone(),
                damage: amount,
                kind,
            });
            if knocked_down {
                events.push(CombatEvent::KnockedDown {
                    target: target.name.clone(),
                });
            }
            if was_alive && !target.is_alive() {
                attacker.coins += target.bounty;
                events.push(CombatEvent::Killed {
                    target: target.name.clone(),
                    bounty: target.bounty,
                });
            }
        }
    }

    match attacker.archetype {
        Archetype::Wizard => {
            let regen = rng.gen_range(MANA_REGEN_MIN..=MANA_REGEN_MAX);
            attacker.mana = (attacker.mana + regen).min(attacker.max_mana);
        }
        Archetype::Medic => {
            if rng.gen_range(0..100) < MEDIC_HEAL_CHANCE_PERCENT {
                let healed = attacker.heal(MEDIC_HEAL_AMOUNT);
                if healed > 0 {
                    events.push(CombatEvent::SelfHeal {
                        name: attacker.name.clone(),
                        amount: healed,
                    });
                }
            }
        }
        _ => {}
    }

    events
}
