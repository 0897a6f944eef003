use serde::{Deserialize, Serialize};

/// How an attack's damage was rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackKind {
    Normal,
    /// Warrior critical hit (double damage).
    Critical,
    /// Wizard spell (triple damage, paid for with mana).
    Spell,
}

/// One thing that happened while resolving a single attack exchange.
///
/// Emitted by [`crate::combat::logic::resolve_attack`] in resolution
/// order; the turn controller turns these into log-ready
/// [`crate::core::turn::TurnEvent`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// The hit connected and damage was applied.
    Hit {
        attacker: String,
        target: String,
        damage: u32,
        kind: AttackKind,
    },
    /// The target evaded the hit entirely.
    Evaded { attacker: String, target: String },
    /// An un-killable target was driven to 0 HP (cosmetic only).
    KnockedDown { target: String },
    /// The target died; its bounty was transferred to the attacker.
    Killed { target: String, bounty: u32 },
    /// The attacker healed itself after attacking (Medic).
    SelfHeal { name: String, amount: u32 },
}
