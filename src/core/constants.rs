// Player archetype base stats
pub const WARRIOR_BASE_HP: u32 = 10;
pub const WARRIOR_POWER: u32 = 5;
pub const WIZARD_BASE_HP: u32 = 8;
pub const WIZARD_POWER: u32 = 1;
pub const WIZARD_BASE_MANA: u32 = 10;
pub const MEDIC_BASE_HP: u32 = 10;
pub const MEDIC_POWER: u32 = 5;
pub const PLAYER_STARTING_COINS: u32 = 20;

// Enemy archetype base stats
pub const GOBLIN_BASE_HP: u32 = 6;
pub const GOBLIN_POWER: u32 = 2;
pub const GOBLIN_BOUNTY: u32 = 5;
pub const SHADOW_BASE_HP: u32 = 1;
pub const SHADOW_POWER: u32 = 1;
pub const SHADOW_BOUNTY: u32 = 6;
pub const ZOMBIE_BASE_HP: u32 = 10;
pub const ZOMBIE_POWER: u32 = 1;

// Combat rolls (percent chances are out of 100)
pub const CRIT_CHANCE_PERCENT: u32 = 20;
pub const CRIT_MULTIPLIER: u32 = 2;
pub const SPELL_MANA_COST: u32 = 5;
pub const SPELL_POWER_MULTIPLIER: u32 = 3;
pub const MANA_REGEN_MIN: u32 = 1;
pub const MANA_REGEN_MAX: u32 = 3;
pub const MEDIC_HEAL_CHANCE_PERCENT: u32 = 20;
pub const MEDIC_HEAL_AMOUNT: u32 = 2;
pub const SHADOW_EVASION_PERCENT: u32 = 90;

// Store catalog
pub const TONIC_COST: u32 = 5;
pub const TONIC_HEAL_AMOUNT: u32 = 2;
pub const SWORD_COST: u32 = 10;
pub const SWORD_POWER_BONUS: u32 = 2;

// Inventory and log bounds
pub const MAX_INVENTORY_SIZE: usize = 8;
pub const BATTLE_LOG_CAPACITY: usize = 10;
