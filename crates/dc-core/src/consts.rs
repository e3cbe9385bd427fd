//! Core combat constants

/// Default level dimensions
pub const GXM: usize = 80;
pub const GYM: usize = 70;

/// Size of a monster's attack-definition table
pub const MAX_NUM_ATTACKS: usize = 4;

/// Cells scanned on each side of the primary target when cleaving
pub const CLEAVE_ARC_STEPS: u32 = 3;

/// Cleave swings after the first deal this percentage of normal damage
pub const CLEAVE_DAMAGE_PERCENT: i32 = 70;

/// Energy spent by a normal-speed action
pub const BASE_ACTION_ENERGY: i32 = 10;

/// Damage dice for an unarmed player punch
pub const UNARMED_DAMAGE: u8 = 3;

/// Default bounded message history
pub const MSG_HISTORY: usize = 100;
