//! Monster attack definitions
//!
//! These define HOW a monster delivers each of its melee attacks.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::DamageFlavour;
use crate::consts::MAX_NUM_ATTACKS;

/// Attack type - how the attack is delivered
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum AttackType {
    /// Empty slot in the attack table
    #[default]
    None = 0,
    /// Weapon or fist
    Hit = 1,
    Bite = 2,
    Sting = 3,
    Claw = 4,
    Touch = 5,
    Trample = 6,
    Butt = 7,
    Constrict = 8,
}

impl AttackType {
    /// Verb for "The X <verb>s you."
    pub const fn verb(&self) -> &'static str {
        match self {
            AttackType::None => "misses",
            AttackType::Hit => "hit",
            AttackType::Bite => "bite",
            AttackType::Sting => "sting",
            AttackType::Claw => "claw",
            AttackType::Touch => "touch",
            AttackType::Trample => "trample",
            AttackType::Butt => "butt",
            AttackType::Constrict => "constrict",
        }
    }

    /// Only `Hit` attacks use a wielded weapon
    pub const fn uses_weapon(&self) -> bool {
        matches!(self, AttackType::Hit)
    }
}

/// A single attack definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonAttack {
    #[serde(default)]
    pub kind: AttackType,
    /// Extra elemental damage riding on the attack
    #[serde(default)]
    pub flavour: DamageFlavour,
    /// Maximum base damage
    #[serde(default)]
    pub damage: u8,
}

impl MonAttack {
    pub const fn new(kind: AttackType, flavour: DamageFlavour, damage: u8) -> Self {
        Self {
            kind,
            flavour,
            damage,
        }
    }

    pub const fn hit(damage: u8) -> Self {
        Self::new(AttackType::Hit, DamageFlavour::Physical, damage)
    }

    pub const fn is_active(&self) -> bool {
        !matches!(self.kind, AttackType::None)
    }
}

/// A monster's full attack table
pub type AttackSet = [MonAttack; MAX_NUM_ATTACKS];

pub const fn empty_attacks() -> AttackSet {
    [MonAttack::new(AttackType::None, DamageFlavour::Physical, 0); MAX_NUM_ATTACKS]
}

/// Build an attack table from a list, ignoring anything past the table size.
pub fn attack_set(attacks: &[MonAttack]) -> AttackSet {
    let mut set = empty_attacks();
    for (slot, atk) in set.iter_mut().zip(attacks) {
        *slot = *atk;
    }
    set
}
