//! Damage flavours
//!
//! A flavour is the elemental tag carried by a beam or melee effect. It
//! decides which resistance applies and how much of the damage can be
//! resisted at all.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Elemental flavour attached to an attack or beam
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum DamageFlavour {
    /// Plain physical damage, never resisted
    #[default]
    Physical = 0,
    MagicMissile = 1,
    Fire = 2,
    Cold = 3,
    Electricity = 4,
    Poison = 5,
    /// Poison-tipped projectile: mostly poison, partly piercing
    PoisonArrow = 6,
    Acid = 7,
    Holy = 8,
    Miasma = 9,
    NegativeEnergy = 10,
    Steam = 11,
    /// Drowning damage from a water blast
    Water = 12,
    Ice = 13,
    Lava = 14,
    /// Clinging napalm
    StickyFlame = 15,
}

/// The resistance an actor uses against a flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ResistKind {
    Fire,
    Cold,
    Electricity,
    Poison,
    Acid,
    Holy,
    Miasma,
    NegativeEnergy,
    Steam,
    Asphyxiation,
}

impl DamageFlavour {
    /// Percentage of the raw damage that resistance can act upon; the rest
    /// always lands.
    pub const fn resistible_fraction(&self) -> i32 {
        match self {
            // drowning is only partly an elemental effect
            DamageFlavour::Water => 40,
            // mostly solid ice
            DamageFlavour::Ice => 40,
            DamageFlavour::Lava => 55,
            DamageFlavour::PoisonArrow => 70,
            _ => 100,
        }
    }

    /// Flavours whose resistance behaves more like an on/off switch. These
    /// get a bonus level whenever any resistance is present.
    pub const fn is_boolean_resist(&self) -> bool {
        matches!(
            self,
            DamageFlavour::Electricity
                | DamageFlavour::Miasma
                | DamageFlavour::StickyFlame
                | DamageFlavour::Water
        )
    }

    pub const fn resist_kind(&self) -> Option<ResistKind> {
        match self {
            DamageFlavour::Physical | DamageFlavour::MagicMissile => None,
            DamageFlavour::Fire | DamageFlavour::Lava | DamageFlavour::StickyFlame => {
                Some(ResistKind::Fire)
            }
            DamageFlavour::Cold | DamageFlavour::Ice => Some(ResistKind::Cold),
            DamageFlavour::Electricity => Some(ResistKind::Electricity),
            DamageFlavour::Poison | DamageFlavour::PoisonArrow => Some(ResistKind::Poison),
            DamageFlavour::Acid => Some(ResistKind::Acid),
            DamageFlavour::Holy => Some(ResistKind::Holy),
            DamageFlavour::Miasma => Some(ResistKind::Miasma),
            DamageFlavour::NegativeEnergy => Some(ResistKind::NegativeEnergy),
            DamageFlavour::Steam => Some(ResistKind::Steam),
            DamageFlavour::Water => Some(ResistKind::Asphyxiation),
        }
    }

    /// Short noun used in combat messages ("the fire", "the acid").
    pub const fn noun(&self) -> &'static str {
        match self {
            DamageFlavour::Physical => "blow",
            DamageFlavour::MagicMissile => "magic",
            DamageFlavour::Fire | DamageFlavour::StickyFlame => "fire",
            DamageFlavour::Cold => "cold",
            DamageFlavour::Electricity => "electricity",
            DamageFlavour::Poison | DamageFlavour::PoisonArrow => "poison",
            DamageFlavour::Acid => "acid",
            DamageFlavour::Holy => "holy energy",
            DamageFlavour::Miasma => "miasma",
            DamageFlavour::NegativeEnergy => "negative energy",
            DamageFlavour::Steam => "steam",
            DamageFlavour::Water => "water",
            DamageFlavour::Ice => "ice",
            DamageFlavour::Lava => "lava",
        }
    }
}
