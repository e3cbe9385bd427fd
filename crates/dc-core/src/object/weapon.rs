//! Wieldable items

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::combat::DamageFlavour;
use crate::consts::BASE_ACTION_ENERGY;

/// Broad weapon class
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum WeaponClass {
    #[default]
    ShortBlade,
    LongBlade,
    Axe,
    MaceFlail,
    Polearm,
    Staff,
    /// Bows, slings and crossbows
    Launcher,
    /// Anything wielded that is not a weapon at all
    NonWeapon,
}

/// A wieldable item as the combat core sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub class: WeaponClass,
    /// Base damage; a swing rolls 1..=damage
    pub damage: u8,
    /// Enchantment, added to both to-hit and damage
    pub plus: i8,
    /// Elemental brand
    #[serde(default)]
    pub brand: Option<DamageFlavour>,
    /// Energy per swing
    #[serde(default = "default_delay")]
    pub delay: i32,
}

fn default_delay() -> i32 {
    BASE_ACTION_ENERGY
}

impl Weapon {
    pub fn new(name: impl Into<String>, class: WeaponClass, damage: u8) -> Self {
        Self {
            name: name.into(),
            class,
            damage,
            plus: 0,
            brand: None,
            delay: BASE_ACTION_ENERGY,
        }
    }

    pub fn with_brand(mut self, brand: DamageFlavour) -> Self {
        self.brand = Some(brand);
        self
    }

    pub fn with_plus(mut self, plus: i8) -> Self {
        self.plus = plus;
        self
    }

    /// Whether swinging this in melee makes sense at all
    pub const fn is_melee(&self) -> bool {
        !matches!(self.class, WeaponClass::Launcher | WeaponClass::NonWeapon)
    }

    pub const fn is_weapon(&self) -> bool {
        !matches!(self.class, WeaponClass::NonWeapon)
    }

    /// Axes hit everything in an arc around the target.
    pub const fn cleaves(&self) -> bool {
        matches!(self.class, WeaponClass::Axe)
    }
}
