//! Items the combat core cares about

mod weapon;

pub use weapon::{Weapon, WeaponClass};
