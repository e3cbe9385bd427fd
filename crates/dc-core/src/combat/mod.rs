//! Melee combat
//!
//! The round driver ([`fight_melee`]) decides who swings at whom and how
//! often; each individual swing is handed to an [`AttackResolver`].
//! [`StandardMelee`] is the built-in resolver.

mod attack;
mod attack_type;
mod chivalry;
mod cleave;
mod flavour;
mod melee;
mod resist;
mod standard;

pub use attack::{AttackReport, AttackRequest, AttackResolver};
pub use attack_type::{AttackSet, AttackType, MonAttack, attack_set, empty_attacks};
pub use chivalry::{UnchivalricAttack, is_unchivalric_attack};
pub use cleave::{cleave_targets, cleave_targets_in_direction, cleave_targets_with_direction};
pub use flavour::{DamageFlavour, ResistKind};
pub use melee::{MeleeOutcome, attack_cleave_targets, fight_melee};
pub use resist::{
    DefenderKind, ResistOutcome, player_resist_fraction, resist_adjust_damage,
    resist_adjust_damage_with, resist_message,
};
pub use standard::{MeleeStats, StandardMelee};
