//! dc-core: melee combat core for a dungeon-crawl roguelike
//!
//! Contains the combat rules and the world state they act on, with no I/O.
//! The entry points are [`combat::fight_melee`] for a round of melee,
//! [`combat::resist_adjust_damage`] for elemental damage and
//! [`combat::is_unchivalric_attack`] for classifying attacks on
//! defenceless targets.

pub mod actor;
pub mod combat;
pub mod dungeon;
pub mod object;
pub mod world;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GameRng;
