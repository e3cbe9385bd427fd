//! Actors: the player and monsters
//!
//! Combat code never holds references across mutations. It passes
//! [`ActorRef`] handles around and looks actors up in the world as
//! [`Actor`] views whenever it needs to read them.

mod monster;
mod player;
mod resist;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub use monster::{
    Behaviour, BehaviourEvent, Monster, MonsterId, MonsterInventory, MonsterStatus, MonsterTraits,
    WieldSlot,
};
pub use player::{Activity, ActivityInterrupt, Player, PlayerStatus};
pub use resist::ResistanceSet;

use crate::combat::DamageFlavour;
use crate::dungeon::Coord;
use crate::object::Weapon;

/// Handle to an actor in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorRef {
    Player,
    Monster(MonsterId),
}

impl ActorRef {
    pub const fn is_player(&self) -> bool {
        matches!(self, ActorRef::Player)
    }

    pub const fn monster_id(&self) -> Option<MonsterId> {
        match self {
            ActorRef::Player => None,
            ActorRef::Monster(id) => Some(*id),
        }
    }
}

/// Disposition of a monster towards the player
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Attitude {
    #[default]
    Hostile,
    /// Fights everything, including other monsters
    Neutral,
    /// Ignores everyone unless attacked
    StrictNeutral,
    /// Never harms the player
    GoodNeutral,
    Friendly,
}

impl Attitude {
    pub const fn wont_attack(&self) -> bool {
        matches!(
            self,
            Attitude::Friendly | Attitude::GoodNeutral | Attitude::StrictNeutral
        )
    }

    /// Two attitudes are on the same side if neither will start a fight,
    /// or they are identical.
    pub fn aligned_with(&self, other: Attitude) -> bool {
        (self.wont_attack() && other.wont_attack()) || *self == other
    }
}

/// Borrowed view of an actor, tagged by kind
#[derive(Debug, Clone, Copy)]
pub enum Actor<'a> {
    Player(&'a Player),
    Monster(&'a Monster),
}

impl<'a> Actor<'a> {
    pub fn handle(&self) -> ActorRef {
        match self {
            Actor::Player(_) => ActorRef::Player,
            Actor::Monster(m) => ActorRef::Monster(m.id),
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Actor::Player(_))
    }

    pub fn as_monster(&self) -> Option<&'a Monster> {
        match self {
            Actor::Player(_) => None,
            Actor::Monster(m) => Some(m),
        }
    }

    pub fn pos(&self) -> Coord {
        match self {
            Actor::Player(p) => p.pos,
            Actor::Monster(m) => m.pos,
        }
    }

    pub fn alive(&self) -> bool {
        match self {
            Actor::Player(p) => p.alive(),
            Actor::Monster(m) => m.alive,
        }
    }

    /// The player is on its own side and counts as friendly.
    pub fn attitude(&self) -> Attitude {
        match self {
            Actor::Player(_) => Attitude::Friendly,
            Actor::Monster(m) => m.attitude,
        }
    }

    pub fn wont_attack(&self) -> bool {
        match self {
            Actor::Player(_) => false,
            Actor::Monster(m) => m.wont_attack(),
        }
    }

    pub fn confused(&self) -> bool {
        match self {
            Actor::Player(p) => p.confused(),
            Actor::Monster(m) => m.is_confused(true),
        }
    }

    pub fn paralysed(&self) -> bool {
        match self {
            Actor::Player(p) => p.paralysed(),
            Actor::Monster(m) => m.paralysed(),
        }
    }

    pub fn asleep(&self) -> bool {
        match self {
            Actor::Player(p) => p.asleep(),
            Actor::Monster(m) => m.asleep(),
        }
    }

    pub fn petrified(&self) -> bool {
        match self {
            Actor::Player(p) => p.petrified(),
            Actor::Monster(m) => m.petrified(),
        }
    }

    pub fn petrifying(&self) -> bool {
        match self {
            Actor::Player(p) => p.petrifying(),
            Actor::Monster(m) => m.petrifying(),
        }
    }

    pub fn caught(&self) -> bool {
        match self {
            Actor::Player(p) => p.caught(),
            Actor::Monster(m) => m.caught(),
        }
    }

    pub fn invisible(&self) -> bool {
        match self {
            Actor::Player(p) => p.invisible(),
            Actor::Monster(m) => m.invisible(),
        }
    }

    pub fn sees_invisible(&self) -> bool {
        match self {
            Actor::Player(p) => p.sees_invisible(),
            Actor::Monster(m) => m.sees_invisible(),
        }
    }

    /// Plants and similar things that cannot fight back
    pub fn cannot_fight(&self) -> bool {
        match self {
            Actor::Player(_) => false,
            Actor::Monster(m) => m.cannot_fight(),
        }
    }

    pub fn ac(&self) -> i32 {
        match self {
            Actor::Player(p) => p.ac,
            Actor::Monster(m) => m.ac,
        }
    }

    pub fn ev(&self) -> i32 {
        match self {
            Actor::Player(p) => p.ev,
            Actor::Monster(m) => m.ev,
        }
    }

    pub fn weapon(&self) -> Option<&'a Weapon> {
        match self {
            Actor::Player(p) => p.weapon.as_ref(),
            Actor::Monster(m) => m.weapon(),
        }
    }

    /// Resistance level against a damage flavour
    pub fn res(&self, flavour: DamageFlavour) -> i32 {
        match self {
            Actor::Player(p) => p.resists.against(flavour),
            Actor::Monster(m) => m.resists.against(flavour),
        }
    }

    /// "you" or "the goblin"
    pub fn name(&self) -> String {
        match self {
            Actor::Player(_) => "you".to_string(),
            Actor::Monster(m) => m.the_name(),
        }
    }

    /// "You" or "The goblin"
    pub fn cap_name(&self) -> String {
        match self {
            Actor::Player(_) => "You".to_string(),
            Actor::Monster(m) => m.cap_the_name(),
        }
    }
}

/// Whether two actors are on the same side
pub fn mons_aligned(a: Actor<'_>, b: Actor<'_>) -> bool {
    a.attitude().aligned_with(b.attitude())
}

/// Whether `attacker` should leave `defender` alone: they are on the same
/// side, or one of them is the player and the other won't attack.
pub fn harmless_to_hit(attacker: Actor<'_>, defender: Actor<'_>) -> bool {
    mons_aligned(attacker, defender)
        || (attacker.is_player() && defender.wont_attack())
        || (defender.is_player() && attacker.wont_attack())
}
