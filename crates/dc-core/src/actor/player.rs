//! The player character

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::debug;

use super::ResistanceSet;
use crate::dungeon::Coord;
use crate::object::Weapon;

bitflags! {
    /// Transient conditions on the player
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct PlayerStatus: u16 {
        const CONFUSED = 0x0001;
        const PARALYSED = 0x0002;
        const ASLEEP = 0x0004;
        const PETRIFYING = 0x0008;
        const PETRIFIED = 0x0010;
        const CAUGHT = 0x0020;
        const INVISIBLE = 0x0040;
        const SEE_INVISIBLE = 0x0080;
    }
}

impl Serialize for PlayerStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PlayerStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(PlayerStatus::from_bits_truncate(bits))
    }
}

/// Multi-turn activity the player may be in the middle of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Activity {
    Travel,
    Explore,
    Rest,
}

/// Why an activity was interrupted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ActivityInterrupt {
    HitMonster,
    Hurt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub pos: Coord,

    pub hp: i32,
    pub hp_max: i32,
    pub xl: u8,
    pub ac: i32,
    pub ev: i32,

    pub status: PlayerStatus,
    pub resists: ResistanceSet,

    /// Wielded item, if any
    pub weapon: Option<Weapon>,

    pub activity: Option<Activity>,

    /// Set once the current action has spent the turn
    pub turn_is_over: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new("Player", Coord::origin())
    }
}

impl Player {
    pub fn new(name: impl Into<String>, pos: Coord) -> Self {
        Self {
            name: name.into(),
            pos,
            hp: 20,
            hp_max: 20,
            xl: 1,
            ac: 0,
            ev: 10,
            status: PlayerStatus::empty(),
            resists: ResistanceSet::default(),
            weapon: None,
            activity: None,
            turn_is_over: false,
        }
    }

    pub fn alive(&self) -> bool {
        self.hp > 0
    }

    pub fn confused(&self) -> bool {
        self.status.contains(PlayerStatus::CONFUSED)
    }

    pub fn paralysed(&self) -> bool {
        self.status.contains(PlayerStatus::PARALYSED)
    }

    pub fn asleep(&self) -> bool {
        self.status.contains(PlayerStatus::ASLEEP)
    }

    pub fn petrified(&self) -> bool {
        self.status.contains(PlayerStatus::PETRIFIED)
    }

    pub fn petrifying(&self) -> bool {
        self.status.contains(PlayerStatus::PETRIFYING)
    }

    pub fn caught(&self) -> bool {
        self.status.contains(PlayerStatus::CAUGHT)
    }

    pub fn invisible(&self) -> bool {
        self.status.contains(PlayerStatus::INVISIBLE)
    }

    pub fn sees_invisible(&self) -> bool {
        self.status.contains(PlayerStatus::SEE_INVISIBLE)
    }

    /// Stop any multi-turn activity.
    pub fn interrupt_activity(&mut self, why: ActivityInterrupt) -> Option<Activity> {
        let stopped = self.activity.take();
        if let Some(activity) = stopped {
            debug!(%activity, reason = %why, "activity interrupted");
        }
        stopped
    }

    /// Apply damage; returns true if this killed the player.
    pub fn hurt(&mut self, amount: i32) -> bool {
        if !self.alive() {
            return false;
        }
        self.hp -= amount.max(0);
        self.interrupt_activity(ActivityInterrupt::Hurt);
        !self.alive()
    }
}
