//! Monster instances

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::debug;

use super::{ActorRef, Attitude, ResistanceSet};
use crate::combat::{AttackSet, MonAttack, empty_attacks};
use crate::consts::BASE_ACTION_ENERGY;
use crate::dungeon::Coord;
use crate::object::Weapon;

/// Unique identifier for monster instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    pub const NONE: MonsterId = MonsterId(0);

    pub fn next(self) -> Self {
        MonsterId(self.0 + 1)
    }
}

bitflags! {
    /// Transient conditions on a monster
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct MonsterStatus: u16 {
        const CONFUSED = 0x0001;
        const PARALYSED = 0x0002;
        const ASLEEP = 0x0004;
        /// Turning to stone but not done yet
        const PETRIFYING = 0x0008;
        const PETRIFIED = 0x0010;
        /// Held in a net or web
        const CAUGHT = 0x0020;
        const INVISIBLE = 0x0040;
        const FLEEING = 0x0080;
        /// Pulled into its shell
        const WITHDRAWN = 0x0100;
        /// Curled up and rolling along
        const ROLLING = 0x0200;
    }
}

bitflags! {
    /// Innate properties of a monster's species
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct MonsterTraits: u16 {
        /// Indestructible missile-like entity (orbs of destruction)
        const PROJECTILE = 0x0001;
        /// May pick a new adjacent target mid-round
        const MULTI_TARGET = 0x0002;
        /// Attacks once per head, hydra-style
        const MULTI_HEADED = 0x0004;
        /// Permanently confused movers such as bats
        const BATTY = 0x0008;
        const SEE_INVISIBLE = 0x0010;
        /// Plants, fungi and other things that never fight back
        const NO_FIGHT = 0x0020;
    }
}

// bitflags values serialize as their raw bits
impl Serialize for MonsterStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MonsterStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(MonsterStatus::from_bits_truncate(bits))
    }
}

impl Serialize for MonsterTraits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MonsterTraits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(MonsterTraits::from_bits_truncate(bits))
    }
}

/// AI behaviour state
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Behaviour {
    Sleep,
    #[default]
    Wander,
    Seek,
    Flee,
}

/// Events fed to a monster's behaviour state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BehaviourEvent {
    /// Something bumped into or noticed the monster
    Alert,
    /// The monster was struck
    Whack,
}

/// Which carried weapon is in hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WieldSlot {
    #[default]
    Nothing,
    Melee,
    Ranged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterInventory {
    pub melee: Option<Weapon>,
    pub ranged: Option<Weapon>,
    pub wielding: WieldSlot,
}

/// A monster on the level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub pos: Coord,

    pub hp: i32,
    pub hp_max: i32,
    /// Hit dice
    pub hd: u8,
    pub ac: i32,
    pub ev: i32,

    pub attitude: Attitude,
    pub status: MonsterStatus,
    pub traits: MonsterTraits,

    /// Head count for multi-headed attackers
    pub heads: u8,
    pub attacks: AttackSet,
    pub resists: ResistanceSet,

    pub behaviour: Behaviour,
    /// Current target of the monster's attention
    pub foe: Option<ActorRef>,

    pub inventory: MonsterInventory,

    /// Accumulated action energy; attacking spends it
    pub speed_increment: i32,

    pub alive: bool,
}

impl Monster {
    pub fn new(id: MonsterId, name: impl Into<String>, pos: Coord) -> Self {
        Self {
            id,
            name: name.into(),
            pos,
            hp: 10,
            hp_max: 10,
            hd: 1,
            ac: 0,
            ev: 10,
            attitude: Attitude::Hostile,
            status: MonsterStatus::empty(),
            traits: MonsterTraits::empty(),
            heads: 1,
            attacks: empty_attacks(),
            resists: ResistanceSet::default(),
            behaviour: Behaviour::default(),
            foe: None,
            inventory: MonsterInventory::default(),
            speed_increment: 80,
            alive: true,
        }
    }

    /// "the goblin", as used mid-sentence
    pub fn the_name(&self) -> String {
        format!("the {}", self.name)
    }

    /// "The goblin", as used to open a sentence
    pub fn cap_the_name(&self) -> String {
        format!("The {}", self.name)
    }

    pub fn wont_attack(&self) -> bool {
        self.attitude.wont_attack()
    }

    pub fn friendly(&self) -> bool {
        self.attitude == Attitude::Friendly
    }

    /// Confusion; `count_innate` also counts the permanent kind bats have.
    pub fn is_confused(&self, count_innate: bool) -> bool {
        self.status.contains(MonsterStatus::CONFUSED)
            && (count_innate || !self.traits.contains(MonsterTraits::BATTY))
    }

    pub fn is_batty(&self) -> bool {
        self.traits.contains(MonsterTraits::BATTY)
    }

    pub fn withdrawn(&self) -> bool {
        self.status.contains(MonsterStatus::WITHDRAWN)
    }

    pub fn rolling(&self) -> bool {
        self.status.contains(MonsterStatus::ROLLING)
    }

    pub fn asleep(&self) -> bool {
        self.status.contains(MonsterStatus::ASLEEP)
    }

    pub fn paralysed(&self) -> bool {
        self.status.contains(MonsterStatus::PARALYSED)
    }

    pub fn petrified(&self) -> bool {
        self.status.contains(MonsterStatus::PETRIFIED)
    }

    pub fn petrifying(&self) -> bool {
        self.status.contains(MonsterStatus::PETRIFYING)
    }

    pub fn caught(&self) -> bool {
        self.status.contains(MonsterStatus::CAUGHT)
    }

    pub fn invisible(&self) -> bool {
        self.status.contains(MonsterStatus::INVISIBLE)
    }

    pub fn fleeing(&self) -> bool {
        self.status.contains(MonsterStatus::FLEEING) || self.behaviour == Behaviour::Flee
    }

    pub fn sees_invisible(&self) -> bool {
        self.traits.contains(MonsterTraits::SEE_INVISIBLE)
    }

    pub fn is_projectile(&self) -> bool {
        self.traits.contains(MonsterTraits::PROJECTILE)
    }

    pub fn cannot_fight(&self) -> bool {
        self.traits.contains(MonsterTraits::NO_FIGHT)
    }

    /// Attacks once per head instead of following the attack table
    pub fn has_hydra_multi_attack(&self) -> bool {
        self.traits.contains(MonsterTraits::MULTI_HEADED)
    }

    pub fn has_multitargeting(&self) -> bool {
        self.traits
            .intersects(MonsterTraits::MULTI_TARGET | MonsterTraits::MULTI_HEADED)
    }

    /// Attack definition for a given swing. Every head of a multi-headed
    /// monster uses the first definition.
    pub fn attack_def(&self, attack_number: u32) -> Option<MonAttack> {
        let slot = if self.has_hydra_multi_attack() {
            0
        } else {
            attack_number as usize
        };
        self.attacks.get(slot).copied().filter(|a| a.is_active())
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        match self.inventory.wielding {
            WieldSlot::Melee => self.inventory.melee.as_ref(),
            WieldSlot::Ranged => self.inventory.ranged.as_ref(),
            WieldSlot::Nothing => None,
        }
    }

    /// Swap to the carried melee weapon. Returns whether anything changed.
    pub fn wield_melee_weapon(&mut self) -> bool {
        if self.inventory.melee.is_none() || self.inventory.wielding == WieldSlot::Melee {
            return false;
        }
        debug!(monster = %self.name, "switching to melee weapon");
        self.inventory.wielding = WieldSlot::Melee;
        true
    }

    /// Feed an event to the behaviour state machine.
    pub fn behaviour_event(&mut self, event: BehaviourEvent, source: Option<ActorRef>) {
        let was_asleep = self.asleep();
        self.status.remove(MonsterStatus::ASLEEP);

        match event {
            BehaviourEvent::Alert | BehaviourEvent::Whack => {
                if self.behaviour == Behaviour::Sleep || self.behaviour == Behaviour::Wander {
                    self.behaviour = Behaviour::Seek;
                }
                if let Some(src) = source.filter(|s| *s != ActorRef::Monster(self.id)) {
                    self.foe = Some(src);
                }
            }
        }

        debug!(
            monster = %self.name,
            %event,
            woke = was_asleep,
            behaviour = %self.behaviour,
            "behaviour event"
        );
    }

    pub fn lose_energy(&mut self, amount: i32) {
        self.speed_increment -= amount;
    }

    /// Spend the energy of one full attack action
    pub fn lose_attack_energy(&mut self) {
        self.lose_energy(BASE_ACTION_ENERGY);
    }

    /// Apply damage; returns true if this killed the monster.
    pub fn hurt(&mut self, amount: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.hp -= amount.max(0);
        if self.hp <= 0 {
            self.alive = false;
            return true;
        }
        false
    }
}
