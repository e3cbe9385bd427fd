//! World state
//!
//! Everything the combat core reads and writes lives in [`World`]: the
//! level, the player, monsters, the RNG, options and the message log.
//! It is passed by `&mut` into every combat entry point.

mod errors;
mod messages;
mod options;
mod prompt;

pub use errors::{OptionsError, WorldError};
pub use messages::MessageLog;
pub use options::CombatOptions;
pub use prompt::{AutoConfirm, Prompter, ScriptedPrompter};

use tracing::{debug, trace};

use crate::actor::{Actor, ActorRef, BehaviourEvent, Monster, MonsterId, Player, mons_aligned};
use crate::dungeon::{Coord, LevelMap};
use crate::rng::GameRng;

pub struct World {
    pub map: LevelMap,
    pub player: Player,
    pub monsters: Vec<Monster>,
    pub rng: GameRng,
    pub options: CombatOptions,
    pub messages: MessageLog,
    pub prompter: Box<dyn Prompter>,
    next_monster_id: MonsterId,
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("player", &self.player.pos)
            .field("monsters", &self.monsters.len())
            .field("seed", &self.rng.seed())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl World {
    pub fn new(map: LevelMap, rng: GameRng) -> Self {
        Self::with_options(map, rng, CombatOptions::default())
    }

    pub fn with_options(map: LevelMap, rng: GameRng, options: CombatOptions) -> Self {
        let messages = MessageLog::new(options.msghistory);
        Self {
            map,
            player: Player::default(),
            monsters: Vec::new(),
            rng,
            options,
            messages,
            prompter: Box::new(AutoConfirm::default()),
            next_monster_id: MonsterId(1),
        }
    }

    pub fn set_prompter(&mut self, prompter: impl Prompter + 'static) {
        self.prompter = Box::new(prompter);
    }

    /// Look up an actor by handle. Dead monsters are still returned; use
    /// [`Actor::alive`] to tell.
    pub fn actor(&self, who: ActorRef) -> Option<Actor<'_>> {
        match who {
            ActorRef::Player => Some(Actor::Player(&self.player)),
            ActorRef::Monster(id) => self.monster(id).map(Actor::Monster),
        }
    }

    /// The living actor standing at `pos`, if any. In arena mode the
    /// player is not on the level.
    pub fn actor_at(&self, pos: Coord) -> Option<ActorRef> {
        if !self.options.arena && self.player.alive() && self.player.pos == pos {
            return Some(ActorRef::Player);
        }
        self.monsters
            .iter()
            .find(|m| m.alive && m.pos == pos)
            .map(|m| ActorRef::Monster(m.id))
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|m| m.id == id)
    }

    pub fn is_solid(&self, pos: Coord) -> bool {
        self.map.is_solid(pos)
    }

    /// Place a monster on the level, assigning it a fresh id.
    pub fn spawn_monster(&mut self, mut monster: Monster) -> Result<MonsterId, WorldError> {
        let pos = monster.pos;
        if !self.map.in_bounds(pos) {
            return Err(WorldError::OutOfBounds { pos });
        }
        if self.map.is_solid(pos) {
            return Err(WorldError::Solid { pos });
        }
        if self.actor_at(pos).is_some() {
            return Err(WorldError::Occupied { pos });
        }

        let id = self.next_monster_id;
        self.next_monster_id = id.next();
        monster.id = id;
        debug!(monster = %monster.name, ?id, %pos, "spawned monster");
        self.monsters.push(monster);
        Ok(id)
    }

    /// Move the player, refusing solid or occupied cells.
    pub fn place_player(&mut self, pos: Coord) -> Result<(), WorldError> {
        if !self.map.in_bounds(pos) {
            return Err(WorldError::OutOfBounds { pos });
        }
        if self.map.is_solid(pos) {
            return Err(WorldError::Solid { pos });
        }
        if self.monsters.iter().any(|m| m.alive && m.pos == pos) {
            return Err(WorldError::Occupied { pos });
        }
        self.player.pos = pos;
        Ok(())
    }

    /// Whether `viewer` can make out `target`: invisibility needs see
    /// invisible, and opaque clouds anywhere along the line block sight.
    pub fn can_see(&self, viewer: ActorRef, target: ActorRef) -> bool {
        let (Some(v), Some(t)) = (self.actor(viewer), self.actor(target)) else {
            return false;
        };
        if viewer == target {
            return true;
        }
        if t.invisible() && !v.sees_invisible() {
            return false;
        }
        !self.map.sight_blocked(v.pos(), t.pos())
    }

    /// Wake a monster up and point it at `source`.
    pub fn alert_monster(&mut self, id: MonsterId, source: ActorRef) {
        if let Some(mon) = self.monster_mut(id) {
            mon.behaviour_event(BehaviourEvent::Alert, Some(source));
        }
    }

    /// An adjacent living actor that `attacker` is willing to fight. The
    /// player is preferred, then monsters in compass order.
    pub fn adjacent_foe(&self, attacker: ActorRef) -> Option<ActorRef> {
        let att = self.actor(attacker)?;
        let pos = att.pos();

        if !attacker.is_player()
            && !self.options.arena
            && self.player.alive()
            && pos.is_adjacent(self.player.pos)
            && !mons_aligned(att, Actor::Player(&self.player))
        {
            return Some(ActorRef::Player);
        }

        pos.adjacent().find_map(|p| {
            let who = self.actor_at(p).filter(|who| !who.is_player())?;
            let other = self.actor(who)?;
            (!mons_aligned(att, other)).then_some(who)
        })
    }

    /// Handles of all living monsters, in spawn order
    pub fn living_monsters(&self) -> Vec<MonsterId> {
        self.monsters
            .iter()
            .filter(|m| m.alive)
            .map(|m| m.id)
            .collect()
    }

    /// Apply damage to an actor. Returns true if it died from this.
    pub fn hurt(&mut self, who: ActorRef, amount: i32) -> bool {
        let killed = match who {
            ActorRef::Player => self.player.hurt(amount),
            ActorRef::Monster(id) => self.monster_mut(id).is_some_and(|m| m.hurt(amount)),
        };
        trace!(?who, amount, killed, "damage applied");
        killed
    }

    /// Drop dead monsters from the level.
    pub fn remove_dead(&mut self) -> usize {
        let before = self.monsters.len();
        self.monsters.retain(|m| m.alive);
        before - self.monsters.len()
    }

    pub fn msg(&mut self, text: impl Into<String>) {
        self.messages.push(text);
    }
}
