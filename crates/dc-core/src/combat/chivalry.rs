//! Unchivalric attack classification
//!
//! An attack is unchivalric when the defender is in no state to defend
//! itself. Several states can apply at once; the checks run in a fixed
//! order and the last one that matches is reported.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::actor::{Actor, ActorRef};
use crate::world::World;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum UnchivalricAttack {
    #[default]
    None,
    Distracted,
    Confused,
    Ally,
    Fleeing,
    Invisible,
    HeldInNet,
    Petrifying,
    Petrified,
    Paralysed,
    Sleeping,
}

impl UnchivalricAttack {
    /// States in which the defender cannot react to the blow at all
    pub const fn is_helpless(&self) -> bool {
        matches!(
            self,
            UnchivalricAttack::Petrifying
                | UnchivalricAttack::Petrified
                | UnchivalricAttack::Paralysed
                | UnchivalricAttack::Sleeping
        )
    }
}

/// Classify an attack by the defender's state.
///
/// Defenders that cannot fight, and defenders the attacker cannot see, are
/// never classified.
pub fn is_unchivalric_attack(
    world: &World,
    attacker: ActorRef,
    defender: ActorRef,
) -> UnchivalricAttack {
    let (Some(att), Some(def)) = (world.actor(attacker), world.actor(defender)) else {
        return UnchivalricAttack::None;
    };

    if def.cannot_fight() || !world.can_see(attacker, defender) {
        return UnchivalricAttack::None;
    }

    let mon = def.as_monster();
    let mut unchivalric = UnchivalricAttack::None;

    if att.is_player()
        && mon.is_some_and(|m| m.foe != Some(ActorRef::Player) && !m.is_batty())
    {
        unchivalric = UnchivalricAttack::Distracted;
    }

    let confused = match def {
        Actor::Player(p) => p.confused(),
        Actor::Monster(m) => m.is_confused(false),
    };
    if confused {
        unchivalric = UnchivalricAttack::Confused;
    }

    if mon.is_some_and(|m| m.friendly()) {
        unchivalric = UnchivalricAttack::Ally;
    }

    if mon.is_some_and(|m| m.fleeing()) {
        unchivalric = UnchivalricAttack::Fleeing;
    }

    if !world.can_see(defender, attacker) {
        unchivalric = UnchivalricAttack::Invisible;
    }

    if def.caught() {
        unchivalric = UnchivalricAttack::HeldInNet;
    }

    if def.petrifying() {
        unchivalric = UnchivalricAttack::Petrifying;
    }

    if def.petrified() {
        unchivalric = UnchivalricAttack::Petrified;
    }

    if def.paralysed() {
        unchivalric = UnchivalricAttack::Paralysed;
    }

    if def.asleep() {
        unchivalric = UnchivalricAttack::Sleeping;
    }

    unchivalric
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{Monster, MonsterId, MonsterStatus, MonsterTraits};
    use crate::dungeon::{CellType, Coord, LevelMap};
    use crate::rng::GameRng;

    fn setup() -> (World, ActorRef) {
        let mut world = World::new(LevelMap::new(5, 5, CellType::Floor), GameRng::new(3));
        let mut m = Monster::new(MonsterId::NONE, "kobold", Coord::new(1, 0));
        m.foe = Some(ActorRef::Player);
        let id = world.spawn_monster(m).unwrap();
        (world, ActorRef::Monster(id))
    }

    fn set_status(world: &mut World, who: ActorRef, status: MonsterStatus) {
        if let Some(id) = who.monster_id() {
            world.monster_mut(id).unwrap().status |= status;
        }
    }

    #[test]
    fn test_alert_foe_is_fair_game() {
        let (world, kobold) = setup();
        assert_eq!(
            is_unchivalric_attack(&world, ActorRef::Player, kobold),
            UnchivalricAttack::None
        );
    }

    #[test]
    fn test_distracted() {
        let (mut world, kobold) = setup();
        world.monster_mut(kobold.monster_id().unwrap()).unwrap().foe = None;
        assert_eq!(
            is_unchivalric_attack(&world, ActorRef::Player, kobold),
            UnchivalricAttack::Distracted
        );

        world.monster_mut(kobold.monster_id().unwrap()).unwrap().traits |= MonsterTraits::BATTY;
        assert_eq!(
            is_unchivalric_attack(&world, ActorRef::Player, kobold),
            UnchivalricAttack::None
        );
    }

    #[test]
    fn test_innate_confusion_does_not_count() {
        let (mut world, kobold) = setup();
        set_status(&mut world, kobold, MonsterStatus::CONFUSED);
        assert_eq!(
            is_unchivalric_attack(&world, ActorRef::Player, kobold),
            UnchivalricAttack::Confused
        );

        world.monster_mut(kobold.monster_id().unwrap()).unwrap().traits |= MonsterTraits::BATTY;
        assert_eq!(
            is_unchivalric_attack(&world, ActorRef::Player, kobold),
            UnchivalricAttack::None
        );
    }

    #[test]
    fn test_later_checks_win() {
        let (mut world, kobold) = setup();
        set_status(&mut world, kobold, MonsterStatus::FLEEING);
        assert_eq!(
            is_unchivalric_attack(&world, ActorRef::Player, kobold),
            UnchivalricAttack::Fleeing
        );

        set_status(&mut world, kobold, MonsterStatus::CAUGHT);
        assert_eq!(
            is_unchivalric_attack(&world, ActorRef::Player, kobold),
            UnchivalricAttack::HeldInNet
        );

        set_status(&mut world, kobold, MonsterStatus::ASLEEP);
        let result = is_unchivalric_attack(&world, ActorRef::Player, kobold);
        assert_eq!(result, UnchivalricAttack::Sleeping);
        assert!(result.is_helpless());
    }

    #[test]
    fn test_unseen_defender_is_none() {
        let (mut world, kobold) = setup();
        set_status(&mut world, kobold, MonsterStatus::ASLEEP | MonsterStatus::INVISIBLE);
        assert_eq!(
            is_unchivalric_attack(&world, ActorRef::Player, kobold),
            UnchivalricAttack::None
        );
    }

    #[test]
    fn test_cannot_fight_is_none() {
        let (mut world, kobold) = setup();
        let m = world.monster_mut(kobold.monster_id().unwrap()).unwrap();
        m.traits |= MonsterTraits::NO_FIGHT;
        m.status |= MonsterStatus::PARALYSED;
        assert_eq!(
            is_unchivalric_attack(&world, ActorRef::Player, kobold),
            UnchivalricAttack::None
        );
    }

    #[test]
    fn test_invisible_attacker() {
        let (mut world, kobold) = setup();
        world.player.status |= crate::actor::PlayerStatus::INVISIBLE;
        assert_eq!(
            is_unchivalric_attack(&world, ActorRef::Player, kobold),
            UnchivalricAttack::Invisible
        );
    }
}
