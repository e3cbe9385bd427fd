//! Cleave target selection
//!
//! A cleaving swing sweeps an arc around the attacker, starting at the
//! primary target and rotating one compass step at a time in both
//! directions. Solid terrain stops the sweep on that side.

use std::collections::VecDeque;

use tracing::trace;

use crate::actor::{ActorRef, harmless_to_hit};
use crate::dungeon::{Coord, rotate_adjacent};
use crate::world::World;

/// Append the targets found sweeping from `def_pos` in `direction` (+1 or
/// -1), nearest first.
pub fn cleave_targets_in_direction(
    world: &World,
    attacker: ActorRef,
    def_pos: Coord,
    direction: i32,
    targets: &mut VecDeque<ActorRef>,
) {
    let Some(att) = world.actor(attacker) else {
        return;
    };
    let atk_pos = att.pos();
    let mut delta = def_pos - atk_pos;
    if delta == Coord::origin() {
        return;
    }

    for _ in 0..world.options.cleave_arc {
        delta = rotate_adjacent(delta, direction);
        let pos = atk_pos + delta;
        if world.is_solid(pos) {
            break;
        }

        let Some(who) = world.actor_at(pos).filter(|who| *who != attacker) else {
            continue;
        };
        let Some(target) = world.actor(who) else {
            continue;
        };
        if !harmless_to_hit(att, target) {
            targets.push_back(who);
        }
    }
}

/// Every cleave target around `def_pos`, in spatial order across the arc.
/// The sweep in `first_direction` is reversed so it leads into whatever
/// stands at `def_pos`, which is followed by the sweep the other way.
pub fn cleave_targets_with_direction(
    world: &World,
    attacker: ActorRef,
    def_pos: Coord,
    first_direction: i32,
) -> VecDeque<ActorRef> {
    let mut targets = VecDeque::new();
    let Some(att) = world.actor(attacker) else {
        return targets;
    };
    if world.is_solid(def_pos) || att.pos() == def_pos {
        return targets;
    }

    let mut near_side = VecDeque::new();
    cleave_targets_in_direction(world, attacker, def_pos, first_direction, &mut near_side);
    targets.extend(near_side.into_iter().rev());

    if let Some(primary) = world.actor_at(def_pos) {
        targets.push_back(primary);
    }

    cleave_targets_in_direction(world, attacker, def_pos, -first_direction, &mut targets);

    trace!(?attacker, %def_pos, first_direction, ?targets, "cleave targets");
    targets
}

/// [`cleave_targets_with_direction`] with the sweep direction picked at
/// random.
pub fn cleave_targets(world: &mut World, attacker: ActorRef, def_pos: Coord) -> VecDeque<ActorRef> {
    let direction = if world.rng.coinflip() { 1 } else { -1 };
    cleave_targets_with_direction(world, attacker, def_pos, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{Attitude, Monster, MonsterId};
    use crate::dungeon::{CellType, LevelMap};
    use crate::rng::GameRng;

    // Player at the centre of a 3x3 room inside walls.
    fn ring_world() -> World {
        let map = LevelMap::from_rows(&["#####", "#...#", "#...#", "#...#", "#####"]).unwrap();
        let mut world = World::new(map, GameRng::new(1));
        world.place_player(Coord::new(2, 2)).unwrap();
        world
    }

    fn spawn(world: &mut World, x: i32, y: i32) -> ActorRef {
        let m = Monster::new(MonsterId::NONE, "orc", Coord::new(x, y));
        ActorRef::Monster(world.spawn_monster(m).unwrap())
    }

    #[test]
    fn test_sweep_one_direction() {
        let mut world = ring_world();
        let ne = spawn(&mut world, 3, 1);
        let e = spawn(&mut world, 3, 2);

        let mut out = VecDeque::new();
        cleave_targets_in_direction(&world, ActorRef::Player, Coord::new(2, 1), 1, &mut out);
        assert_eq!(out, VecDeque::from([ne, e]));
    }

    #[test]
    fn test_full_arc_order() {
        let mut world = ring_world();
        let nw = spawn(&mut world, 1, 1);
        let n = spawn(&mut world, 2, 1);
        let ne = spawn(&mut world, 3, 1);
        let w = spawn(&mut world, 1, 2);

        let targets = cleave_targets_with_direction(&world, ActorRef::Player, Coord::new(2, 1), 1);
        assert_eq!(targets, VecDeque::from([ne, n, nw, w]));

        let targets = cleave_targets_with_direction(&world, ActorRef::Player, Coord::new(2, 1), -1);
        assert_eq!(targets, VecDeque::from([w, nw, n, ne]));
    }

    #[test]
    fn test_wall_stops_sweep() {
        let mut world = ring_world();
        world.map.set(Coord::new(3, 1), CellType::Wall);
        spawn(&mut world, 3, 2);

        let mut out = VecDeque::new();
        cleave_targets_in_direction(&world, ActorRef::Player, Coord::new(2, 1), 1, &mut out);
        assert!(out.is_empty(), "the wall hides the east side");
    }

    #[test]
    fn test_skips_allies() {
        let mut world = ring_world();
        let ally = spawn(&mut world, 3, 1);
        if let ActorRef::Monster(id) = ally {
            world.monster_mut(id).unwrap().attitude = Attitude::Friendly;
        }

        let mut out = VecDeque::new();
        cleave_targets_in_direction(&world, ActorRef::Player, Coord::new(2, 1), 1, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_solid_origin_is_empty() {
        let mut world = ring_world();
        spawn(&mut world, 1, 1);
        let targets = cleave_targets_with_direction(&world, ActorRef::Player, Coord::new(2, 0), 1);
        assert!(targets.is_empty());
    }
}
