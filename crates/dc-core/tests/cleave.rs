//! Cleave target selection: geometry and invariants

use dc_core::GameRng;
use dc_core::actor::{ActorRef, Attitude, Monster, MonsterId, harmless_to_hit};
use dc_core::combat::{cleave_targets, cleave_targets_with_direction};
use dc_core::dungeon::{COMPASS, CellType, Coord, LevelMap, rotate_adjacent};
use dc_core::world::World;
use proptest::prelude::*;

const CENTRE: Coord = Coord::new(3, 3);

/// 7x7 room, player in the middle. Each cell code: 0 floor, 1 wall,
/// 2.. a monster with the matching attitude.
fn build_world(cells: &[u8]) -> World {
    let mut world = World::new(LevelMap::new(7, 7, CellType::Floor), GameRng::new(99));
    world.place_player(CENTRE).expect("floor");

    for (i, code) in cells.iter().enumerate() {
        let pos = Coord::new(i as i32 % 7, i as i32 / 7);
        if pos == CENTRE {
            continue;
        }
        let attitude = match code {
            0 => continue,
            1 => {
                world.map.set(pos, CellType::Wall);
                continue;
            }
            2 => Attitude::Hostile,
            3 => Attitude::Friendly,
            4 => Attitude::Neutral,
            _ => Attitude::GoodNeutral,
        };
        let mut m = Monster::new(MonsterId::NONE, "orc", pos);
        m.attitude = attitude;
        world.spawn_monster(m).expect("spawn");
    }
    world
}

/// Whether `target` is reachable sweeping from `def_pos` without crossing
/// solid terrain.
fn reachable_by_sweep(world: &World, def_pos: Coord, target: Coord) -> bool {
    if target == def_pos {
        return true;
    }
    for dir in [1, -1] {
        let mut delta = def_pos - CENTRE;
        for _ in 0..world.options.cleave_arc {
            delta = rotate_adjacent(delta, dir);
            let pos = CENTRE + delta;
            if world.is_solid(pos) {
                break;
            }
            if pos == target {
                return true;
            }
        }
    }
    false
}

#[test]
fn test_surrounded_player_hits_all_but_the_back() {
    let mut cells = vec![0u8; 49];
    for d in COMPASS {
        let p = CENTRE + d;
        cells[(p.y * 7 + p.x) as usize] = 2;
    }
    let world = build_world(&cells);

    let targets = cleave_targets_with_direction(&world, ActorRef::Player, CENTRE + COMPASS[0], 1);
    assert_eq!(targets.len(), 7, "three each side plus the primary");

    let south = world.actor_at(CENTRE + COMPASS[4]);
    assert!(!targets.iter().any(|t| Some(*t) == south), "the cell behind is never swept");
}

#[test]
fn test_primary_sits_between_the_arcs() {
    let mut cells = vec![0u8; 49];
    // north-west, north, north-east
    cells[2 * 7 + 2] = 2;
    cells[2 * 7 + 3] = 2;
    cells[2 * 7 + 4] = 2;
    let world = build_world(&cells);
    let primary = world.actor_at(Coord::new(3, 2)).expect("primary");

    for dir in [1, -1] {
        let targets = cleave_targets_with_direction(&world, ActorRef::Player, Coord::new(3, 2), dir);
        assert_eq!(targets.len(), 3);
        assert_eq!(targets[1], primary);
    }
}

#[test]
fn test_empty_origin_still_sweeps() {
    let mut cells = vec![0u8; 49];
    cells[2 * 7 + 4] = 2;
    let world = build_world(&cells);

    let targets = cleave_targets_with_direction(&world, ActorRef::Player, Coord::new(3, 2), 1);
    assert_eq!(targets.len(), 1);
}

#[test]
fn test_shorter_arc_option() {
    let mut cells = vec![0u8; 49];
    for d in COMPASS {
        let p = CENTRE + d;
        cells[(p.y * 7 + p.x) as usize] = 2;
    }
    let mut world = build_world(&cells);
    world.options.cleave_arc = 1;

    let targets = cleave_targets_with_direction(&world, ActorRef::Player, CENTRE + COMPASS[0], 1);
    assert_eq!(targets.len(), 3);
}

#[test]
fn test_random_direction_is_seeded() {
    let mut cells = vec![0u8; 49];
    cells[2 * 7 + 2] = 2;
    cells[2 * 7 + 3] = 2;
    cells[2 * 7 + 4] = 2;

    let mut a = build_world(&cells);
    let mut b = build_world(&cells);
    for _ in 0..10 {
        let ta = cleave_targets(&mut a, ActorRef::Player, Coord::new(3, 2));
        let tb = cleave_targets(&mut b, ActorRef::Player, Coord::new(3, 2));
        assert_eq!(ta, tb);
    }
}

proptest! {
    #[test]
    fn prop_cleave_invariants(
        cells in prop::collection::vec(0u8..6, 49),
        dir_index in 0usize..8,
        first_clockwise in any::<bool>(),
    ) {
        let world = build_world(&cells);
        let def_pos = CENTRE + COMPASS[dir_index];
        let first_direction = if first_clockwise { 1 } else { -1 };

        let targets =
            cleave_targets_with_direction(&world, ActorRef::Player, def_pos, first_direction);

        prop_assert!(targets.len() <= 7);
        prop_assert!(!targets.contains(&ActorRef::Player));

        if world.is_solid(def_pos) {
            prop_assert!(targets.is_empty());
            return Ok(());
        }

        let primary = world.actor_at(def_pos);
        match primary {
            Some(p) => prop_assert!(targets.contains(&p)),
            None => prop_assert!(targets
                .iter()
                .all(|t| world.actor(*t).map(|a| a.pos()) != Some(def_pos))),
        }

        let player = world.actor(ActorRef::Player).expect("player");
        for t in &targets {
            let actor = world.actor(*t).expect("target exists");
            prop_assert!(reachable_by_sweep(&world, def_pos, actor.pos()));
            if Some(*t) != primary {
                prop_assert!(!harmless_to_hit(player, actor));
            }
        }
    }
}
