//! Round loop for the headless arena

use tracing::{debug, info};

use dc_core::actor::ActorRef;
use dc_core::combat::{MeleeStats, StandardMelee, fight_melee};
use dc_core::world::World;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    /// A round passed with nobody adjacent to an enemy
    Stalemate,
    RoundLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rounds: u32,
    pub end: RunEnd,
    pub stats: MeleeStats,
}

pub struct Arena {
    pub world: World,
    melee: StandardMelee,
    round: u32,
}

impl Arena {
    pub fn new(world: World) -> Self {
        Self {
            world,
            melee: StandardMelee::new(),
            round: 0,
        }
    }

    pub fn stats(&self) -> MeleeStats {
        self.melee.stats
    }

    /// Every living monster, in spawn order, fights an adjacent enemy.
    /// Returns how many fights took place.
    pub fn play_round(&mut self) -> usize {
        self.round += 1;
        let mut fights = 0;

        for id in self.world.living_monsters() {
            let attacker = ActorRef::Monster(id);
            // may have died earlier this round
            if !self.world.monster(id).is_some_and(|m| m.alive) {
                continue;
            }
            let Some(target) = self.world.adjacent_foe(attacker) else {
                continue;
            };

            let outcome = fight_melee(&mut self.world, &mut self.melee, attacker, target, false);
            debug!(round = self.round, ?attacker, ?target, ?outcome, "fight");
            if outcome.resolved {
                fights += 1;
            }
        }

        let removed = self.world.remove_dead();
        if removed > 0 {
            info!(round = self.round, removed, "monsters died");
        }
        fights
    }

    /// Play rounds until nobody fights or `max_rounds` is reached, handing
    /// each round's messages to `on_round`.
    pub fn run<F>(&mut self, max_rounds: u32, mut on_round: F) -> RunSummary
    where
        F: FnMut(u32, Vec<String>),
    {
        let end = loop {
            if self.round >= max_rounds {
                break RunEnd::RoundLimit;
            }
            let fights = self.play_round();
            on_round(self.round, self.world.messages.flush());
            if fights == 0 {
                break RunEnd::Stalemate;
            }
        };

        RunSummary {
            rounds: self.round,
            end,
            stats: self.melee.stats,
        }
    }
}
