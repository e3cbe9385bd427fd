//! The melee round driver
//!
//! [`fight_melee`] runs one round of melee between two actors. The player
//! swings once; monsters swing once per attack slot (or once per head),
//! picking a new adjacent target mid-round if they can. Every swing goes
//! through an [`AttackResolver`].

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use super::{AttackRequest, AttackResolver};
use crate::actor::{Actor, ActivityInterrupt, ActorRef, harmless_to_hit};
use crate::world::World;

/// What a call to [`fight_melee`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeleeOutcome {
    /// The round went ahead. False only when a guard refused it.
    pub resolved: bool,
    /// At least one swing connected
    pub did_hit: bool,
    /// The attacker's time was spent
    pub turn_consumed: bool,
}

impl MeleeOutcome {
    fn refused() -> Self {
        Self::default()
    }
}

/// Run one melee round of `attacker` against `defender`.
///
/// With `simulate` set the swings are still resolved (with the request's
/// `simulated` flag on) but the driver itself changes nothing.
///
/// A monster attacking the player in arena mode is a caller bug and
/// panics in debug builds.
pub fn fight_melee<R>(
    world: &mut World,
    resolver: &mut R,
    attacker: ActorRef,
    defender: ActorRef,
    simulate: bool,
) -> MeleeOutcome
where
    R: AttackResolver + ?Sized,
{
    let (Some(att), Some(def)) = (world.actor(attacker), world.actor(defender)) else {
        warn!(?attacker, ?defender, "melee between unknown actors");
        return MeleeOutcome::refused();
    };

    if let Actor::Monster(mon) = att {
        if defender.is_player() && world.options.arena {
            debug_assert!(false, "{} attacking the player in arena mode", mon.name);
            warn!(monster = %mon.name, "monster attacking the player in arena mode");
            return MeleeOutcome::refused();
        }

        if defender.is_player() && mon.wont_attack() && !mon.is_confused(false) {
            debug!(monster = %mon.name, "refusing to attack the player");
            return MeleeOutcome::refused();
        }

        if mon.withdrawn() {
            debug!(monster = %mon.name, "cannot attack while withdrawn");
            return MeleeOutcome::refused();
        }

        if mon.rolling() {
            debug!(monster = %mon.name, "cannot attack while rolling");
            return MeleeOutcome::refused();
        }

        let id = mon.id;
        if defender.is_player() && !simulate {
            world.alert_monster(id, defender);
        }
        return monster_melee(world, resolver, attacker, defender, simulate);
    }

    if def.as_monster().is_some_and(|m| m.is_projectile()) && !world.player.confused() {
        debug!("refusing to attack a projectile");
        return MeleeOutcome::refused();
    }
    player_melee(world, resolver, defender, simulate)
}

fn player_melee<R>(
    world: &mut World,
    resolver: &mut R,
    defender: ActorRef,
    simulate: bool,
) -> MeleeOutcome
where
    R: AttackResolver + ?Sized,
{
    if !simulate {
        world.player.interrupt_activity(ActivityInterrupt::HitMonster);
    }

    let unsuitable = world
        .player
        .weapon
        .as_ref()
        .filter(|w| !w.is_melee())
        .map(|w| w.name.clone());
    if let Some(name) = unsuitable {
        if !simulate
            && world.options.confirm_unsuitable_weapon
            && world.can_see(ActorRef::Player, defender)
        {
            let question = format!("Really attack while wielding your {name}?");
            if !world.prompter.yes_no(&question) {
                debug!(weapon = %name, "attack with unsuitable weapon declined");
                world.player.turn_is_over = false;
                return MeleeOutcome::refused();
            }
        }
    }

    let request = AttackRequest {
        attacker: ActorRef::Player,
        defender,
        attack_number: 0,
        effective_attack_number: 0,
        cleaving: false,
        simulated: simulate,
    };
    let report = resolver.resolve(world, request);
    trace!(?defender, ?report, "player swing resolved");

    if !report.resolved && report.cancelled {
        world.player.turn_is_over = false;
        return MeleeOutcome::refused();
    }

    if !simulate {
        world.player.turn_is_over = true;
    }
    MeleeOutcome {
        resolved: true,
        did_hit: report.did_hit,
        turn_consumed: !simulate,
    }
}

fn monster_melee<R>(
    world: &mut World,
    resolver: &mut R,
    attacker: ActorRef,
    mut defender: ActorRef,
    simulate: bool,
) -> MeleeOutcome
where
    R: AttackResolver + ?Sized,
{
    let Some(mid) = attacker.monster_id() else {
        return MeleeOutcome::refused();
    };
    let Some(mon) = world.monster(mid) else {
        return MeleeOutcome::refused();
    };

    let nrounds = if mon.has_hydra_multi_attack() {
        u32::from(mon.heads)
    } else {
        world.options.max_monster_attacks
    };
    let multitargeting = mon.has_multitargeting();

    if !simulate {
        if let Some(mon) = world.monster_mut(mid) {
            mon.wield_melee_weapon();
        }
    }

    let Some(mut def_pos) = world.actor(defender).map(|d| d.pos()) else {
        return MeleeOutcome::refused();
    };

    let mut outcome = MeleeOutcome {
        resolved: true,
        did_hit: false,
        turn_consumed: !simulate,
    };
    let mut effective_attack_number = 0;

    for attack_number in 0..nrounds {
        if !world.actor(attacker).is_some_and(|a| a.alive()) {
            break;
        }

        let defender_here = world
            .actor(defender)
            .is_some_and(|d| d.alive() && d.pos() == def_pos);
        if !defender_here {
            if attacker == defender || !multitargeting {
                break;
            }
            let Some(target) = world.adjacent_foe(attacker) else {
                break;
            };
            let Some(pos) = world.actor(target).map(|t| t.pos()) else {
                break;
            };
            debug!(?attacker, old = ?defender, new = ?target, "retargeting");
            defender = target;
            def_pos = pos;
        }

        let request = AttackRequest {
            attacker,
            defender,
            attack_number,
            effective_attack_number,
            cleaving: false,
            simulated: simulate,
        };
        let report = resolver.resolve(world, request);
        trace!(?attacker, ?defender, attack_number, ?report, "monster swing resolved");

        if !report.resolved {
            effective_attack_number = report.effective_attack_number;
        } else if report.did_hit {
            outcome.did_hit = true;
        }
        effective_attack_number += 1;
    }

    outcome
}

/// Swing at each cleave target in turn, consuming the list. Targets that
/// died, moved out of reach or became harmless since the list was built
/// are skipped. Returns the number of swings made.
pub fn attack_cleave_targets<R>(
    world: &mut World,
    resolver: &mut R,
    attacker: ActorRef,
    targets: &mut VecDeque<ActorRef>,
    attack_number: u32,
    effective_attack_number: &mut i32,
    simulate: bool,
) -> usize
where
    R: AttackResolver + ?Sized,
{
    let mut swings = 0;

    while let Some(target) = targets.pop_front() {
        let Some(att) = world.actor(attacker).filter(|a| a.alive()) else {
            targets.clear();
            break;
        };
        let valid = world.actor(target).is_some_and(|def| {
            def.alive() && !harmless_to_hit(att, def) && att.pos().is_adjacent(def.pos())
        });
        if !valid {
            trace!(?target, "cleave target no longer valid");
            continue;
        }

        *effective_attack_number += 1;
        let request = AttackRequest {
            attacker,
            defender: target,
            attack_number,
            effective_attack_number: *effective_attack_number,
            cleaving: true,
            simulated: simulate,
        };
        let report = resolver.resolve(world, request);
        trace!(?target, ?report, "cleave swing resolved");
        swings += 1;
    }

    swings
}
