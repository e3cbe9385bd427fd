//! The standard melee attack
//!
//! Resolves a single swing: energy, to-hit, damage, elemental brands,
//! messages and death. Swings from a cleaving weapon gather the extra
//! targets around the defender and strike them after the primary blow.

use tracing::{debug, trace};

use super::{
    AttackReport, AttackRequest, AttackResolver, DamageFlavour, DefenderKind,
    ResistOutcome, attack_cleave_targets, cleave_targets, is_unchivalric_attack,
    resist_adjust_damage, resist_message,
};
use crate::actor::{Actor, ActorRef, BehaviourEvent};
use crate::consts::{BASE_ACTION_ENERGY, UNARMED_DAMAGE};
use crate::world::World;

/// Running totals kept by [`StandardMelee`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeleeStats {
    pub swings: u32,
    pub hits: u32,
    pub kills: u32,
    pub damage: i64,
}

#[derive(Debug, Clone, Default)]
pub struct StandardMelee {
    pub stats: MeleeStats,
}

/// Everything about a swing that has to be read before the world is
/// mutated
struct SwingPlan {
    verb: &'static str,
    damage: i32,
    plus: i32,
    flavour: DamageFlavour,
    accuracy: i32,
    uses_weapon: bool,
    weapon_delay: Option<i32>,
    cleaves: bool,
}

impl StandardMelee {
    pub fn new() -> Self {
        Self::default()
    }

    fn plan(att: Actor<'_>, attack_number: u32) -> Option<SwingPlan> {
        match att {
            Actor::Player(p) => {
                let weapon = p.weapon.as_ref().filter(|w| w.is_melee());
                Some(SwingPlan {
                    verb: "hit",
                    damage: weapon.map_or(i32::from(UNARMED_DAMAGE), |w| i32::from(w.damage)),
                    plus: weapon.map_or(0, |w| i32::from(w.plus)),
                    flavour: weapon.and_then(|w| w.brand).unwrap_or_default(),
                    accuracy: i32::from(p.xl) + weapon.map_or(0, |w| i32::from(w.plus)),
                    uses_weapon: weapon.is_some(),
                    weapon_delay: weapon.map(|w| w.delay),
                    cleaves: weapon.is_some_and(|w| w.cleaves()),
                })
            }
            Actor::Monster(m) => {
                let def = m.attack_def(attack_number)?;
                let weapon = def
                    .kind
                    .uses_weapon()
                    .then(|| m.weapon())
                    .flatten()
                    .filter(|w| w.is_melee());
                let flavour = match weapon.and_then(|w| w.brand) {
                    Some(brand) => brand,
                    None => def.flavour,
                };
                Some(SwingPlan {
                    verb: def.kind.verb(),
                    damage: weapon.map_or(i32::from(def.damage), |w| {
                        i32::from(def.damage).max(i32::from(w.damage))
                    }),
                    plus: weapon.map_or(0, |w| i32::from(w.plus)),
                    flavour,
                    accuracy: i32::from(m.hd) + weapon.map_or(0, |w| i32::from(w.plus)),
                    uses_weapon: weapon.is_some(),
                    weapon_delay: weapon.map(|w| w.delay),
                    cleaves: weapon.is_some_and(|w| w.cleaves()),
                })
            }
        }
    }

    fn spend_energy(world: &mut World, request: &AttackRequest, plan: &SwingPlan) {
        let Some(id) = request.attacker.monster_id() else {
            return;
        };
        if request.cleaving {
            return;
        }

        let cost = if request.effective_attack_number == 0 {
            BASE_ACTION_ENERGY
        } else if plan.uses_weapon {
            let extra = plan.weapon_delay.unwrap_or(BASE_ACTION_ENERGY) - BASE_ACTION_ENERGY;
            world.rng.div_rand_round(extra.max(0), 2)
        } else {
            0
        };

        if let Some(mon) = world.monster_mut(id) {
            mon.lose_energy(cost);
            trace!(monster = %mon.name, cost, energy = mon.speed_increment, "attack energy");
        }
    }
}

/// Conjugate a verb for the attacker: "you hit", "the orc hits".
fn conjugate(verb: &str, player: bool) -> String {
    if player {
        verb.to_string()
    } else if verb.ends_with('s') || verb.ends_with("sh") || verb.ends_with("ch") {
        format!("{verb}es")
    } else {
        format!("{verb}s")
    }
}

fn defender_kind(who: ActorRef) -> DefenderKind {
    if who.is_player() {
        DefenderKind::Player
    } else {
        DefenderKind::Monster
    }
}

impl AttackResolver for StandardMelee {
    fn resolve(&mut self, world: &mut World, request: AttackRequest) -> AttackReport {
        let (Some(att), Some(def)) = (world.actor(request.attacker), world.actor(request.defender))
        else {
            return AttackReport::skipped(&request);
        };
        if !att.alive() || !def.alive() {
            return AttackReport::skipped(&request);
        }

        let Some(plan) = Self::plan(att, request.attack_number) else {
            trace!(
                attacker = ?request.attacker,
                attack_number = request.attack_number,
                "no attack in slot"
            );
            return AttackReport::skipped(&request);
        };

        let att_pos = att.pos();
        let def_pos = def.pos();
        if !att_pos.is_adjacent(def_pos) && request.attacker != request.defender {
            return AttackReport::skipped(&request);
        }

        let att_is_player = att.is_player();
        let att_name = att.cap_name();
        let def_name = def.name();
        let def_cap_name = def.cap_name();
        let def_ev = def.ev();
        let def_ac = def.ac();
        let def_res = def.res(plan.flavour);

        if !request.simulated {
            Self::spend_energy(world, &request, &plan);
        }

        let mut cleave_list = if !request.cleaving
            && !request.simulated
            && plan.cleaves
            && att_pos != def_pos
        {
            let mut targets = cleave_targets(world, request.attacker, def_pos);
            targets.retain(|t| *t != request.defender);
            targets
        } else {
            Default::default()
        };

        let chivalry = is_unchivalric_attack(world, request.attacker, request.defender);
        let helpless = chivalry.is_helpless();
        let auto_hit = helpless && att_is_player;
        let roll = world.rng.rnd(20) as i32 + plan.accuracy;
        let did_hit = auto_hit || roll > def_ev;

        if request.simulated {
            return if did_hit {
                AttackReport::hit(&request)
            } else {
                AttackReport::miss(&request)
            };
        }

        self.stats.swings += 1;
        if let Some(id) = request.defender.monster_id() {
            if request.attacker != request.defender {
                if let Some(mon) = world.monster_mut(id) {
                    mon.behaviour_event(BehaviourEvent::Whack, Some(request.attacker));
                }
            }
        }

        if !did_hit {
            world.msg(format!(
                "{att_name} {} {def_name}.",
                conjugate("miss", att_is_player)
            ));
        } else {
            self.stats.hits += 1;

            let mut dmg = world.rng.rnd(plan.damage.max(1) as u32) as i32 + plan.plus;
            dmg -= world.rng.rn2(def_ac.max(0).saturating_add(1) as u32) as i32;
            dmg = dmg.max(0);
            if auto_hit {
                dmg = dmg * 3 / 2;
            }
            if request.cleaving {
                dmg = world
                    .rng
                    .div_rand_round(dmg * world.options.cleave_damage_percent, 100);
            }

            let verb = conjugate(plan.verb, att_is_player);
            if dmg > 0 {
                world.msg(format!("{att_name} {verb} {def_name}."));
            } else {
                let does = if att_is_player { "do" } else { "does" };
                world.msg(format!("{att_name} {verb} {def_name} but {does} no damage."));
            }

            let mut total = dmg;
            if plan.flavour != DamageFlavour::Physical && dmg > 0 {
                let raw = world.rng.rn2(dmg as u32) as i32 / 2 + 1;
                let kind = defender_kind(request.defender);
                let brand = resist_adjust_damage(kind, plan.flavour, def_res, raw, false);
                let outcome = ResistOutcome::classify(raw, brand);
                if let Some(msg) = resist_message(kind, &def_cap_name, plan.flavour, outcome) {
                    world.msg(msg);
                }
                trace!(flavour = %plan.flavour, raw, brand, %outcome, "brand damage");
                total += brand;
            }

            self.stats.damage += i64::from(total);
            if world.hurt(request.defender, total) {
                self.stats.kills += 1;
                let msg = match (att_is_player, request.defender.is_player()) {
                    (_, true) => "You die...".to_string(),
                    (true, false) => format!("You kill {def_name}!"),
                    (false, false) => format!("{att_name} kills {def_name}!"),
                };
                debug!(attacker = ?request.attacker, defender = ?request.defender, "killed");
                world.msg(msg);
            }
        }

        if !cleave_list.is_empty() {
            let mut effective = request.effective_attack_number;
            attack_cleave_targets(
                world,
                self,
                request.attacker,
                &mut cleave_list,
                request.attack_number,
                &mut effective,
                false,
            );
        }

        if did_hit {
            AttackReport::hit(&request)
        } else {
            AttackReport::miss(&request)
        }
    }
}
