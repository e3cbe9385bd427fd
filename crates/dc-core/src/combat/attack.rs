//! The seam between the round driver and individual swings

use crate::actor::ActorRef;
use crate::world::World;

/// One swing to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRequest {
    pub attacker: ActorRef,
    pub defender: ActorRef,
    /// Index of this swing within the round
    pub attack_number: u32,
    /// Swings that actually happened so far this round
    pub effective_attack_number: i32,
    /// A secondary swing from a cleaving weapon
    pub cleaving: bool,
    /// Roll the attack but leave the world untouched
    pub simulated: bool,
}

impl AttackRequest {
    pub fn new(attacker: ActorRef, defender: ActorRef) -> Self {
        Self {
            attacker,
            defender,
            attack_number: 0,
            effective_attack_number: 0,
            cleaving: false,
            simulated: false,
        }
    }
}

/// What happened to one swing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackReport {
    /// The swing ran to completion, hit or miss
    pub resolved: bool,
    pub did_hit: bool,
    /// Called off before it happened (declined prompt, no attack defined)
    pub cancelled: bool,
    /// The effective attack count the swing ended on. When the swing did
    /// not resolve the driver adopts this value.
    pub effective_attack_number: i32,
}

impl AttackReport {
    pub fn hit(request: &AttackRequest) -> Self {
        Self {
            resolved: true,
            did_hit: true,
            cancelled: false,
            effective_attack_number: request.effective_attack_number,
        }
    }

    pub fn miss(request: &AttackRequest) -> Self {
        Self {
            resolved: true,
            did_hit: false,
            cancelled: false,
            effective_attack_number: request.effective_attack_number,
        }
    }

    /// A swing that never happened and must not count toward the round
    pub fn skipped(request: &AttackRequest) -> Self {
        Self {
            resolved: false,
            did_hit: false,
            cancelled: false,
            effective_attack_number: request.effective_attack_number - 1,
        }
    }

    pub fn cancelled(request: &AttackRequest) -> Self {
        Self {
            resolved: false,
            did_hit: false,
            cancelled: true,
            effective_attack_number: request.effective_attack_number,
        }
    }
}

/// Resolves single swings. The round driver calls this once per attack.
pub trait AttackResolver {
    fn resolve(&mut self, world: &mut World, request: AttackRequest) -> AttackReport;
}

impl<F> AttackResolver for F
where
    F: FnMut(&mut World, AttackRequest) -> AttackReport,
{
    fn resolve(&mut self, world: &mut World, request: AttackRequest) -> AttackReport {
        self(world, request)
    }
}
