//! Per-actor resistance levels

use serde::{Deserialize, Serialize};

use crate::combat::{DamageFlavour, ResistKind};

/// Signed resistance levels; negative means vulnerable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResistanceSet {
    pub fire: i8,
    pub cold: i8,
    pub elec: i8,
    pub poison: i8,
    pub acid: i8,
    pub holy: i8,
    pub miasma: i8,
    pub negative: i8,
    pub steam: i8,
    pub asphyx: i8,
}

impl ResistanceSet {
    pub fn level(&self, kind: ResistKind) -> i32 {
        let level = match kind {
            ResistKind::Fire => self.fire,
            ResistKind::Cold => self.cold,
            ResistKind::Electricity => self.elec,
            ResistKind::Poison => self.poison,
            ResistKind::Acid => self.acid,
            ResistKind::Holy => self.holy,
            ResistKind::Miasma => self.miasma,
            ResistKind::NegativeEnergy => self.negative,
            ResistKind::Steam => self.steam,
            ResistKind::Asphyxiation => self.asphyx,
        };
        level as i32
    }

    pub fn set(&mut self, kind: ResistKind, level: i8) {
        let slot = match kind {
            ResistKind::Fire => &mut self.fire,
            ResistKind::Cold => &mut self.cold,
            ResistKind::Electricity => &mut self.elec,
            ResistKind::Poison => &mut self.poison,
            ResistKind::Acid => &mut self.acid,
            ResistKind::Holy => &mut self.holy,
            ResistKind::Miasma => &mut self.miasma,
            ResistKind::NegativeEnergy => &mut self.negative,
            ResistKind::Steam => &mut self.steam,
            ResistKind::Asphyxiation => &mut self.asphyx,
        };
        *slot = level;
    }

    pub fn with(mut self, kind: ResistKind, level: i8) -> Self {
        self.set(kind, level);
        self
    }

    /// Resistance against a flavour; unresistable flavours read as 0.
    pub fn against(&self, flavour: DamageFlavour) -> i32 {
        flavour.resist_kind().map_or(0, |k| self.level(k))
    }
}
