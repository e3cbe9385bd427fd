//! Clouds hanging over grid cells

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum CloudKind {
    Fog,
    BlackSmoke,
    Steam,
    Miasma,
    Flame,
    PoisonGas,
}

impl CloudKind {
    /// Opaque clouds block line of sight through their cell.
    pub const fn is_opaque(&self) -> bool {
        matches!(self, CloudKind::Fog | CloudKind::BlackSmoke | CloudKind::Steam)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cloud {
    pub kind: CloudKind,
    /// Turns left before dissipating
    pub decay: u16,
}

impl Cloud {
    pub const fn new(kind: CloudKind, decay: u16) -> Self {
        Self { kind, decay }
    }
}
