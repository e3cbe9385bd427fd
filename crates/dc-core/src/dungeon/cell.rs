//! Terrain feature types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Terrain feature occupying a single grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellType {
    /// Undug rock
    #[default]
    Stone = 0,
    Wall = 1,
    Tree = 2,
    ClosedDoor = 3,
    OpenDoor = 4,
    /// Transparent but impassable
    Glass = 5,
    Floor = 6,
    ShallowWater = 7,
    DeepWater = 8,
    Lava = 9,
}

impl CellType {
    /// Solid cells block movement and melee reach (cell_is_solid)
    pub const fn is_solid(&self) -> bool {
        matches!(
            self,
            CellType::Stone | CellType::Wall | CellType::Tree | CellType::ClosedDoor | CellType::Glass
        )
    }

    pub const fn is_liquid(&self) -> bool {
        matches!(
            self,
            CellType::ShallowWater | CellType::DeepWater | CellType::Lava
        )
    }

    pub const fn blocks_sight(&self) -> bool {
        self.is_solid() && !matches!(self, CellType::Glass)
    }

    /// Parse a map glyph as used by arena scenarios.
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            ' ' => Some(CellType::Stone),
            '#' => Some(CellType::Wall),
            'T' => Some(CellType::Tree),
            '+' => Some(CellType::ClosedDoor),
            '\'' => Some(CellType::OpenDoor),
            '=' => Some(CellType::Glass),
            '.' => Some(CellType::Floor),
            '~' => Some(CellType::ShallowWater),
            'w' => Some(CellType::DeepWater),
            'l' => Some(CellType::Lava),
            _ => None,
        }
    }

    pub const fn symbol(&self) -> char {
        match self {
            CellType::Stone => ' ',
            CellType::Wall => '#',
            CellType::Tree => 'T',
            CellType::ClosedDoor => '+',
            CellType::OpenDoor => '\'',
            CellType::Glass => '=',
            CellType::Floor => '.',
            CellType::ShallowWater => '~',
            CellType::DeepWater => 'w',
            CellType::Lava => 'l',
        }
    }
}
