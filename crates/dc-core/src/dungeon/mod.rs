//! Dungeon terrain
//!
//! Contains the level grid, terrain features, clouds and coordinates.

mod cell;
mod cloud;
mod coord;
mod map;

pub use cell::CellType;
pub use cloud::{Cloud, CloudKind};
pub use coord::{COMPASS, Coord, rotate_adjacent};
pub use map::{LevelMap, line_between};
