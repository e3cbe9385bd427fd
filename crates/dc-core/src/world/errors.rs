//! Error types for world setup and configuration

use thiserror::Error;

use crate::dungeon::Coord;

/// Errors raised while building or mutating the world
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("unknown map symbol '{symbol}' at ({x}, {y})")]
    BadMapSymbol { symbol: char, x: i32, y: i32 },

    #[error("map of {width}x{height} exceeds the level size limit")]
    MapTooLarge { width: usize, height: usize },

    #[error("position {pos} is outside the map")]
    OutOfBounds { pos: Coord },

    #[error("position {pos} is solid terrain")]
    Solid { pos: Coord },

    #[error("position {pos} is already occupied")]
    Occupied { pos: Coord },
}

/// Errors raised while reading combat options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("missing value for option '{0}'")]
    MissingValue(String),
}
