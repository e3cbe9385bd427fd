//! Grid coordinates and compass rotation

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Position (or offset) on the level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// The eight compass offsets, clockwise from north.
pub const COMPASS: [Coord; 8] = [
    Coord::new(0, -1),
    Coord::new(1, -1),
    Coord::new(1, 0),
    Coord::new(1, 1),
    Coord::new(0, 1),
    Coord::new(-1, 1),
    Coord::new(-1, 0),
    Coord::new(-1, -1),
];

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Chebyshev distance, the number of king moves between two cells
    pub fn distance(self, other: Coord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && self.distance(other) <= 1
    }

    /// Iterate the eight neighbours in compass order.
    pub fn adjacent(self) -> impl Iterator<Item = Coord> {
        COMPASS.into_iter().map(move |d| self + d)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rotate a unit compass offset one step (45 degrees).
///
/// `direction` is +1 or -1. A zero vector stays zero.
pub fn rotate_adjacent(vec: Coord, direction: i32) -> Coord {
    Coord::new(
        (vec.x - direction * vec.y).signum(),
        (vec.y + direction * vec.x).signum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_steps_through_compass() {
        let mut v = Coord::new(0, -1);
        let mut seen = vec![v];
        for _ in 0..7 {
            v = rotate_adjacent(v, 1);
            seen.push(v);
        }
        assert_eq!(seen, COMPASS.to_vec());
        assert_eq!(rotate_adjacent(v, 1), Coord::new(0, -1));
    }

    #[test]
    fn test_rotate_is_reversible() {
        for d in COMPASS {
            assert_eq!(rotate_adjacent(rotate_adjacent(d, 1), -1), d);
        }
    }

    #[test]
    fn test_rotate_zero_vector() {
        assert_eq!(rotate_adjacent(Coord::origin(), 1), Coord::origin());
    }

    #[test]
    fn test_adjacency() {
        let c = Coord::new(5, 5);
        assert!(c.is_adjacent(Coord::new(6, 6)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(7, 5)));
        assert_eq!(c.adjacent().count(), 8);
    }
}
