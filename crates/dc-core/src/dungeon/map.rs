//! Level terrain grid

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::cell::CellType;
use super::cloud::Cloud;
use super::coord::Coord;
use crate::consts::{GXM, GYM};
use crate::world::WorldError;

/// Terrain and clouds for one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelMap {
    width: i32,
    height: i32,
    cells: Vec<CellType>,
    /// Clouds keyed by position
    #[serde(skip)]
    pub clouds: HashMap<Coord, Cloud>,
}

impl LevelMap {
    /// Create a map filled with `fill`
    pub fn new(width: i32, height: i32, fill: CellType) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
            clouds: HashMap::new(),
        }
    }

    /// Build a map from text rows (see [`CellType::from_symbol`]).
    ///
    /// Short rows are padded with stone. Maps larger than `GXM` x `GYM`
    /// are rejected.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, WorldError> {
        let height = rows.len();
        let width = rows
            .iter()
            .map(|r| r.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        if width > GXM || height > GYM {
            return Err(WorldError::MapTooLarge { width, height });
        }
        let (width, height) = (width as i32, height as i32);
        let mut map = Self::new(width, height, CellType::Stone);

        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.as_ref().chars().enumerate() {
                let cell = CellType::from_symbol(c).ok_or(WorldError::BadMapSymbol {
                    symbol: c,
                    x: x as i32,
                    y: y as i32,
                })?;
                map.set(Coord::new(x as i32, y as i32), cell);
            }
        }
        Ok(map)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Coord) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y * self.width + pos.x) as usize)
    }

    /// Terrain at `pos`; anything off the map reads as stone.
    pub fn cell(&self, pos: Coord) -> CellType {
        self.index(pos)
            .map(|i| self.cells[i])
            .unwrap_or(CellType::Stone)
    }

    /// Set terrain at `pos`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Coord, cell: CellType) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    pub fn is_solid(&self, pos: Coord) -> bool {
        self.cell(pos).is_solid()
    }

    pub fn place_cloud(&mut self, pos: Coord, cloud: Cloud) {
        if self.in_bounds(pos) {
            self.clouds.insert(pos, cloud);
        }
    }

    pub fn cloud_at(&self, pos: Coord) -> Option<&Cloud> {
        self.clouds.get(&pos)
    }

    /// Whether terrain or an opaque cloud obscures anything on the straight
    /// line from `from` to `to`, endpoints included for clouds.
    pub fn sight_blocked(&self, from: Coord, to: Coord) -> bool {
        let line = line_between(from, to);
        line.iter().any(|p| {
            self.cloud_at(*p).is_some_and(|c| c.kind.is_opaque())
                || (*p != from && *p != to && self.cell(*p).blocks_sight())
        })
    }

    /// Render the terrain back to text rows.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cell(Coord::new(x, y)).symbol())
                    .collect()
            })
            .collect()
    }
}

/// Cells on the Bresenham line from `a` to `b`, both endpoints included.
pub fn line_between(a: Coord, b: Coord) -> Vec<Coord> {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut p = a;
    let mut out = vec![p];

    while p != b {
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            p.x += sx;
        }
        if e2 <= dx {
            err += dx;
            p.y += sy;
        }
        out.push(p);
    }
    out
}
