use super::direction::Direction;
use crate::consts;
use rand::Rng;
use serde::Deserialize;
use std::fmt;

/// A position on the board, in surface units.  Legal positions are multiples
/// of the grid size, but a snake leaving the board can produce negative
/// coordinates, so they are signed.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(from = "(i32, i32)")]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Return the position one grid cell away in `direction`
    pub(crate) fn step(self, direction: Direction, grid: u16) -> Point {
        let (dx, dy) = direction.velocity(grid);
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Point {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of the playing field.  `width` and `height` are in surface
/// units and are both multiples of `grid`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) grid: u16,
}

impl Board {
    /// Number of grid cells per row
    pub(crate) fn columns(self) -> u16 {
        self.width / self.grid
    }

    /// Number of grid cells per column
    pub(crate) fn rows(self) -> u16 {
        self.height / self.grid
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.columns()) * usize::from(self.rows())
    }

    pub(crate) fn contains(self, p: Point) -> bool {
        (0..i32::from(self.width)).contains(&p.x) && (0..i32::from(self.height)).contains(&p.y)
    }

    pub(crate) fn is_aligned(self, p: Point) -> bool {
        let grid = i32::from(self.grid);
        p.x % grid == 0 && p.y % grid == 0
    }

    /// Iterate over the origin of every grid cell, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Point> {
        let grid = i32::from(self.grid);
        let columns = i32::from(self.columns());
        let rows = i32::from(self.rows());
        (0..rows).flat_map(move |r| (0..columns).map(move |c| Point::new(c * grid, r * grid)))
    }

    /// Pick a grid cell uniformly at random
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Point {
        let grid = i32::from(self.grid);
        let c = rng.random_range(0..i32::from(self.columns()));
        let r = rng.random_range(0..i32::from(self.rows()));
        Point::new(c * grid, r * grid)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board {
            width: consts::BOARD_WIDTH,
            height: consts::BOARD_HEIGHT,
            grid: consts::GRID,
        }
    }
}
