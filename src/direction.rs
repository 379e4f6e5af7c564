//! The eight straight-line directions a word can run in.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::Cell;

/// Direction of travel across the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    West,
    South,
    North,
    SouthEast,
    SouthWest,
    NorthEast,
    NorthWest,
}

impl Direction {
    /// All directions, in the order random choices index into.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthEast,
        Direction::NorthWest,
    ];

    /// Unit step as `(d_row, d_col)`.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Direction for a unit step, `None` for `(0, 0)` or non-unit components.
    pub fn from_delta(d_row: isize, d_col: isize) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.delta() == (d_row, d_col))
    }

    /// Direction from `from` towards `to`, taking the sign of each component
    /// independently. Falls back to `East` when both cells coincide.
    pub fn toward(from: Cell, to: Cell) -> Self {
        let d_row = (to.0 as isize - from.0 as isize).signum();
        let d_col = (to.1 as isize - from.1 as isize).signum();
        Self::from_delta(d_row, d_col).unwrap_or(Direction::East)
    }

    /// Uniformly random direction.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// The neighbouring cell in this direction on a `size`×`size` grid.
    pub fn step(self, cell: Cell, size: usize) -> Option<Cell> {
        let (dr, dc) = self.delta();
        let row = cell.0.checked_add_signed(dr)?;
        let col = cell.1.checked_add_signed(dc)?;
        if row < size && col < size {
            Some((row, col))
        } else {
            None
        }
    }

    /// The `len` cells starting at `start`, or `None` if any leaves the grid.
    pub fn walk(self, start: Cell, len: usize, size: usize) -> Option<Vec<Cell>> {
        if start.0 >= size || start.1 >= size {
            return None;
        }
        let mut cells = Vec::with_capacity(len);
        let mut cell = start;
        for i in 0..len {
            if i > 0 {
                cell = self.step(cell, size)?;
            }
            cells.push(cell);
        }
        Some(cells)
    }
}
