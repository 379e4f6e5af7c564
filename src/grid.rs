//! Square letter grid.
//!
//! Cells start empty while the generator places words and are all filled
//! once a round is handed to the selection engine.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::Cell;
use crate::config::ALPHABET;

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: usize,
    letters: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            letters: vec![None; size * size],
        }
    }

    /// Width and height.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.0 < self.size && cell.1 < self.size
    }

    /// Letter at `cell`; `None` when empty or out of bounds.
    pub fn get(&self, cell: Cell) -> Option<char> {
        if self.in_bounds(cell) {
            self.letters[cell.0 * self.size + cell.1]
        } else {
            None
        }
    }

    /// Write a letter. Out-of-bounds writes are ignored.
    pub(crate) fn set(&mut self, cell: Cell, letter: char) {
        if self.in_bounds(cell) {
            self.letters[cell.0 * self.size + cell.1] = Some(letter);
        }
    }

    /// Letters read along `path`, skipping cells that hold nothing.
    pub fn letters_along(&self, path: &[Cell]) -> String {
        path.iter().filter_map(|&c| self.get(c)).collect()
    }

    /// Number of cells holding a letter.
    pub fn filled_count(&self) -> usize {
        self.letters.iter().filter(|l| l.is_some()).count()
    }

    /// True once every cell holds a letter.
    pub fn is_filled(&self) -> bool {
        self.letters.iter().all(Option::is_some)
    }

    /// Fill every empty cell with a uniformly random letter A-Z.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R) {
        for slot in self.letters.iter_mut().filter(|l| l.is_none()) {
            let idx = rng.random_range(0..ALPHABET.len());
            *slot = Some(ALPHABET[idx] as char);
        }
    }

    /// One row of letters, `'.'` standing in for empty cells.
    pub fn row(&self, row: usize) -> Vec<char> {
        (0..self.size)
            .map(|col| self.get((row, col)).unwrap_or('.'))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for (c, ch) in self.row(r).into_iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch)?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.size, self.size)?;
        write!(f, "{}", self)
    }
}
