//! Word placement: hides every configured word in a fresh grid.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::common::{Cell, GenerationError, PlacementError};
use crate::config::GameConfig;
use crate::direction::Direction;
use crate::grid::Grid;
use crate::word::{Placement, WordEntry};

/// A grid under construction plus the placements committed so far.
#[derive(Clone, Debug)]
pub struct Layout {
    grid: Grid,
    placements: Vec<Placement>,
}

impl Layout {
    /// Create an empty layout (no words placed).
    pub fn new(size: usize) -> Self {
        Layout {
            grid: Grid::new(size),
            placements: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Cells `letters` would occupy starting at `start`, if every one is in
    /// bounds and either empty or already holding the same letter.
    fn fits(
        &self,
        letters: &[char],
        start: Cell,
        direction: Direction,
    ) -> Result<Vec<Cell>, PlacementError> {
        let cells = direction
            .walk(start, letters.len(), self.grid.size())
            .ok_or(PlacementError::OutOfBounds)?;
        for (&cell, &letter) in cells.iter().zip(letters) {
            if let Some(existing) = self.grid.get(cell) {
                if existing != letter {
                    return Err(PlacementError::Conflict { cell, existing });
                }
            }
        }
        Ok(cells)
    }

    /// Place `entry` starting at `start` and running in `direction`, writing
    /// its letters last-to-first when `reversed` is set.
    pub fn place(
        &mut self,
        entry: &WordEntry,
        start: Cell,
        direction: Direction,
        reversed: bool,
    ) -> Result<&Placement, PlacementError> {
        if self.placements.iter().any(|p| p.word() == entry.word()) {
            return Err(PlacementError::AlreadyPlaced);
        }
        let letters = oriented_letters(entry, reversed);
        let cells = self.fits(&letters, start, direction)?;
        for (&cell, &letter) in cells.iter().zip(&letters) {
            self.grid.set(cell, letter);
        }
        self.placements
            .push(Placement::new(entry, cells, direction, reversed));
        let idx = self.placements.len() - 1;
        Ok(&self.placements[idx])
    }

    /// Returns a random fitting `(start, direction, reversed)` for `entry`,
    /// trying at most `attempts` times.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        entry: &WordEntry,
        attempts: usize,
    ) -> Option<(Cell, Direction, bool)> {
        let size = self.grid.size();
        for trial in 1..=attempts {
            let direction = Direction::random(rng);
            let start = (rng.random_range(0..size), rng.random_range(0..size));
            let reversed = rng.random_bool(0.5);
            let letters = oriented_letters(entry, reversed);
            if self.fits(&letters, start, direction).is_ok() {
                debug!(
                    "{} fits at {:?} going {:?} (trial {})",
                    entry.word(),
                    start,
                    direction,
                    trial
                );
                return Some((start, direction, reversed));
            }
        }
        None
    }

    /// Fill the remaining empty cells with random letters.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R) {
        self.grid.fill_random(rng);
    }

    pub fn into_parts(self) -> (Grid, Vec<Placement>) {
        (self.grid, self.placements)
    }
}

fn oriented_letters(entry: &WordEntry, reversed: bool) -> Vec<char> {
    if reversed {
        entry.word().chars().rev().collect()
    } else {
        entry.word().chars().collect()
    }
}

/// One pass over `order`; `None` as soon as a word cannot be placed.
fn try_layout<R: Rng>(order: &[&WordEntry], config: &GameConfig, rng: &mut R) -> Option<Layout> {
    let mut layout = Layout::new(config.grid_size());
    for entry in order {
        let (start, direction, reversed) =
            layout.random_placement(rng, entry, config.max_placement_attempts())?;
        layout.place(entry, start, direction, reversed).ok()?;
    }
    Some(layout)
}

/// Generate a filled grid hiding every configured word.
///
/// Words are placed longest first. If any word runs out of trials the whole
/// layout is thrown away and rebuilt, up to `max_regenerations` times.
pub fn generate<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Layout, GenerationError> {
    config.validate()?;
    let mut order: Vec<&WordEntry> = config.words().iter().collect();
    order.sort_by(|a, b| b.len().cmp(&a.len()));

    let limit = config.max_regenerations();
    for pass in 1..=limit {
        if let Some(mut layout) = try_layout(&order, config, rng) {
            layout.fill_random(rng);
            debug!("placed {} words on pass {}", order.len(), pass);
            return Ok(layout);
        }
        warn!("word placement failed, regenerating grid ({}/{})", pass, limit);
    }
    Err(GenerationError::RetriesExhausted {
        regenerations: limit,
    })
}
