//! Drag-to-select: turning pointer positions into straight cell paths and
//! judging finished paths against the round's placements.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{Cell, RejectReason, RoundEvent};
use crate::direction::Direction;
use crate::round::RoundState;
use crate::word::WordEntry;

/// The straight path from `start` towards `current`.
///
/// The direction comes from the sign of each coordinate difference, so any
/// drag snaps onto one of the eight rays leaving `start`. The walk stops on
/// reaching `current` or the edge of a `size`×`size` grid, whichever is first.
pub fn build_path(start: Cell, current: Cell, size: usize) -> Vec<Cell> {
    let direction = Direction::toward(start, current);
    let mut path = vec![start];
    let mut cell = start;
    while cell != current {
        match direction.step(cell, size) {
            Some(next) => {
                path.push(next);
                cell = next;
            }
            None => break,
        }
    }
    path
}

/// Cell sequences are equal if they match in order or in reverse order.
pub fn paths_equal(a: &[Cell], b: &[Cell]) -> bool {
    a.len() == b.len() && (a == b || a.iter().eq(b.iter().rev()))
}

/// True if `candidate`, read either way round, spells a listed word.
pub fn spells_listed_word(words: &[WordEntry], candidate: &str) -> bool {
    words.iter().any(|e| e.matches(candidate))
}

/// Decide whether `path` selects a word that has not been found yet.
///
/// The letters must spell a listed word in either direction, the cells must
/// be exactly some placement (either way round), and that placement's word
/// must be among the words spelled. Drag direction never changes the result.
pub fn evaluate<'r>(round: &'r RoundState, path: &[Cell]) -> Result<&'r WordEntry, RejectReason> {
    let candidate = round.grid().letters_along(path);
    if !spells_listed_word(round.words(), &candidate) {
        return Err(RejectReason::NotAWord);
    }
    let placed = round
        .placements()
        .iter()
        .find(|p| p.covers(path))
        .ok_or(RejectReason::NotPlaced)?;
    let matched = round
        .words()
        .iter()
        .find(|e| e.word() == placed.word() && e.matches(&candidate))
        .ok_or(RejectReason::WordMismatch)?;
    if round.is_found(matched.word()) {
        return Err(RejectReason::AlreadyFound);
    }
    Ok(matched)
}

/// One pointer-down to pointer-up interaction.
///
/// A gesture remembers the round it began in; finishing it against a
/// different round is rejected without touching that round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gesture {
    round_id: u64,
    start: Cell,
    path: Vec<Cell>,
}

impl Gesture {
    /// Start a gesture on `cell`. Returns `None` if the cell is off the grid.
    pub fn begin(round: &RoundState, cell: Cell) -> Option<Self> {
        if !round.grid().in_bounds(cell) {
            return None;
        }
        Some(Gesture {
            round_id: round.id(),
            start: cell,
            path: vec![cell],
        })
    }

    /// Recompute the path for the pointer now over `cell`. Cells off the grid
    /// leave the path unchanged.
    pub fn extend(&mut self, round: &RoundState, cell: Cell) {
        if round.id() != self.round_id || !round.grid().in_bounds(cell) {
            return;
        }
        self.path = build_path(self.start, cell, round.grid().size());
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    /// Tentative selection, for highlighting while dragging.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn round_id(&self) -> u64 {
        self.round_id
    }

    /// End the gesture and judge its path.
    pub fn finish(self, round: &mut RoundState) -> Vec<RoundEvent> {
        if self.round_id != round.id() {
            log::debug!(
                "dropping gesture from round {} (current round {})",
                self.round_id,
                round.id()
            );
            return vec![RoundEvent::SelectionRejected {
                reason: RejectReason::StaleGesture,
            }];
        }
        round.select(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_on_start_cell_is_single_cell() {
        assert_eq!(build_path((4, 4), (4, 4), 18), vec![(4, 4)]);
    }

    #[test]
    fn path_follows_each_ray() {
        assert_eq!(build_path((0, 0), (0, 2), 18), vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(build_path((0, 2), (0, 0), 18), vec![(0, 2), (0, 1), (0, 0)]);
        assert_eq!(build_path((3, 3), (1, 5), 18), vec![(3, 3), (2, 4), (1, 5)]);
        assert_eq!(build_path((3, 3), (5, 3), 18), vec![(3, 3), (4, 3), (5, 3)]);
    }

    #[test]
    fn off_ray_target_runs_to_edge() {
        // (1, 3) is south-east-ish but not on the diagonal
        assert_eq!(
            build_path((0, 0), (1, 3), 4),
            vec![(0, 0), (1, 1), (2, 2), (3, 3)]
        );
        assert_eq!(build_path((2, 1), (3, 3), 4), vec![(2, 1), (3, 2)]);
    }

    #[test]
    fn paths_equal_ignores_drag_direction() {
        let a = [(0, 0), (1, 1), (2, 2)];
        let b = [(2, 2), (1, 1), (0, 0)];
        assert!(paths_equal(&a, &a));
        assert!(paths_equal(&a, &b));
        assert!(!paths_equal(&a, &a[..2]));
        assert!(!paths_equal(&a, &[(0, 0), (2, 2), (1, 1)]));
    }

    #[test]
    fn listed_words_read_both_ways() {
        let words = vec![WordEntry::new("TAC", ["X"]), WordEntry::new("DOG", ["X"])];
        assert!(spells_listed_word(&words, "CAT"));
        assert!(spells_listed_word(&words, "TAC"));
        assert!(spells_listed_word(&words, "GOD"));
        assert!(!spells_listed_word(&words, "ACT"));
    }
}
