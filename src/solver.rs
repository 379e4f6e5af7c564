//! Automatic play: scan the grid for each listed word and drag across every
//! spot it appears. Decoys spelled by the random fill get rejected and the
//! player moves on to the next spot.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::{
    common::{Cell, RoundEvent},
    direction::Direction,
    game::WordSearch,
    grid::Grid,
    presenter::{self, Presenter},
    round::{RoundState, RoundStatus},
};

/// Every `(first, last)` cell pair where `word` can be read in a straight
/// line. A word and its reversal sitting on the same cells show up once for
/// each end.
pub fn find_occurrences(grid: &Grid, word: &str) -> Vec<(Cell, Cell)> {
    let letters: Vec<char> = word.chars().collect();
    let size = grid.size();
    let mut hits = Vec::new();
    let Some(&first) = letters.first() else {
        return hits;
    };
    for r in 0..size {
        for c in 0..size {
            if grid.get((r, c)) != Some(first) {
                continue;
            }
            for d in Direction::ALL {
                let Some(cells) = d.walk((r, c), letters.len(), size) else {
                    continue;
                };
                let spelled = cells
                    .iter()
                    .zip(&letters)
                    .all(|(&cell, &l)| grid.get(cell) == Some(l));
                let span = (cells[0], cells[cells.len() - 1]);
                if spelled && !hits.contains(&span) {
                    hits.push(span);
                }
            }
        }
    }
    hits
}

/// Plays a round by trying every occurrence of every missing word.
pub struct AutoPlayer {
    queue: VecDeque<(String, Cell, Cell)>,
}

impl AutoPlayer {
    /// Queue a gesture for each occurrence of each word still missing. Each
    /// gesture is dragged from a random end.
    pub fn plan<R: Rng>(round: &RoundState, rng: &mut R) -> Self {
        let mut queue = VecDeque::new();
        for entry in round.words().iter().filter(|e| !round.is_found(e.word())) {
            for (a, b) in find_occurrences(round.grid(), entry.word()) {
                let (from, to) = if rng.random_bool(0.5) { (a, b) } else { (b, a) };
                queue.push_back((String::from(entry.word()), from, to));
            }
        }
        Self { queue }
    }

    /// Next gesture worth trying, skipping words found in the meantime.
    pub fn next_gesture(&mut self, round: &RoundState) -> Option<(Cell, Cell)> {
        while let Some((word, from, to)) = self.queue.pop_front() {
            if !round.is_found(&word) {
                return Some((from, to));
            }
        }
        None
    }
}

/// Tally of an automatic play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaySummary {
    pub gestures: usize,
    pub found: usize,
    pub rejected: usize,
    pub complete: bool,
}

/// Play the current round of `game` to the end, forwarding every event to
/// `presenter`.
pub fn autoplay<R, P>(game: &mut WordSearch, rng: &mut R, presenter: &mut P) -> PlaySummary
where
    R: Rng,
    P: Presenter + ?Sized,
{
    let mut player = AutoPlayer::plan(game.round(), rng);
    let mut summary = PlaySummary::default();
    while game.status() == RoundStatus::InProgress {
        let Some((from, to)) = player.next_gesture(game.round()) else {
            break;
        };
        let events = game.select(from, to);
        summary.gestures += 1;
        for event in &events {
            match event {
                RoundEvent::WordFound { .. } => summary.found += 1,
                RoundEvent::SelectionRejected { .. } => summary.rejected += 1,
                RoundEvent::RoundComplete => summary.complete = true,
            }
        }
        presenter::dispatch(presenter, &events);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Layout;
    use crate::word::WordEntry;

    #[test]
    fn finds_word_in_both_spellings() {
        let mut layout = Layout::new(5);
        let cat = WordEntry::new("CAT", ["X"]);
        layout
            .place(&cat, (4, 0), Direction::NorthEast, true)
            .unwrap();
        let grid = layout.grid();
        // written as T, A, C from (4, 0) going north-east
        assert_eq!(find_occurrences(grid, "CAT"), vec![((2, 2), (4, 0))]);
        assert_eq!(find_occurrences(grid, "TAC"), vec![((4, 0), (2, 2))]);
        assert!(find_occurrences(grid, "DOG").is_empty());
    }

    #[test]
    fn single_letter_reported_once() {
        let mut layout = Layout::new(3);
        layout
            .place(&WordEntry::new("Q", ["X"]), (1, 1), Direction::East, false)
            .unwrap();
        assert_eq!(find_occurrences(layout.grid(), "Q"), vec![((1, 1), (1, 1))]);
    }
}
