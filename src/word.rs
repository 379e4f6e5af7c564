//! Word entries, sponsors and the placements the generator commits.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::Cell;
use crate::direction::Direction;

/// An organisation that core values are grouped under.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Sponsor {
    pub key: String,
    pub name: String,
    pub color: String,
}

impl Sponsor {
    pub fn new(key: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A word to hide, together with the names of its sponsors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct WordEntry {
    word: String,
    sponsors: Vec<String>,
}

impl WordEntry {
    pub fn new<I, S>(word: impl Into<String>, sponsors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            word: word.into(),
            sponsors: sponsors.into_iter().map(Into::into).collect(),
        }
    }

    /// The canonical spelling.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Sponsor names, in configuration order.
    pub fn sponsors(&self) -> &[String] {
        &self.sponsors
    }

    /// Number of letters (words are ASCII).
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Non-empty and uppercase A-Z only.
    pub fn is_valid(&self) -> bool {
        !self.word.is_empty() && self.word.bytes().all(|b| b.is_ascii_uppercase())
    }

    /// True if `candidate` spells this word forwards or backwards.
    pub fn matches(&self, candidate: &str) -> bool {
        self.word == candidate || self.word.chars().rev().eq(candidate.chars())
    }
}

/// Where a word landed on the grid.
///
/// `cells` are in the order the letters were written, so when `reversed` is
/// set the grid reads the word backwards along them.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    word: String,
    cells: Vec<Cell>,
    sponsors: Vec<String>,
    direction: Direction,
    reversed: bool,
}

impl Placement {
    pub(crate) fn new(
        entry: &WordEntry,
        cells: Vec<Cell>,
        direction: Direction,
        reversed: bool,
    ) -> Self {
        Self {
            word: entry.word.clone(),
            cells,
            sponsors: entry.sponsors.clone(),
            direction,
            reversed,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn sponsors(&self) -> &[String] {
        &self.sponsors
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the letters were written last-to-first along `cells`.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// True if `cell` is part of this placement.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// True if `path` is exactly this placement's cells, in either order.
    pub fn covers(&self, path: &[Cell]) -> bool {
        crate::selection::paths_equal(&self.cells, path)
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.cells.first().copied().unwrap_or_default();
        write!(
            f,
            "Placement {{ word: \"{}\", start: ({}, {}), direction: {:?}, reversed: {}, len: {} }}",
            self.word,
            start.0,
            start.1,
            self.direction,
            self.reversed,
            self.cells.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_both_orientations() {
        let e = WordEntry::new("CAT", ["X"]);
        assert!(e.matches("CAT"));
        assert!(e.matches("TAC"));
        assert!(!e.matches("ACT"));
        assert!(!e.matches("CATS"));
    }

    #[test]
    fn validity_is_uppercase_ascii() {
        assert!(WordEntry::new("EMPATHY", ["Nectacare"]).is_valid());
        assert!(!WordEntry::new("Empathy", ["Nectacare"]).is_valid());
        assert!(!WordEntry::new("TEAM WORK", ["Nectacare"]).is_valid());
        assert!(!WordEntry::new("", ["Nectacare"]).is_valid());
    }
}
