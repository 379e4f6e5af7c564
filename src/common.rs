//! Common types for the word search: cells, errors and round events.

use alloc::string::String;
use alloc::vec::Vec;

/// A grid coordinate as `(row, col)`.
pub type Cell = (usize, usize);

/// Why a finished gesture did not count as a found word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum RejectReason {
    /// The letters along the path spell no listed word in either direction.
    NotAWord,
    /// The path does not coincide with any committed placement.
    NotPlaced,
    /// The letters spell one word but the cells belong to another.
    WordMismatch,
    /// The word was already found this round.
    AlreadyFound,
    /// The gesture began in a round that has since been replaced.
    StaleGesture,
}

impl core::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RejectReason::NotAWord => write!(f, "Selection does not spell a listed word"),
            RejectReason::NotPlaced => write!(f, "Selection does not follow a hidden word"),
            RejectReason::WordMismatch => write!(f, "Selection spells a word hidden elsewhere"),
            RejectReason::AlreadyFound => write!(f, "Word was already found"),
            RejectReason::StaleGesture => write!(f, "Selection started before the grid was reshuffled"),
        }
    }
}

/// Events emitted by the selection engine for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "event", rename_all = "snake_case"))]
pub enum RoundEvent {
    /// A listed word was selected along its placement.
    WordFound {
        word: String,
        cells: Vec<Cell>,
        sponsors: Vec<String>,
    },
    /// The gesture did not select a new word.
    SelectionRejected { reason: RejectReason },
    /// Every listed word has been found. Emitted once per round.
    RoundComplete,
}

/// Errors returned by manual word placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The word runs off the grid.
    OutOfBounds,
    /// A cell already holds a different letter.
    Conflict { cell: Cell, existing: char },
    /// The word already has a placement.
    AlreadyPlaced,
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Word placement is out of bounds"),
            PlacementError::Conflict { cell, existing } => write!(
                f,
                "Cell ({}, {}) already holds '{}'",
                cell.0, cell.1, existing
            ),
            PlacementError::AlreadyPlaced => write!(f, "Word is already placed on the grid"),
        }
    }
}

/// Configuration and generation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No words were configured.
    EmptyWordList,
    /// Grid size must be at least one.
    ZeroGridSize,
    /// Grid size is above the supported maximum.
    GridTooLarge { grid_size: usize, max: usize },
    /// Placement attempts and regenerations must be at least one.
    ZeroAttempts,
    /// Word is empty or contains characters outside A-Z.
    InvalidWord(String),
    /// Word appears more than once in the list.
    DuplicateWord(String),
    /// Word is longer than the grid is wide.
    WordTooLong { word: String, grid_size: usize },
    /// Word names a sponsor missing from the registry.
    UnknownSponsor { word: String, sponsor: String },
    /// Every full regeneration failed to place all words.
    RetriesExhausted { regenerations: usize },
}

impl core::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GenerationError::EmptyWordList => write!(f, "Word list is empty"),
            GenerationError::ZeroGridSize => write!(f, "Grid size must be at least 1"),
            GenerationError::GridTooLarge { grid_size, max } => {
                write!(f, "Grid size {} is larger than the maximum {}", grid_size, max)
            }
            GenerationError::ZeroAttempts => {
                write!(f, "Placement attempts and regenerations must be at least 1")
            }
            GenerationError::InvalidWord(w) => {
                write!(f, "Word '{}' must be non-empty and contain only A-Z", w)
            }
            GenerationError::DuplicateWord(w) => write!(f, "Word '{}' is listed twice", w),
            GenerationError::WordTooLong { word, grid_size } => write!(
                f,
                "Word '{}' ({} letters) does not fit a {}x{} grid",
                word,
                word.len(),
                grid_size,
                grid_size
            ),
            GenerationError::UnknownSponsor { word, sponsor } => {
                write!(f, "Word '{}' names unknown sponsor '{}'", word, sponsor)
            }
            GenerationError::RetriesExhausted { regenerations } => write!(
                f,
                "Unable to place every word after {} regenerations",
                regenerations
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GenerationError {}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
