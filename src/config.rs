use alloc::string::String;
use alloc::vec::Vec;

use crate::common::GenerationError;
use crate::word::{Sponsor, WordEntry};

/// Fits CONFIDENTIALITY with room to spare.
pub const GRID_SIZE: usize = 18;
pub const MAX_PLACEMENT_ATTEMPTS: usize = 400;
pub const MAX_REGENERATIONS: usize = 100;
/// Largest grid `GameConfig::validate` accepts.
pub const MAX_GRID_SIZE: usize = 256;
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Static sponsor definition: lookup key, display name and brand color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SponsorDef {
    key: &'static str,
    name: &'static str,
    color: &'static str,
}

impl SponsorDef {
    pub const fn new(key: &'static str, name: &'static str, color: &'static str) -> Self {
        Self { key, name, color }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn color(&self) -> &'static str {
        self.color
    }
}

/// Static core value: the hidden word and the sponsors sharing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreValue {
    word: &'static str,
    sponsors: &'static [&'static str],
}

impl CoreValue {
    pub const fn new(word: &'static str, sponsors: &'static [&'static str]) -> Self {
        Self { word, sponsors }
    }

    pub fn word(&self) -> &'static str {
        self.word
    }

    pub fn sponsors(&self) -> &'static [&'static str] {
        self.sponsors
    }
}

const CELL: &str = "Cell Insurance";
const CELLMED: &str = "CellMed Health Medical Fund";
const NECTACARE: &str = "Nectacare";

pub const NUM_SPONSORS: usize = 3;
pub const SPONSORS: [SponsorDef; NUM_SPONSORS] = [
    SponsorDef::new("cell", CELL, "#fed41f"),
    SponsorDef::new("cellmed", CELLMED, "#10b981"),
    SponsorDef::new("nectacare", NECTACARE, "#7c3aed"),
];

pub const NUM_CORE_VALUES: usize = 9;
pub const CORE_VALUES: [CoreValue; NUM_CORE_VALUES] = [
    CoreValue::new("INNOVATION", &[CELL, CELLMED]),
    CoreValue::new("EXCELLENCE", &[CELL, CELLMED, NECTACARE]),
    CoreValue::new("PARTNERSHIP", &[CELL, CELLMED]),
    CoreValue::new("INTEGRITY", &[CELL, CELLMED, NECTACARE]),
    CoreValue::new("EMPATHY", &[CELL, CELLMED, NECTACARE]),
    CoreValue::new("SECURITY", &[CELL]),
    CoreValue::new("TEAMWORK", &[CELLMED, NECTACARE]),
    CoreValue::new("CONFIDENTIALITY", &[NECTACARE]),
    CoreValue::new("QUALITY", &[NECTACARE]),
];

/// Runtime configuration for generating rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    grid_size: usize,
    words: Vec<WordEntry>,
    sponsors: Vec<Sponsor>,
    max_placement_attempts: usize,
    max_regenerations: usize,
}

impl GameConfig {
    /// Configuration with the default retry bounds.
    pub fn new(grid_size: usize, words: Vec<WordEntry>, sponsors: Vec<Sponsor>) -> Self {
        Self {
            grid_size,
            words,
            sponsors,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_regenerations: MAX_REGENERATIONS,
        }
    }

    /// The nine core values on an 18×18 grid.
    pub fn core_values() -> Self {
        let words = CORE_VALUES
            .iter()
            .map(|v| WordEntry::new(v.word(), v.sponsors().iter().copied()))
            .collect();
        let sponsors = SPONSORS
            .iter()
            .map(|s| Sponsor::new(s.key(), s.name(), s.color()))
            .collect();
        Self::new(GRID_SIZE, words, sponsors)
    }

    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_max_placement_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    pub fn with_max_regenerations(mut self, regenerations: usize) -> Self {
        self.max_regenerations = regenerations;
        self
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn sponsors(&self) -> &[Sponsor] {
        &self.sponsors
    }

    pub fn max_placement_attempts(&self) -> usize {
        self.max_placement_attempts
    }

    pub fn max_regenerations(&self) -> usize {
        self.max_regenerations
    }

    /// Registered sponsor with the given display name.
    pub fn sponsor(&self, name: &str) -> Option<&Sponsor> {
        self.sponsors.iter().find(|s| s.name == name)
    }

    /// Registered sponsor with the given key.
    pub fn sponsor_by_key(&self, key: &str) -> Option<&Sponsor> {
        self.sponsors.iter().find(|s| s.key == key)
    }

    /// Length of the longest configured word.
    pub fn longest_word(&self) -> usize {
        self.words.iter().map(WordEntry::len).max().unwrap_or(0)
    }

    /// Check the configuration can describe a solvable puzzle.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.grid_size == 0 {
            return Err(GenerationError::ZeroGridSize);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(GenerationError::GridTooLarge {
                grid_size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.max_placement_attempts == 0 || self.max_regenerations == 0 {
            return Err(GenerationError::ZeroAttempts);
        }
        if self.words.is_empty() {
            return Err(GenerationError::EmptyWordList);
        }
        for (i, entry) in self.words.iter().enumerate() {
            if !entry.is_valid() {
                return Err(GenerationError::InvalidWord(String::from(entry.word())));
            }
            if self.words[..i].iter().any(|e| e.word() == entry.word()) {
                return Err(GenerationError::DuplicateWord(String::from(entry.word())));
            }
            if entry.len() > self.grid_size {
                return Err(GenerationError::WordTooLong {
                    word: String::from(entry.word()),
                    grid_size: self.grid_size,
                });
            }
            if let Some(missing) = entry.sponsors().iter().find(|s| self.sponsor(s).is_none()) {
                return Err(GenerationError::UnknownSponsor {
                    word: String::from(entry.word()),
                    sponsor: missing.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::core_values()
    }
}
