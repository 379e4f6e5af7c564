//! Round state: the generated grid, its placements and the words found so far.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use rand::Rng;

use crate::common::{Cell, GenerationError, RoundEvent};
use crate::config::GameConfig;
use crate::generator::{self, Layout};
use crate::grid::Grid;
use crate::selection;
use crate::word::{Placement, Sponsor, WordEntry};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundStatus {
    InProgress,
    Complete,
}

/// Found versus total word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub found: usize,
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} found", self.found, self.total)
    }
}

/// Found words belonging to one sponsor, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorBucket<'a> {
    pub sponsor: &'a Sponsor,
    pub words: Vec<&'a str>,
}

/// Everything one round of play needs. Grid and placements never change
/// after construction; only the found list grows.
#[derive(Debug, Clone)]
pub struct RoundState {
    id: u64,
    grid: Grid,
    placements: Vec<Placement>,
    words: Vec<WordEntry>,
    found: Vec<String>,
    completed: bool,
}

impl RoundState {
    /// Generate a fresh round from `config`.
    pub fn generate<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, GenerationError> {
        let layout = generator::generate(config, rng)?;
        let round = Self::from_layout(config.words().to_vec(), layout);
        info!(
            "new {}x{} round hiding {} words",
            round.grid.size(),
            round.grid.size(),
            round.words.len()
        );
        Ok(round)
    }

    /// Build a round from an existing layout. Empty cells are left as is, so
    /// callers placing words by hand should fill the layout first.
    pub fn from_layout(words: Vec<WordEntry>, layout: Layout) -> Self {
        let (grid, placements) = layout.into_parts();
        RoundState {
            id: 0,
            grid,
            placements,
            words,
            found: Vec::new(),
            completed: false,
        }
    }

    /// Tag the round with an identifier used to detect stale gestures.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Where every word is hidden. Not for showing to the player.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Words found so far, in the order found.
    pub fn found(&self) -> &[String] {
        &self.found
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.iter().any(|w| w == word)
    }

    pub fn entry(&self, word: &str) -> Option<&WordEntry> {
        self.words.iter().find(|e| e.word() == word)
    }

    pub fn placement(&self, word: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word() == word)
    }

    /// True if `word` is shared by more than one sponsor.
    pub fn is_multi_sponsor(&self, word: &str) -> bool {
        self.entry(word).is_some_and(|e| e.sponsors().len() > 1)
    }

    pub fn status(&self) -> RoundStatus {
        if self.completed {
            RoundStatus::Complete
        } else {
            RoundStatus::InProgress
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            found: self.found.len(),
            total: self.words.len(),
        }
    }

    /// Found words grouped under each registered sponsor, in registry order.
    pub fn found_by_sponsor<'a>(&'a self, sponsors: &'a [Sponsor]) -> Vec<SponsorBucket<'a>> {
        sponsors
            .iter()
            .map(|sponsor| {
                let words = self
                    .found
                    .iter()
                    .filter(|w| {
                        self.entry(w)
                            .is_some_and(|e| e.sponsors().iter().any(|s| *s == sponsor.name))
                    })
                    .map(String::as_str)
                    .collect();
                SponsorBucket { sponsor, words }
            })
            .collect()
    }

    /// Judge a finished selection path and record it if it finds a word.
    ///
    /// Emits `WordFound` on success, followed by `RoundComplete` the first
    /// time every word has been found. Anything else is a single
    /// `SelectionRejected` and leaves the round untouched.
    pub fn select(&mut self, path: &[Cell]) -> Vec<RoundEvent> {
        let verdict = selection::evaluate(self, path)
            .map(|e| (String::from(e.word()), e.sponsors().to_vec()));
        match verdict {
            Ok((word, sponsors)) => {
                debug!("found {} along {:?}", word, path);
                self.found.push(word.clone());
                let mut events = vec![RoundEvent::WordFound {
                    word,
                    cells: path.to_vec(),
                    sponsors,
                }];
                if !self.completed && self.found.len() == self.words.len() {
                    self.completed = true;
                    info!("round {} complete", self.id);
                    events.push(RoundEvent::RoundComplete);
                }
                events
            }
            Err(reason) => {
                debug!("rejected {:?}: {}", path, reason);
                vec![RoundEvent::SelectionRejected { reason }]
            }
        }
    }
}
