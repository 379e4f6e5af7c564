use alloc::vec::Vec;
use rand::Rng;

use crate::{
    common::{Cell, GenerationError, RoundEvent},
    config::GameConfig,
    round::{Progress, RoundState, RoundStatus, SponsorBucket},
    selection::Gesture,
};

/// A playing session: the configuration, the current round and whatever
/// gesture is in flight. Pointer events are expected already mapped to grid
/// cells; `None` means the pointer is over no cell.
pub struct WordSearch {
    config: GameConfig,
    round: RoundState,
    gesture: Option<Gesture>,
}

impl WordSearch {
    /// Generate the first round.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, GenerationError> {
        let round = RoundState::generate(&config, rng)?;
        Ok(Self {
            config,
            round,
            gesture: None,
        })
    }

    /// Start from a prepared round, e.g. one laid out by hand.
    pub fn from_round(config: GameConfig, round: RoundState) -> Self {
        Self {
            config,
            round,
            gesture: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    pub fn progress(&self) -> Progress {
        self.round.progress()
    }

    /// Found words grouped by the configured sponsors.
    pub fn found_by_sponsor(&self) -> Vec<SponsorBucket<'_>> {
        self.round.found_by_sponsor(self.config.sponsors())
    }

    /// Replace the round with a freshly generated one (shuffle / play again).
    ///
    /// Any gesture in progress is dropped first. If generation fails the
    /// previous round stays in place.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) -> Result<(), GenerationError> {
        self.gesture = None;
        let next_id = self.round.id().wrapping_add(1);
        self.round = RoundState::generate(&self.config, rng)?.with_id(next_id);
        Ok(())
    }

    /// Pointer pressed. Starts a new gesture when over a grid cell.
    pub fn pointer_down(&mut self, cell: Option<Cell>) {
        if let Some(gesture) = cell.and_then(|c| Gesture::begin(&self.round, c)) {
            self.gesture = Some(gesture);
        }
    }

    /// Pointer moved while pressed. Recomputes the tentative path.
    pub fn pointer_move(&mut self, cell: Option<Cell>) {
        if let (Some(gesture), Some(cell)) = (self.gesture.as_mut(), cell) {
            gesture.extend(&self.round, cell);
        }
    }

    /// Pointer released. Judges the gesture, if any, and always clears it.
    pub fn pointer_up(&mut self) -> Vec<RoundEvent> {
        match self.gesture.take() {
            Some(gesture) => gesture.finish(&mut self.round),
            None => Vec::new(),
        }
    }

    /// Drop the gesture in progress without judging it.
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Cells currently under the drag, empty when not dragging.
    pub fn selection(&self) -> &[Cell] {
        self.gesture.as_ref().map(Gesture::path).unwrap_or(&[])
    }

    /// A whole gesture from `from` to `to` in one call.
    pub fn select(&mut self, from: Cell, to: Cell) -> Vec<RoundEvent> {
        self.pointer_down(Some(from));
        self.pointer_move(Some(to));
        self.pointer_up()
    }
}
