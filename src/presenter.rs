use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{Cell, RejectReason, RoundEvent};
use crate::round::RoundState;

/// Interface implemented by front ends reacting to round events.
///
/// Every hook defaults to doing nothing, so a presenter only overrides the
/// events it draws.
pub trait Presenter {
    /// A new round is ready to show.
    fn round_started(&mut self, _round: &RoundState) {}

    /// A word was found along `cells`.
    fn word_found(&mut self, _word: &str, _cells: &[Cell], _sponsors: &[String]) {}

    /// The last gesture selected nothing new.
    fn selection_rejected(&mut self, _reason: RejectReason) {}

    /// Every word in the round has been found.
    fn round_complete(&mut self) {}
}

/// Forward `events` to the matching presenter hooks, in order.
pub fn dispatch<P: Presenter + ?Sized>(presenter: &mut P, events: &[RoundEvent]) {
    for event in events {
        match event {
            RoundEvent::WordFound {
                word,
                cells,
                sponsors,
            } => presenter.word_found(word, cells, sponsors),
            RoundEvent::SelectionRejected { reason } => presenter.selection_rejected(*reason),
            RoundEvent::RoundComplete => presenter.round_complete(),
        }
    }
}

/// Records every event it is shown.
impl Presenter for Vec<RoundEvent> {
    fn word_found(&mut self, word: &str, cells: &[Cell], sponsors: &[String]) {
        self.push(RoundEvent::WordFound {
            word: String::from(word),
            cells: cells.to_vec(),
            sponsors: sponsors.to_vec(),
        });
    }

    fn selection_rejected(&mut self, reason: RejectReason) {
        self.push(RoundEvent::SelectionRejected { reason });
    }

    fn round_complete(&mut self) {
        self.push(RoundEvent::RoundComplete);
    }
}
