//! Commonly used types and utilities for ease of import.

pub use crate::{
    Cell, Direction, GameConfig, GenerationError, Grid, Placement, Presenter, RejectReason,
    RoundEvent, RoundState, RoundStatus, WordEntry, WordSearch,
};

#[cfg(feature = "std")]
pub use crate::{run_interactive, TerminalPresenter};
