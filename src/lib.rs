#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod direction;
mod game;
pub mod generator;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod presenter;
mod round;
pub mod selection;
pub mod solver;
#[cfg(feature = "std")]
pub mod terminal;
mod word;

pub use common::*;
pub use config::*;
pub use direction::Direction;
pub use game::WordSearch;
pub use generator::{generate, Layout};
pub use grid::Grid;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_at, LOG_ENV};
pub use presenter::{dispatch, Presenter};
pub use round::{Progress, RoundState, RoundStatus, SponsorBucket};
pub use selection::{build_path, paths_equal, Gesture};
pub use solver::{autoplay, find_occurrences, AutoPlayer, PlaySummary};
#[cfg(feature = "std")]
pub use terminal::{run_interactive, TerminalPresenter};
pub use word::{Placement, Sponsor, WordEntry};
