//! Game state machine and its satellite concerns
//!
//! The controller applies player actions to the core types; keyboard hints
//! and the reveal timeline feed the presentation layer.

mod controller;
mod keyboard;
mod reveal;

pub use controller::{EnterOutcome, Game, Outcome};
pub use keyboard::{KEY_ROWS, KeyboardHints};
pub use reveal::{DEFAULT_REVEAL_UNIT, RevealTimeline};
