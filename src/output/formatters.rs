//! Formatting utilities for terminal output

use crate::core::LetterState;
use colored::{ColoredString, Colorize};

/// Format a sequence of letter states as an emoji string
#[must_use]
pub fn states_to_emoji(states: &[LetterState]) -> String {
    states
        .iter()
        .map(|state| match state {
            LetterState::Correct => '🟩',
            LetterState::Present => '🟨',
            LetterState::Absent | LetterState::Default => '⬜',
        })
        .collect()
}

/// Color a single letter according to its evaluation state
#[must_use]
pub fn colored_letter(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        LetterState::Correct => text.black().on_green(),
        LetterState::Present => text.black().on_yellow(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Default => text.normal(),
    }
}
