//! Game state machine
//!
//! Owns the board, cursor, keyboard hints, goal word, and outcome, and
//! applies the three player actions. The goal word is injected at
//! construction, so a game is fully deterministic given its inputs.

use super::keyboard::KeyboardHints;
use crate::core::{Board, Cursor, LetterState, NUM_ROWS, Row, Word, evaluate_row};

/// Terminal result of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Whether the game has ended
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What a press of Enter did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterOutcome {
    /// Game already over; nothing happened
    Ignored,
    /// The current row is not fully filled; nothing advanced
    Incomplete,
    /// The row was evaluated and written to the board
    Submitted { row_index: usize, row: Row },
}

/// One game of Wordle
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    cursor: Cursor,
    hints: KeyboardHints,
    goal: Word,
    outcome: Outcome,
}

impl Game {
    /// Start a game against `goal`
    #[must_use]
    pub fn new(goal: Word) -> Self {
        Self {
            board: Board::new(),
            cursor: Cursor::default(),
            hints: KeyboardHints::new(),
            goal,
            outcome: Outcome::InProgress,
        }
    }

    /// Current board state
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Where the next accepted letter lands
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Best-ever-seen state per keyboard letter
    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    /// The hidden goal word
    #[inline]
    #[must_use]
    pub const fn goal(&self) -> &Word {
        &self.goal
    }

    /// Current game outcome
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Place a letter at the cursor and advance
    ///
    /// No-op once the game is over, when the row is already full, or for
    /// anything that is not an ASCII letter. Input is uppercased.
    pub fn press_letter(&mut self, letter: char) {
        if self.outcome.is_over() || self.cursor.at_row_end() || !letter.is_ascii_alphabetic() {
            return;
        }

        let letter = letter.to_ascii_uppercase();
        self.board = self
            .board
            .place_letter(self.cursor.row(), self.cursor.position(), letter);
        self.cursor = self.cursor.advanced();
    }

    /// Erase the letter before the cursor and retreat
    ///
    /// No-op once the game is over or when the row is empty.
    pub fn press_backspace(&mut self) {
        if self.outcome.is_over() || self.cursor.at_row_start() {
            return;
        }

        self.cursor = self.cursor.retreated();
        self.board = self
            .board
            .clear_letter(self.cursor.row(), self.cursor.position());
    }

    /// Submit the current row
    ///
    /// With a full row: evaluate it, write the evaluated cells back to the
    /// board, fold the results into the keyboard hints, then decide the
    /// outcome. The cursor only advances to the next row while the game is
    /// still in progress. A win on the last row counts as a win.
    pub fn press_enter(&mut self) -> EnterOutcome {
        if self.outcome.is_over() {
            return EnterOutcome::Ignored;
        }

        if !self.cursor.at_row_end() {
            return EnterOutcome::Incomplete;
        }

        let row_index = self.cursor.row();
        let row = evaluate_row(self.board.row(row_index), &self.goal);
        self.board = self.board.with_row(row_index, row);
        self.hints.observe_row(&row);

        if row.iter().all(|c| c.state() == LetterState::Correct) {
            self.outcome = Outcome::Won;
        } else if row_index == NUM_ROWS - 1 {
            self.outcome = Outcome::Lost;
        } else {
            self.cursor = self.cursor.next_row();
        }

        EnterOutcome::Submitted { row_index, row }
    }
}
