//! Row evaluation
//!
//! Classifies every position of a submitted row against the goal word. A
//! letter is credited as Correct or Present at most as many times as it
//! occurs in the goal: the evaluator consumes a goal-letter multiset across
//! three ordered passes, so duplicate letters in the guess never earn more
//! credit than the goal can pay out.

use super::{Cell, LetterState, Row, WORD_LENGTH, Word};

/// Evaluate a submitted row against the goal word
///
/// Pure function: the input row is left untouched and identical inputs always
/// produce identical output. The row is expected to be fully populated; an
/// empty cell matches nothing and comes back Absent.
///
/// # Algorithm
/// 1. Count each goal letter into a remaining-credit multiset
/// 2. First pass: exact position matches become Correct, consuming credit.
///    This pass runs to completion before any other pass reads the multiset,
///    so exact matches always outrank present-elsewhere matches for the same
///    letter
/// 3. Second pass: left to right, letters with credit remaining become
///    Present, consuming credit. Cells already Correct keep their mark
/// 4. Third pass: everything still undecided is Absent
///
/// # Examples
/// ```
/// use wordle_game::core::{Cell, LetterState, Word, evaluate_row};
///
/// let goal = Word::new("apple").unwrap();
/// let row = std::array::from_fn(|i| Cell::filled(b"PAPER"[i] as char, 0, i));
/// let evaluated = evaluate_row(&row, &goal);
///
/// // Goal holds two P's: index 2 matches exactly, index 0 takes the spare
/// assert_eq!(evaluated[0].state(), LetterState::Present);
/// assert_eq!(evaluated[2].state(), LetterState::Correct);
/// assert_eq!(evaluated[4].state(), LetterState::Absent);
/// ```
#[must_use]
pub fn evaluate_row(row: &Row, goal: &Word) -> Row {
    let mut result = *row;
    let mut remaining = goal.char_counts();

    // First pass: exact matches consume their letter's credit before any
    // present-elsewhere credit is handed out.
    // Allow: index needed to compare result[i] against goal position i
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i].letter() == Some(goal.char_at(i)) {
            result[i] = result[i].with_state(LetterState::Correct);
            if let Some(count) = remaining.get_mut(&goal.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: remaining credit goes to misplaced letters, earlier
    // positions first. Cells already Correct are skipped.
    for cell in &mut result {
        if cell.state() == LetterState::Correct {
            continue;
        }
        if let Some(ch) = cell.letter()
            && let Some(count) = remaining.get_mut(&ch)
            && *count > 0
        {
            *cell = cell.with_state(LetterState::Present);
            *count -= 1;
        }
    }

    // Third pass: anything undecided is Absent.
    for cell in &mut result {
        if cell.state() == LetterState::Default {
            *cell = cell.with_state(LetterState::Absent);
        }
    }

    result
}

/// Evaluate a complete guess word against the goal word
///
/// Convenience wrapper over [`evaluate_row`] for callers that hold two words
/// rather than a board row.
#[must_use]
pub fn evaluate_guess(guess: &Word, goal: &Word) -> [LetterState; WORD_LENGTH] {
    let row: Row = std::array::from_fn(|i| Cell::filled(guess.char_at(i), 0, i));
    evaluate_row(&row, goal).map(|cell| cell.state())
}
