//! One-shot guess scoring
//!
//! Evaluates a single guess against a goal word from the command line,
//! without starting a game.

use crate::core::{LetterState, WORD_LENGTH, Word, WordError, evaluate_guess};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub goal: Word,
    pub states: [LetterState; WORD_LENGTH],
}

/// Score `guess` against `goal`
///
/// # Errors
/// Returns `WordError` if either word is not a valid five-letter word.
pub fn score_guess(guess: &str, goal: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let goal = Word::new(goal)?;
    let states = evaluate_guess(&guess, &goal);

    Ok(ScoreResult {
        guess,
        goal,
        states,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterState::{Absent, Correct, Present};

    #[test]
    fn score_valid_pair() {
        let result = score_guess("paper", "apple").unwrap();
        assert_eq!(result.guess.text(), "PAPER");
        assert_eq!(result.goal.text(), "APPLE");
        assert_eq!(
            result.states,
            [Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn score_rejects_invalid_guess() {
        assert!(score_guess("toolong", "apple").is_err());
        assert!(score_guess("ap1le", "apple").is_err());
    }

    #[test]
    fn score_rejects_invalid_goal() {
        assert!(score_guess("apple", "hi").is_err());
    }
}
