//! Goal-word supply
//!
//! Provides the embedded fallback word list compiled into the binary, a
//! loader for custom lists, and the injectable source seam the game draws
//! its goal word through.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{EmbeddedSource, RandomWordApi, SourceError, WordSource, resolve_goal_word};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        use crate::core::WORD_LENGTH;

        for &word in WORDS {
            assert_eq!(word.len(), WORD_LENGTH, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_is_not_empty() {
        assert!(WORDS_COUNT > 0);
    }
}
