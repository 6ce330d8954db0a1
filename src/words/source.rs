//! Goal-word sources
//!
//! The goal word is an injected dependency: the game controller never knows
//! where it came from. A source hands out batches of candidate words; the
//! remote service gets exactly one attempt per game, and any failure falls
//! back silently to the embedded list.

use super::loader::words_from_slice;
use crate::core::{WORD_LENGTH, Word, WordError};
use rand::seq::IndexedRandom;
use std::fmt;
use std::time::Duration;

/// Error type for word sources
#[derive(Debug)]
pub enum SourceError {
    /// The HTTP request failed or returned a bad status
    Http(reqwest::Error),
    /// The service answered with a word the game cannot use
    Invalid(WordError),
    /// The source had no words to offer
    Empty,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "word service request failed: {err}"),
            Self::Invalid(err) => write!(f, "word service returned an unusable word: {err}"),
            Self::Empty => write!(f, "word source has no words"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Invalid(err) => Some(err),
            Self::Empty => None,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

/// A supplier of candidate goal words
pub trait WordSource {
    /// Fetch `count` candidate words of `length` letters
    ///
    /// # Errors
    /// Returns `SourceError` if the source cannot produce any words.
    fn fetch_words(&self, count: usize, length: usize) -> Result<Vec<Word>, SourceError>;
}

/// Uniform random choice from a local word list
///
/// Holds the embedded list by default; a custom list loaded from a file can
/// be swapped in. The list is guaranteed non-empty at construction, so
/// drawing a single word cannot fail.
pub struct EmbeddedSource {
    words: Vec<Word>,
}

impl EmbeddedSource {
    /// Source over the embedded word list
    #[must_use]
    pub fn new() -> Self {
        let words = words_from_slice(super::WORDS);
        debug_assert!(!words.is_empty(), "embedded word list is never empty");
        Self { words }
    }

    /// Source over a custom list
    ///
    /// # Errors
    /// Returns `SourceError::Empty` if the list holds no words.
    pub fn from_words(words: Vec<Word>) -> Result<Self, SourceError> {
        if words.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(Self { words })
    }

    /// Draw one word uniformly at random
    ///
    /// # Panics
    /// Will not panic - the constructors guarantee a non-empty list.
    #[must_use]
    pub fn random_word(&self) -> Word {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .expect("source list is never empty")
    }
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for EmbeddedSource {
    fn fetch_words(&self, count: usize, length: usize) -> Result<Vec<Word>, SourceError> {
        let pool: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| w.text().len() == length)
            .collect();

        if pool.is_empty() {
            return Err(SourceError::Empty);
        }

        Ok(pool
            .choose_multiple(&mut rand::rng(), count)
            .map(|&w| w.clone())
            .collect())
    }
}

/// Single-attempt client for the remote random-word service
///
/// Mirrors the service's query interface: `GET
/// <base>/word?number=N&length=L` answering a JSON array of strings. No
/// retries; the request carries its own timeout so a dead service cannot
/// stall game startup for long.
pub struct RandomWordApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RandomWordApi {
    /// Default service endpoint
    pub const DEFAULT_BASE_URL: &'static str = "https://random-word-api.herokuapp.com";

    /// Request timeout for the single fetch attempt
    pub const TIMEOUT: Duration = Duration::from_secs(5);

    /// Client against the default endpoint
    ///
    /// # Errors
    /// Returns `SourceError::Http` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, SourceError> {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    /// Client against a custom endpoint
    ///
    /// # Errors
    /// Returns `SourceError::Http` if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl WordSource for RandomWordApi {
    fn fetch_words(&self, count: usize, length: usize) -> Result<Vec<Word>, SourceError> {
        let url = format!("{}/word?number={count}&length={length}", self.base_url);

        let raw: Vec<String> = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;

        let words = raw
            .iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(SourceError::Invalid)?;

        if words.is_empty() {
            return Err(SourceError::Empty);
        }

        Ok(words)
    }
}

/// Resolve the goal word for one game
///
/// The primary source, when given, gets a single attempt; an error or empty
/// batch is logged and swallowed, never surfaced to the player, and the
/// local source supplies the word instead. Called before the game starts,
/// so the goal word is fixed before the first submission.
pub fn resolve_goal_word(primary: Option<&dyn WordSource>, fallback: &EmbeddedSource) -> Word {
    if let Some(source) = primary {
        match source.fetch_words(1, WORD_LENGTH) {
            Ok(mut words) if !words.is_empty() => return words.remove(0),
            Ok(_) => tracing::warn!("word service returned an empty batch, using the local list"),
            Err(err) => {
                tracing::warn!(error = %err, "goal word fetch failed, using the local list");
            }
        }
    }

    fallback.random_word()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Word);

    impl WordSource for FixedSource {
        fn fetch_words(&self, count: usize, _length: usize) -> Result<Vec<Word>, SourceError> {
            Ok(vec![self.0.clone(); count])
        }
    }

    struct FailingSource;

    impl WordSource for FailingSource {
        fn fetch_words(&self, _count: usize, _length: usize) -> Result<Vec<Word>, SourceError> {
            Err(SourceError::Empty)
        }
    }

    struct EmptySource;

    impl WordSource for EmptySource {
        fn fetch_words(&self, _count: usize, _length: usize) -> Result<Vec<Word>, SourceError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn embedded_source_draws_valid_words() {
        let source = EmbeddedSource::new();
        let words = source.fetch_words(3, WORD_LENGTH).unwrap();
        assert_eq!(words.len(), 3);
        for word in &words {
            assert_eq!(word.text().len(), WORD_LENGTH);
        }
    }

    #[test]
    fn embedded_source_random_word_is_from_the_list() {
        let words = vec![Word::new("apple").unwrap()];
        let source = EmbeddedSource::from_words(words).unwrap();
        assert_eq!(source.random_word().text(), "APPLE");
    }

    #[test]
    fn embedded_source_rejects_empty_list() {
        assert!(matches!(
            EmbeddedSource::from_words(Vec::new()),
            Err(SourceError::Empty)
        ));
    }

    #[test]
    fn embedded_source_rejects_unavailable_length() {
        let source = EmbeddedSource::new();
        assert!(matches!(
            source.fetch_words(1, 7),
            Err(SourceError::Empty)
        ));
    }

    #[test]
    fn resolve_prefers_the_primary_source() {
        let primary = FixedSource(Word::new("tower").unwrap());
        let fallback = EmbeddedSource::from_words(vec![Word::new("apple").unwrap()]).unwrap();

        let goal = resolve_goal_word(Some(&primary), &fallback);
        assert_eq!(goal.text(), "TOWER");
    }

    #[test]
    fn resolve_falls_back_on_error() {
        let fallback = EmbeddedSource::from_words(vec![Word::new("apple").unwrap()]).unwrap();

        let goal = resolve_goal_word(Some(&FailingSource), &fallback);
        assert_eq!(goal.text(), "APPLE");
    }

    #[test]
    fn resolve_falls_back_on_empty_batch() {
        let fallback = EmbeddedSource::from_words(vec![Word::new("apple").unwrap()]).unwrap();

        let goal = resolve_goal_word(Some(&EmptySource), &fallback);
        assert_eq!(goal.text(), "APPLE");
    }

    #[test]
    fn resolve_without_primary_uses_the_local_list() {
        let fallback = EmbeddedSource::from_words(vec![Word::new("berry").unwrap()]).unwrap();

        let goal = resolve_goal_word(None, &fallback);
        assert_eq!(goal.text(), "BERRY");
    }
}
