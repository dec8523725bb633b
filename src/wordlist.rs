use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rand::Rng;

/// Default dictionary shipped with the binary. Lowercase words between 5 and
/// 10 letters, one per line.
pub const EMBEDDED_WORDLIST: &str = include_str!("resources/wordlist.txt");

/// Built-in list used when a word list cannot be read. The content is fixed
/// (selection from it is still random) and spans the 5-10 letter range.
pub const FALLBACK_WORDS: &[&str] = &[
    "apple",
    "banana",
    "cherry",
    "diamond",
    "elephant",
    "firework",
    "grapevine",
    "hurricane",
    "journey",
    "kilometer",
    "labyrinth",
    "watermelon",
];

pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(words)
}

/// The word source holds zero words, so no word can be selected. Not expected
/// in practice: any load failure substitutes the non-empty fallback list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySourceError;

impl fmt::Display for EmptySourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word source contains no words")
    }
}

impl Error for EmptySourceError {}

/// A loaded word list plus uniform random selection from it.
///
/// Note the words are not validated against the documented 5-10 lowercase
/// letter range; that is an expectation of the shipped lists, not a runtime
/// check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Loads `path`, substituting the fallback list on any open or read
    /// failure, or when the file yields no words. The failure is logged but
    /// never surfaced to the player.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        match load_words_from_file(&path) {
            Ok(words) if !words.is_empty() => Self { words },
            Ok(_) => {
                log::warn!(
                    "word list '{}' contains no words, using the built-in list",
                    path.as_ref().display()
                );
                Self::fallback()
            }
            Err(e) => {
                log::warn!(
                    "failed to read word list '{}': {e}, using the built-in list",
                    path.as_ref().display()
                );
                Self::fallback()
            }
        }
    }

    /// The dictionary compiled into the binary.
    pub fn embedded() -> Self {
        let words = load_words_from_str(EMBEDDED_WORDLIST);
        if words.is_empty() {
            return Self::fallback();
        }
        Self { words }
    }

    pub fn fallback() -> Self {
        Self {
            words: FALLBACK_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draws one word uniformly at random.
    pub fn select_word(&self) -> Result<String, EmptySourceError> {
        if self.words.is_empty() {
            return Err(EmptySourceError);
        }
        let i = rand::thread_rng().gen_range(0..self.words.len());
        Ok(self.words[i].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str_lowercases_and_trims() {
        let words = load_words_from_str("  CRANE \nslate\n\nPiano\n");
        assert_eq!(words, vec!["crane", "slate", "piano"]);
    }

    #[test]
    fn test_load_from_str_keeps_lines_unvalidated() {
        // Length and charset are documented expectations of the shipped
        // lists, not load-time checks.
        let words = load_words_from_str("ab\nc4ne\nsupercalifragilistic\n");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let result = load_words_from_file("/nonexistent/wordlist.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_falls_back_on_missing_file() {
        let source = WordSource::from_file("/nonexistent/wordlist.txt");
        assert_eq!(source, WordSource::fallback());
    }

    #[test]
    fn test_fallback_list_is_big_enough_and_in_range() {
        let source = WordSource::fallback();
        assert!(source.len() >= 10);
        assert!(FALLBACK_WORDS.iter().all(|w| (5..=10).contains(&w.len())));
        assert!(
            FALLBACK_WORDS
                .iter()
                .all(|w| w.chars().all(|c| c.is_ascii_lowercase()))
        );
    }

    #[test]
    fn test_select_word_draws_from_the_source() {
        let source = WordSource::fallback();
        for _ in 0..20 {
            let word = source.select_word().unwrap();
            assert!(FALLBACK_WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn test_select_word_from_empty_source_fails() {
        let source = WordSource::from_words(Vec::new());
        assert_eq!(source.select_word(), Err(EmptySourceError));
    }

    #[test]
    fn test_embedded_wordlist_loads() {
        let source = WordSource::embedded();
        assert!(!source.is_empty());
        let word = source.select_word().unwrap();
        assert!((5..=10).contains(&word.len()));
    }

    #[test]
    fn test_single_word_source_is_deterministic() {
        let source = WordSource::from_words(vec!["banana".to_string()]);
        assert_eq!(source.select_word().unwrap(), "banana");
    }
}
