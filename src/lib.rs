// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod game;
pub mod score;
pub mod session;
pub mod tui;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use game::{BodyPart, GameEngine, Guess, GuessOutcome, GuessState, MAX_WRONG};
pub use score::ScoreBoard;
pub use session::{GameInterface, UserAction, run_session};
pub use wordlist::{
    EmptySourceError, FALLBACK_WORDS, WordSource, load_words_from_file, load_words_from_str,
};
