use crate::game::{GameEngine, Guess, GuessOutcome, GuessState};
use crate::score::ScoreBoard;
use crate::wordlist::{EmptySourceError, WordSource};

/// What the player did at the guess prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Guess(Guess),
    Quit,
}

/// Seam between the session driver and a presenter (console or TUI). The
/// presenter reads game state through these calls but never mutates it.
pub trait GameInterface {
    fn show_start_screen(&mut self, score: &ScoreBoard);
    /// Returns `true` if the player chose to play.
    fn confirm_start(&mut self) -> bool;
    fn show_state(&mut self, state: &GuessState, score: &ScoreBoard);
    fn read_guess(&mut self) -> UserAction;
    fn show_outcome(&mut self, guess: Guess, outcome: GuessOutcome, state: &GuessState);
    /// Returns `true` if the player wants another round.
    fn confirm_replay(&mut self) -> bool;
    fn show_goodbye(&mut self);
}

/// Runs rounds until the player declines to continue. Each round gets a fresh
/// [`GuessState`]; the scoreboard lives for the whole session and is returned
/// when it ends.
pub fn run_session<I: GameInterface>(
    source: &WordSource,
    interface: &mut I,
) -> Result<ScoreBoard, EmptySourceError> {
    let engine = GameEngine;
    let mut score = ScoreBoard::default();

    interface.show_start_screen(&score);
    if !interface.confirm_start() {
        interface.show_goodbye();
        return Ok(score);
    }

    loop {
        let secret = source.select_word()?;
        log::debug!("round started with a {}-letter word", secret.len());
        let mut state = GuessState::new(secret);
        interface.show_state(&state, &score);

        while !state.is_over() {
            let guess = match interface.read_guess() {
                UserAction::Quit => {
                    interface.show_goodbye();
                    return Ok(score);
                }
                UserAction::Guess(guess) => guess,
            };
            let outcome = engine.apply_guess(&mut state, guess, &mut score);
            interface.show_state(&state, &score);
            interface.show_outcome(guess, outcome, &state);
        }
        log::debug!(
            "round over: won={}, {} wins / {} losses",
            state.is_won(),
            score.wins(),
            score.losses()
        );

        if !interface.confirm_replay() {
            interface.show_goodbye();
            return Ok(score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted presenter: answers prompts from queues and records every
    /// outcome it is shown.
    struct ScriptedInterface {
        play: bool,
        guesses: Vec<UserAction>,
        replays: Vec<bool>,
        outcomes: Vec<GuessOutcome>,
        goodbyes: usize,
    }

    impl ScriptedInterface {
        fn new(play: bool, guesses: &[UserAction], replays: &[bool]) -> Self {
            Self {
                play,
                guesses: guesses.to_vec(),
                replays: replays.to_vec(),
                outcomes: Vec::new(),
                goodbyes: 0,
            }
        }

        fn letters(input: &str) -> Vec<UserAction> {
            input
                .chars()
                .map(|c| UserAction::Guess(Guess::Letter(c)))
                .collect()
        }
    }

    impl GameInterface for ScriptedInterface {
        fn show_start_screen(&mut self, _score: &ScoreBoard) {}

        fn confirm_start(&mut self) -> bool {
            self.play
        }

        fn show_state(&mut self, _state: &GuessState, _score: &ScoreBoard) {}

        fn read_guess(&mut self) -> UserAction {
            if self.guesses.is_empty() {
                UserAction::Quit
            } else {
                self.guesses.remove(0)
            }
        }

        fn show_outcome(&mut self, _guess: Guess, outcome: GuessOutcome, _state: &GuessState) {
            self.outcomes.push(outcome);
        }

        fn confirm_replay(&mut self) -> bool {
            if self.replays.is_empty() {
                false
            } else {
                self.replays.remove(0)
            }
        }

        fn show_goodbye(&mut self) {
            self.goodbyes += 1;
        }
    }

    fn single_word_source(word: &str) -> WordSource {
        WordSource::from_words(vec![word.to_string()])
    }

    #[test]
    fn test_declining_to_start_plays_no_round() {
        let source = single_word_source("cat");
        let mut interface = ScriptedInterface::new(false, &[], &[]);

        let score = run_session(&source, &mut interface).unwrap();
        assert_eq!(score.wins(), 0);
        assert_eq!(score.losses(), 0);
        assert!(interface.outcomes.is_empty());
        assert_eq!(interface.goodbyes, 1);
    }

    #[test]
    fn test_winning_round_records_one_win() {
        let source = single_word_source("cat");
        let mut interface =
            ScriptedInterface::new(true, &ScriptedInterface::letters("cat"), &[false]);

        let score = run_session(&source, &mut interface).unwrap();
        assert_eq!(score.wins(), 1);
        assert_eq!(score.losses(), 0);
        assert_eq!(
            interface.outcomes,
            vec![
                GuessOutcome::Correct { newly_revealed: 1 },
                GuessOutcome::Correct { newly_revealed: 1 },
                GuessOutcome::Won,
            ]
        );
    }

    #[test]
    fn test_losing_round_records_one_loss() {
        let source = single_word_source("dog");
        let mut interface =
            ScriptedInterface::new(true, &ScriptedInterface::letters("xyzqwv"), &[false]);

        let score = run_session(&source, &mut interface).unwrap();
        assert_eq!(score.wins(), 0);
        assert_eq!(score.losses(), 1);
        assert_eq!(interface.outcomes.last(), Some(&GuessOutcome::Lost));
    }

    #[test]
    fn test_scoreboard_persists_across_replays() {
        let source = single_word_source("cat");
        let mut guesses = ScriptedInterface::letters("cat");
        guesses.extend(ScriptedInterface::letters("xyzqwv"));
        let mut interface = ScriptedInterface::new(true, &guesses, &[true, false]);

        let score = run_session(&source, &mut interface).unwrap();
        assert_eq!(score.wins(), 1);
        assert_eq!(score.losses(), 1);
        assert_eq!(interface.goodbyes, 1);
    }

    #[test]
    fn test_quit_mid_round_keeps_score() {
        let source = single_word_source("cat");
        let guesses = vec![
            UserAction::Guess(Guess::Letter('c')),
            UserAction::Quit,
        ];
        let mut interface = ScriptedInterface::new(true, &guesses, &[]);

        let score = run_session(&source, &mut interface).unwrap();
        assert_eq!(score.wins(), 0);
        assert_eq!(score.losses(), 0);
        assert_eq!(interface.goodbyes, 1);
    }

    #[test]
    fn test_empty_source_aborts_word_selection() {
        let source = WordSource::from_words(Vec::new());
        let mut interface = ScriptedInterface::new(true, &[], &[]);

        assert_eq!(run_session(&source, &mut interface), Err(EmptySourceError));
    }
}
