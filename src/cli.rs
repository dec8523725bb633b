use clap::Parser;

use crate::game::{BodyPart, Guess, GuessOutcome, GuessState, MAX_WRONG};
use crate::score::ScoreBoard;
use crate::session::{GameInterface, UserAction};
use std::io::BufRead;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Run the full-screen terminal interface instead of the prompt loop
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// One line per wrong guess, indexed by the new reveal stage.
pub(crate) const NOPES: [&str; MAX_WRONG as usize] = [
    "Nope! Here's your head!",
    "Nope! Here's your body!",
    "Nope! Here's your arm!",
    "Nope! Here's your other arm!",
    "Nope! Here's your leg! One more chance!",
    "Last leg! Game over!",
];

/// The gallows with the body parts visible at the given reveal stage.
pub fn figure_lines(stage: u8) -> Vec<String> {
    let part = |p: BodyPart, glyph: &'static str| {
        if p.is_visible(stage) { glyph } else { " " }
    };
    let head = part(BodyPart::Head, "O");
    let torso = part(BodyPart::Torso, "|");
    let arm_l = part(BodyPart::ArmLeft, "/");
    let arm_r = part(BodyPart::ArmRight, "\\");
    let leg_l = part(BodyPart::LegLeft, "/");
    let leg_r = part(BodyPart::LegRight, "\\");

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {head}   |"),
        format!(" {arm_l}{torso}{arm_r}  |"),
        format!(" {leg_l} {leg_r}  |"),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// The secret word with unguessed positions masked by dashes. A lost round
/// discloses the whole word.
pub fn word_line(state: &GuessState) -> String {
    let disclose = state.is_lost();
    state
        .secret()
        .chars()
        .zip(state.revealed().iter())
        .map(|(c, &revealed)| if revealed || disclose { c } else { '_' })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Console implementation of the game interface: prompts on stdout, guesses
/// read line-by-line from any `BufRead` so tests can script a session.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// First character of the next line. `Some(None)` is an empty line;
    /// `None` is end of input.
    fn read_first_char(&mut self) -> Option<Option<char>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let line = line.trim_end_matches(['\r', '\n']);
                Some(line.chars().next())
            }
        }
    }

    fn answered(&mut self, expected: char) -> bool {
        matches!(
            self.read_first_char(),
            Some(Some(c)) if c.eq_ignore_ascii_case(&expected)
        )
    }
}

fn print_scoreboard(score: &ScoreBoard) {
    println!("W: {}  L: {}", score.wins(), score.losses());
}

fn print_wrong_guesses(wrong: &[char]) {
    let listed: Vec<String> = wrong.iter().map(|c| c.to_string()).collect();
    println!("Incorrect guesses: {}", listed.join(" "));
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn show_start_screen(&mut self, score: &ScoreBoard) {
        println!("Welcome to Hangman");
        println!("Rules of the game:");
        println!("Guess the secret word, one letter at a time.");
        println!("Bad guesses will add body parts to the gallows!");
        println!("Words consist of 5-10 lowercase letters from a-z.");
        print_scoreboard(score);
    }

    fn confirm_start(&mut self) -> bool {
        println!("Do you want to play a game? ('p' to play, 'q' to quit)");
        self.answered('p')
    }

    fn show_state(&mut self, state: &GuessState, score: &ScoreBoard) {
        println!();
        for line in figure_lines(state.reveal_stage()) {
            println!("{line}");
        }
        println!();
        println!("{}", word_line(state));
        print_wrong_guesses(state.wrong_guesses());
        print_scoreboard(score);
    }

    fn read_guess(&mut self) -> UserAction {
        println!("Pick a letter (a-z):");
        match self.read_first_char() {
            None => UserAction::Quit,
            Some(None) => UserAction::Guess(Guess::Blank),
            Some(Some(c)) => UserAction::Guess(Guess::Letter(c)),
        }
    }

    fn show_outcome(&mut self, guess: Guess, outcome: GuessOutcome, state: &GuessState) {
        match outcome {
            GuessOutcome::AlreadyOver => {}
            // One message per guess, however many positions it filled.
            GuessOutcome::Correct { .. } | GuessOutcome::CorrectRepeat => {
                if let Guess::Letter(c) = guess {
                    println!("Correctly guessed \"{}\"!", c.to_ascii_lowercase());
                }
            }
            GuessOutcome::Won => {
                if let Guess::Letter(c) = guess {
                    println!("Correctly guessed \"{}\"!", c.to_ascii_lowercase());
                }
                println!("You win!");
            }
            GuessOutcome::Incorrect { stage } => {
                println!("{}", NOPES[stage as usize - 1]);
            }
            GuessOutcome::Lost => {
                println!("{}", NOPES[MAX_WRONG as usize - 1]);
                println!("The word was \"{}\".", state.secret());
            }
        }
    }

    fn confirm_replay(&mut self) -> bool {
        println!("Play again? (y/n)");
        self.answered('y')
    }

    fn show_goodbye(&mut self) {
        println!("OK. Goodbye!");
    }
}
