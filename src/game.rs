use crate::score::ScoreBoard;

/// Wrong guesses allowed before the round is lost.
pub const MAX_WRONG: u8 = 6;

/// One guess as entered by the player. An empty input line becomes `Blank`,
/// which can never match a letter but still costs a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Blank,
}

/// Result of applying one guess to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The round already ended; nothing was mutated.
    AlreadyOver,
    /// The letter filled at least one new position.
    Correct { newly_revealed: usize },
    /// The letter was correct but every matching position was already filled.
    CorrectRepeat,
    /// Wrong guess; `stage` is the new reveal stage (1..=MAX_WRONG - 1).
    Incorrect { stage: u8 },
    Won,
    Lost,
}

/// Body parts in the order they are revealed, one per wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Torso,
    ArmLeft,
    ArmRight,
    LegLeft,
    LegRight,
}

impl BodyPart {
    pub const ALL: [BodyPart; MAX_WRONG as usize] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::ArmLeft,
        BodyPart::ArmRight,
        BodyPart::LegLeft,
        BodyPart::LegRight,
    ];

    /// A part is drawn once the reveal stage has reached it. The reveal is
    /// cumulative: stage `n` shows the first `n` parts, and parts are never
    /// taken back within a round.
    pub fn is_visible(self, stage: u8) -> bool {
        self.reveal_order() < stage
    }

    fn reveal_order(self) -> u8 {
        match self {
            BodyPart::Head => 0,
            BodyPart::Torso => 1,
            BodyPart::ArmLeft => 2,
            BodyPart::ArmRight => 3,
            BodyPart::LegLeft => 4,
            BodyPart::LegRight => 5,
        }
    }
}

/// Mutable state of one round. Created fresh per round and only ever mutated
/// through [`GameEngine::apply_guess`].
#[derive(Debug, Clone)]
pub struct GuessState {
    secret: String,
    revealed: Vec<bool>,
    wrong_guesses: Vec<char>,
    wrong_count: u8,
}

impl GuessState {
    pub fn new(secret: String) -> Self {
        let len = secret.chars().count();
        Self {
            secret,
            revealed: vec![false; len],
            wrong_guesses: Vec::with_capacity(MAX_WRONG as usize),
            wrong_count: 0,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// One flag per letter position; `true` once that position was guessed.
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    /// Distinct wrong letters in the order they were guessed. Holds only
    /// letters absent from the secret, each at most once; blank guesses are
    /// counted but not stored.
    pub fn wrong_guesses(&self) -> &[char] {
        &self.wrong_guesses
    }

    pub fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    /// Current reveal stage, 0 (nothing drawn) through `MAX_WRONG`.
    pub fn reveal_stage(&self) -> u8 {
        self.wrong_count
    }

    pub fn is_won(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    pub fn is_lost(&self) -> bool {
        self.wrong_count == MAX_WRONG && !self.is_won()
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Marks every unrevealed position holding `letter` and returns how many
    /// positions that filled.
    fn reveal(&mut self, letter: char) -> usize {
        let mut newly = 0;
        for (i, c) in self.secret.chars().enumerate() {
            if c == letter && !self.revealed[i] {
                self.revealed[i] = true;
                newly += 1;
            }
        }
        newly
    }

    fn record_wrong(&mut self, letter: char) {
        if !self.wrong_guesses.contains(&letter)
            && self.wrong_guesses.len() < MAX_WRONG as usize
        {
            self.wrong_guesses.push(letter);
        }
    }
}

/// Applies guesses to a [`GuessState`] and reports win/loss to the scoreboard.
#[derive(Debug, Default)]
pub struct GameEngine;

impl GameEngine {
    pub fn apply_guess(
        &self,
        state: &mut GuessState,
        guess: Guess,
        score: &mut ScoreBoard,
    ) -> GuessOutcome {
        if state.is_over() {
            return GuessOutcome::AlreadyOver;
        }

        match guess {
            Guess::Letter(c) => {
                let letter = c.to_ascii_lowercase();
                if state.secret.contains(letter) {
                    let newly_revealed = state.reveal(letter);
                    if newly_revealed == 0 {
                        return GuessOutcome::CorrectRepeat;
                    }
                    if state.is_won() {
                        score.add_win();
                        return GuessOutcome::Won;
                    }
                    GuessOutcome::Correct { newly_revealed }
                } else {
                    self.miss(state, Some(letter), score)
                }
            }
            Guess::Blank => self.miss(state, None, score),
        }
    }

    fn miss(
        &self,
        state: &mut GuessState,
        letter: Option<char>,
        score: &mut ScoreBoard,
    ) -> GuessOutcome {
        if let Some(c) = letter {
            state.record_wrong(c);
        }
        // A repeated wrong letter (or a blank) still costs a turn.
        state.wrong_count += 1;
        if state.wrong_count == MAX_WRONG {
            score.add_loss();
            GuessOutcome::Lost
        } else {
            GuessOutcome::Incorrect {
                stage: state.wrong_count,
            }
        }
    }
}
