//! Full-screen terminal interface for Hangman, built on Ratatui.
//!
//! Plays the role of the drawing canvas: gallows and figure in one panel,
//! the masked word underneath, the incorrect-guess slots and session
//! scoreboard beside it. Guesses are single keypresses; Enter on its own is
//! a blank guess (which still costs a turn), Esc quits.
//!
//! Screen flow: `Start` -> `Playing` -> `RoundOver` -> back to `Playing`
//! when the player asks for another round.

use crate::cli::{NOPES, figure_lines, word_line};
use crate::game::{Guess, GuessOutcome, GuessState, MAX_WRONG};
use crate::score::ScoreBoard;
use crate::session::{GameInterface, UserAction};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const WORD_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
const WIN_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSS_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Yellow);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Start,
    Playing,
    RoundWon,
    RoundLost,
}

/// Context for rendering the UI - groups related parameters to avoid too many
/// function arguments.
struct RenderContext<'a> {
    screen: Screen,
    figure: &'a [String],
    word_row: &'a str,
    wrong_guesses: &'a [char],
    wins: u32,
    losses: u32,
    message: &'a str,
    status: &'a str,
}

/// Terminal presenter implementing the game interface.
///
/// Holds a display snapshot of the current round; the game state itself is
/// owned by the session and never mutated from here.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    screen: Screen,
    figure: Vec<String>,
    word_row: String,
    wrong_guesses: Vec<char>,
    wins: u32,
    losses: u32,
    message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        log::debug!("terminal set up: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            screen: Screen::Start,
            figure: figure_lines(0),
            word_row: String::new(),
            wrong_guesses: Vec::new(),
            wins: 0,
            losses: 0,
            message: String::new(),
            status: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            screen: self.screen,
            figure: &self.figure,
            word_row: &self.word_row,
            wrong_guesses: &self.wrong_guesses,
            wins: self.wins,
            losses: self.losses,
            message: &self.message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            log::debug!("draw error: {e}");
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(9),    // Gallows + info panels
                Constraint::Length(3), // Word row
                Constraint::Length(3), // Scoreboard + status
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_main(f, chunks[1], ctx);
        Self::render_word(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx);
        Self::render_instructions(f, chunks[4], ctx.screen);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_main(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(20)])
            .split(area);

        Self::render_gallows(f, halves[0], ctx.figure);
        Self::render_info(f, halves[1], ctx);
    }

    fn render_gallows(f: &mut Frame, area: Rect, figure: &[String]) {
        let lines: Vec<Line> = figure.iter().map(|row| Line::from(row.as_str())).collect();
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Gallows").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if ctx.screen == Screen::Start {
            lines.push(Line::from(Span::styled("Rules of the game:", HEADER_STYLE)));
            lines.push(Line::from("Guess the secret word, one letter at a time."));
            lines.push(Line::from("Bad guesses will add body parts to the gallows!"));
            lines.push(Line::from("Words consist of 5-10 lowercase letters from a-z."));
        } else {
            // One slot per allowed wrong guess, filled in guess order.
            let mut spans = vec![Span::raw("  ")];
            for i in 0..MAX_WRONG as usize {
                let slot = ctx
                    .wrong_guesses
                    .get(i)
                    .map_or('_', |c| *c);
                spans.push(Span::styled(format!(" {slot} "), MESSAGE_STYLE));
            }
            lines.push(Line::from(Span::styled("Incorrect guesses:", HEADER_STYLE)));
            lines.push(Line::from(spans));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(""));
            let style = match ctx.screen {
                Screen::RoundWon => WIN_STYLE,
                Screen::RoundLost => LOSS_STYLE,
                _ => MESSAGE_STYLE,
            };
            lines.push(Line::from(Span::styled(ctx.message, style)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Round").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_word(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let text = if ctx.screen == Screen::Start {
            String::new()
        } else {
            format!("  {}", ctx.word_row)
        };
        let paragraph = Paragraph::new(text)
            .style(WORD_STYLE)
            .block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(10)])
            .split(area);

        let scoreboard = Paragraph::new(format!("W: {}  L: {}", ctx.wins, ctx.losses))
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Score"));
        f.render_widget(scoreboard, halves[0]);

        let status_text = if ctx.status.is_empty() { "Ready" } else { ctx.status };
        let status = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status, halves[1]);
    }

    fn render_instructions(f: &mut Frame, area: Rect, screen: Screen) {
        let text = match screen {
            Screen::Start => "P: Play | Q / ESC: Quit",
            Screen::Playing => "Type a letter to guess | ENTER alone: blank guess | ESC: Quit",
            Screen::RoundWon | Screen::RoundLost => "Y: Play again | any other key: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Blocks until the next real key press, skipping everything else
    /// (mouse, focus, paste, resize, key release/repeat).
    fn next_key(&mut self) -> Result<KeyEvent, io::Error> {
        loop {
            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != event::KeyEventKind::Press {
                        continue;
                    }
                    if let KeyCode::Char(c) = key.code {
                        // Alt-tabbing leaks escape-sequence garbage as
                        // replacement or control characters; drop it rather
                        // than treat it as a guess.
                        if c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD {
                            log::debug!("ignoring control character {c:?}");
                            continue;
                        }
                    }
                    return Ok(key);
                }
                other => {
                    log::debug!("ignoring non-key event: {other:?}");
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn show_start_screen(&mut self, score: &ScoreBoard) {
        self.screen = Screen::Start;
        // The start screen shows the complete figure, as the original did.
        self.figure = figure_lines(MAX_WRONG);
        self.wins = score.wins();
        self.losses = score.losses();
        self.message.clear();
        self.status = "Welcome to Hangman".to_string();
        self.draw_or_log();
    }

    fn confirm_start(&mut self) -> bool {
        self.status = "Play or quit?".to_string();
        self.draw_or_log();
        loop {
            match self.next_key() {
                Ok(key) => match key.code {
                    KeyCode::Char('p' | 'P') => return true,
                    KeyCode::Char('q' | 'Q') | KeyCode::Esc => return false,
                    _ => {}
                },
                Err(e) => {
                    log::debug!("input error on start screen: {e}");
                    return false;
                }
            }
        }
    }

    fn show_state(&mut self, state: &GuessState, score: &ScoreBoard) {
        self.screen = Screen::Playing;
        self.figure = figure_lines(state.reveal_stage());
        self.word_row = word_line(state);
        self.wrong_guesses = state.wrong_guesses().to_vec();
        self.wins = score.wins();
        self.losses = score.losses();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> UserAction {
        self.status = "Pick a letter (a-z)".to_string();
        self.draw_or_log();
        loop {
            match self.next_key() {
                Ok(key) => match key.code {
                    KeyCode::Esc => return UserAction::Quit,
                    KeyCode::Enter => return UserAction::Guess(Guess::Blank),
                    // No validation here: a non-letter simply will not be in
                    // the secret and counts as a wrong guess.
                    KeyCode::Char(c) => return UserAction::Guess(Guess::Letter(c)),
                    _ => {}
                },
                Err(e) => {
                    log::debug!("input error while guessing: {e}");
                    return UserAction::Quit;
                }
            }
        }
    }

    fn show_outcome(&mut self, guess: Guess, outcome: GuessOutcome, state: &GuessState) {
        match outcome {
            GuessOutcome::AlreadyOver => {}
            GuessOutcome::Correct { .. } | GuessOutcome::CorrectRepeat => {
                if let Guess::Letter(c) = guess {
                    self.message = format!("Correctly guessed \"{}\"!", c.to_ascii_lowercase());
                }
            }
            GuessOutcome::Won => {
                self.screen = Screen::RoundWon;
                self.message = "You win!".to_string();
                self.status = "Round over".to_string();
            }
            GuessOutcome::Incorrect { stage } => {
                self.message = NOPES[stage as usize - 1].to_string();
            }
            GuessOutcome::Lost => {
                self.screen = Screen::RoundLost;
                self.message = format!(
                    "{} The word was \"{}\".",
                    NOPES[MAX_WRONG as usize - 1],
                    state.secret()
                );
                self.status = "Round over".to_string();
            }
        }
        self.draw_or_log();
    }

    fn confirm_replay(&mut self) -> bool {
        self.status = "Play again? (y/n)".to_string();
        self.draw_or_log();
        match self.next_key() {
            Ok(key) => matches!(key.code, KeyCode::Char('y' | 'Y')),
            Err(e) => {
                log::debug!("input error at replay prompt: {e}");
                false
            }
        }
    }

    fn show_goodbye(&mut self) {
        self.message = "OK. Goodbye!".to_string();
        self.status = "Exiting".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
