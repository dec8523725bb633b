use std::io;

use hangman::cli::{CliInterface, parse_cli};
use hangman::session::run_session;
use hangman::tui::TuiInterface;
use hangman::wordlist::WordSource;

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let source = match &cli.wordlist_path {
        Some(path) => WordSource::from_file(path),
        None => WordSource::embedded(),
    };
    log::info!("word source ready with {} words", source.len());

    let result = if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => run_session(&source, &mut interface),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return;
            }
        }
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        run_session(&source, &mut interface)
    };

    match result {
        Ok(score) => log::info!(
            "session finished: {} wins, {} losses",
            score.wins(),
            score.losses()
        ),
        Err(e) => eprintln!("Could not pick a word: {e}"),
    }
}
