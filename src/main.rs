use std::io;
use std::process::ExitCode;

use wordle_engine::cli::{CliInterface, parse_cli};
use wordle_engine::session::{Session, game_loop, load_or_compute_starting_words};
use wordle_engine::wordbank::{
    EMBEDDED_ANSWERS, EMBEDDED_GUESSES, load_wordbank_from_file, load_wordbank_from_str,
};

fn main() -> ExitCode {
    wordle_engine::logging::init();
    let cli = parse_cli();

    let answer_words = match &cli.answers_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load answer list from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_ANSWERS),
    };

    let mut guess_words = match &cli.guesses_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load guess list from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_GUESSES),
    };

    // Every answer must be guessable, whatever lists were supplied.
    for word in &answer_words {
        if !guess_words.contains(word) {
            guess_words.push(word.clone());
        }
    }

    println!(
        "Loaded {} possible answers, {} legal guesses.",
        answer_words.len(),
        guess_words.len()
    );
    log::info!(
        "wordbanks ready: {} answers, {} guesses",
        answer_words.len(),
        guess_words.len()
    );

    let mut session = Session::new(answer_words, guess_words, cli.seed);
    let starting_words = load_or_compute_starting_words(&session);

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    game_loop(&mut session, &mut interface, &starting_words);

    ExitCode::SUCCESS
}
