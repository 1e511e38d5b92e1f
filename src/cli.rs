use crate::WORD_LENGTH;
use crate::session::{GameInterface, StartingWordsInfo, UserAction};
use crate::solver::{Feedback, Recommendation};
use clap::Parser;
use std::io::BufRead;

/// Entropy-guided Wordle assistant options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited answer list (defaults to the embedded curated list)
    #[arg(short = 'a', long = "answers")]
    pub answers_path: Option<String>,

    /// Path to a newline-delimited guess list (defaults to the embedded list)
    #[arg(short = 'g', long = "guesses")]
    pub guesses_path: Option<String>,

    /// Seed for tie-breaking among equally good guesses (reproducible sessions)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI input/output functions

pub enum GuessInput {
    Valid(String),
    Invalid,
    Exit,
    NewGame,
}

fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_valid_feedback(feedback: &str) -> bool {
    feedback.len() == WORD_LENGTH && feedback.chars().all(|c| Feedback::from_char(c).is_some())
}

pub fn display_starting_words(info: &StartingWordsInfo) {
    println!("Best opening guesses:");
    for (i, word) in info.words.iter().enumerate() {
        println!("{}. {}", i + 1, word);
    }

    if let Some(path) = info.cache_path.as_ref() {
        if info.used_cache {
            println!("(Loaded from cache: {}.)", path.display());
        } else {
            println!("(Computed and cached to: {}.)", path.display());
        }
    }

    if !info.words.is_empty() {
        println!("Suggested opening guess: {}", info.words[0]);
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("\nEnter your guess (5 letters, or 'exit' to quit, or 'next' to start a new game):");
    let mut input = String::new();
    if reader.read_line(&mut input).unwrap_or(0) == 0 {
        return GuessInput::Exit;
    }
    let input = input.trim().to_uppercase();

    match input.as_str() {
        "EXIT" => GuessInput::Exit,
        "NEXT" => GuessInput::NewGame,
        _ if is_valid_word(&input) => GuessInput::Valid(input),
        _ => {
            println!("Invalid guess. Please enter 5 letters.");
            GuessInput::Invalid
        }
    }
}

pub fn read_feedback<R: BufRead>(reader: &mut R) -> Option<Vec<Feedback>> {
    println!("Enter feedback (G=green, Y=yellow, X=gray, or 1/2/0, e.g. GYXXG):");
    let mut input = String::new();
    if reader.read_line(&mut input).unwrap_or(0) == 0 {
        return None;
    }
    let input = input.trim().to_uppercase();

    if is_valid_feedback(&input) {
        input.chars().map(Feedback::from_char).collect()
    } else {
        println!("Invalid feedback. Please enter 5 characters using G, Y, X or 1, 2, 0.");
        None
    }
}

pub fn display_candidates(candidates: &[String]) {
    println!("Possible answers ({})", candidates.len());
    for word in candidates.iter().take(5) {
        println!("{word}");
    }
    if candidates.len() > 5 {
        println!("...and {} more", candidates.len() - 5);
    }
}

pub fn display_recommendation(recommendation: &Recommendation) {
    let category = if recommendation.is_candidate {
        "solution candidate"
    } else {
        "information-gathering"
    };
    println!(
        "Recommended guess: {} ({:.2} bits) [{category}]",
        recommendation.guess, recommendation.entropy
    );
}

/// CLI implementation of the `GameInterface` trait over any `BufRead`, so
/// the same code path serves stdin and scripted test input.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_starting_words(&mut self, info: &StartingWordsInfo) {
        display_starting_words(info);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader) {
            GuessInput::Valid(guess) => Some(UserAction::Guess(guess)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Invalid => None,
        }
    }

    fn read_feedback(&mut self) -> Option<Vec<Feedback>> {
        read_feedback(&mut self.reader)
    }

    fn display_candidates(&mut self, candidates: &[String]) {
        display_candidates(candidates);
    }

    fn display_recommendation(&mut self, recommendation: &Recommendation) {
        display_recommendation(recommendation);
    }

    fn display_computing_message(&mut self) {
        println!("Computing optimal guess, please wait...");
    }

    fn display_inconsistent_message(&mut self) {
        println!("That feedback leaves no possible answers. Keeping the previous candidates; check your tiles and try again.");
    }

    fn display_unknown_word_message(&mut self, guess: &str) {
        println!("{guess} is not in the guess dictionary.");
    }

    fn display_solution_found(&mut self, solution: &str) {
        println!("Solution found: {solution}");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        println!("New game started. Loaded {word_count} words.");
    }
}
