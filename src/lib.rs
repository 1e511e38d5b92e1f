// Library interface for wordle-engine.
// Exposes the core to integration tests and alternative front ends.

pub mod cli;
pub mod logging;
pub mod session;
pub mod solver;
pub mod wordbank;

pub use session::{GameInterface, Session, TurnOutcome, game_loop, load_or_compute_starting_words};
pub use solver::{
    Feedback, Recommendation, calculate_entropy, compute_best_starting_words, filter_candidates,
    score, select_guess,
};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};

/// Word length for Wordle.
pub const WORD_LENGTH: usize = 5;
