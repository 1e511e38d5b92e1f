//! Per-puzzle state and the turn loop.
//!
//! A `Session` owns the immutable dictionaries and the mutable candidate set
//! for one puzzle; there is no process-global state, so several sessions can
//! coexist as independent values. The loop talks to the user through
//! `GameInterface` and runs identically over a terminal or a scripted reader
//! in tests.

use crate::solver::{
    Feedback, Recommendation, compute_best_starting_words, filter_candidates, select_guess,
};
use crate::wordbank::{read_starting_words, starting_words_cache_path, write_starting_words};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Result of applying one guess/feedback pair to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Candidate set replaced; this many words remain.
    Narrowed(usize),
    /// Feedback is consistent with no known answer; candidate set retained.
    Inconsistent,
    /// Guess is not in the guess dictionary; candidate set untouched.
    UnknownWord,
}

pub enum UserAction {
    Guess(String),
    Exit,
    NewGame,
}

pub struct StartingWordsInfo {
    pub words: Vec<String>,
    pub used_cache: bool,
    pub cache_path: Option<PathBuf>,
}

/// Presentation seam for the turn loop.
pub trait GameInterface {
    fn display_starting_words(&mut self, info: &StartingWordsInfo);
    fn read_guess(&mut self) -> Option<UserAction>;
    fn read_feedback(&mut self) -> Option<Vec<Feedback>>;
    fn display_candidates(&mut self, candidates: &[String]);
    fn display_recommendation(&mut self, recommendation: &Recommendation);
    fn display_computing_message(&mut self);
    fn display_inconsistent_message(&mut self);
    fn display_unknown_word_message(&mut self, guess: &str);
    fn display_solution_found(&mut self, solution: &str);
    fn display_exit_message(&mut self);
    fn display_new_game_message(&mut self, word_count: usize);
}

pub struct Session {
    answer_words: Vec<String>,
    guess_words: Vec<String>,
    candidates: Vec<String>,
    rng: StdRng,
}

impl Session {
    /// `seed` makes guess selection reproducible; `None` draws a fresh seed.
    pub fn new(answer_words: Vec<String>, guess_words: Vec<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            candidates: answer_words.clone(),
            answer_words,
            guess_words,
            rng,
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn answer_words(&self) -> &[String] {
        &self.answer_words
    }

    pub fn guess_words(&self) -> &[String] {
        &self.guess_words
    }

    /// Start the next puzzle: candidate set back to the full answer list.
    pub fn reset(&mut self) {
        self.candidates = self.answer_words.clone();
    }

    /// Apply one scored turn. The candidate set only advances when the
    /// feedback leaves at least one consistent answer.
    pub fn apply_guess(&mut self, guess: &str, feedback: &[Feedback]) -> TurnOutcome {
        if !self.guess_words.iter().any(|word| word == guess) {
            return TurnOutcome::UnknownWord;
        }
        let filtered = filter_candidates(&self.candidates, guess, feedback);
        log::info!(
            "guess {guess}: {} -> {} candidates",
            self.candidates.len(),
            filtered.len()
        );
        if filtered.is_empty() {
            return TurnOutcome::Inconsistent;
        }
        self.candidates = filtered;
        TurnOutcome::Narrowed(self.candidates.len())
    }

    /// Entropy-maximal next guess over the current candidates.
    pub fn suggest(&mut self) -> Option<Recommendation> {
        select_guess(&self.candidates, &self.guess_words, &mut self.rng)
    }
}

/// Load the opening suggestions from the on-disk cache, or rank the full
/// dictionary and cache the result. The opening search is the most expensive
/// computation in the program, so it is only ever done once per wordbank.
pub fn load_or_compute_starting_words(session: &Session) -> StartingWordsInfo {
    let cache_path = starting_words_cache_path();
    if let Some(path) = cache_path.as_ref()
        && let Some(words) = read_starting_words(path)
    {
        return StartingWordsInfo {
            words,
            used_cache: true,
            cache_path,
        };
    }

    let words = compute_best_starting_words(session.answer_words(), session.guess_words());
    if let Some(path) = cache_path.as_ref() {
        write_starting_words(path, &words);
    }
    StartingWordsInfo {
        words,
        used_cache: false,
        cache_path,
    }
}

pub fn game_loop<I: GameInterface>(
    session: &mut Session,
    interface: &mut I,
    starting_words: &StartingWordsInfo,
) {
    interface.display_starting_words(starting_words);

    loop {
        let guess = match interface.read_guess() {
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                break;
            }
            Some(UserAction::NewGame) => {
                session.reset();
                interface.display_new_game_message(session.remaining_count());
                interface.display_starting_words(starting_words);
                continue;
            }
            Some(UserAction::Guess(guess)) => guess,
            None => continue,
        };

        let Some(feedback) = interface.read_feedback() else {
            continue;
        };

        match session.apply_guess(&guess, &feedback) {
            TurnOutcome::UnknownWord => {
                interface.display_unknown_word_message(&guess);
                continue;
            }
            TurnOutcome::Inconsistent => {
                interface.display_inconsistent_message();
                continue;
            }
            TurnOutcome::Narrowed(_) => {}
        }

        interface.display_candidates(session.candidates());

        if session.remaining_count() == 1 {
            let solution = session.candidates()[0].clone();
            interface.display_solution_found(&solution);
            break;
        }

        interface.display_computing_message();
        if let Some(recommendation) = session.suggest() {
            interface.display_recommendation(&recommendation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliInterface;
    use crate::solver::score;
    use std::io::Cursor;

    fn wordbank(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn session(words: &[&str]) -> Session {
        let bank = wordbank(words);
        Session::new(bank.clone(), bank, Some(0))
    }

    fn no_starters() -> StartingWordsInfo {
        StartingWordsInfo {
            words: Vec::new(),
            used_cache: false,
            cache_path: None,
        }
    }

    fn run_script(session: &mut Session, script: &str) {
        let mut interface = CliInterface::new(Cursor::new(script.to_string()));
        game_loop(session, &mut interface, &no_starters());
    }

    #[test]
    fn apply_guess_narrows_candidates() {
        let mut session = session(&["CRANE", "BRAIN", "TRAIN", "STAIN"]);
        let outcome = session.apply_guess("CRANE", &score("CRANE", "BRAIN"));
        assert_eq!(outcome, TurnOutcome::Narrowed(1));
        assert_eq!(session.candidates(), ["BRAIN"]);
    }

    #[test]
    fn inconsistent_feedback_retains_previous_candidates() {
        let mut session = session(&["CRANE", "SLATE"]);
        // All-gray for CRANE bans A and E, which both words contain.
        let outcome = session.apply_guess("CRANE", &[Feedback::NoMatch; 5]);
        assert_eq!(outcome, TurnOutcome::Inconsistent);
        assert_eq!(session.remaining_count(), 2);
    }

    #[test]
    fn unknown_word_is_rejected_without_filtering() {
        let mut session = session(&["CRANE", "SLATE"]);
        let outcome = session.apply_guess("WRUNG", &[Feedback::NoMatch; 5]);
        assert_eq!(outcome, TurnOutcome::UnknownWord);
        assert_eq!(session.remaining_count(), 2);
    }

    #[test]
    fn reset_restores_full_answer_list() {
        let mut session = session(&["CRANE", "BRAIN", "TRAIN", "STAIN"]);
        session.apply_guess("CRANE", &score("CRANE", "BRAIN"));
        assert_eq!(session.remaining_count(), 1);
        session.reset();
        assert_eq!(session.remaining_count(), 4);
    }

    #[test]
    fn suggest_returns_lone_candidate_directly() {
        let mut session = session(&["CRANE", "BRAIN"]);
        session.apply_guess("CRANE", &score("CRANE", "BRAIN"));
        let rec = session.suggest().unwrap();
        assert_eq!(rec.guess, "BRAIN");
        assert!(rec.is_candidate);
    }

    #[test]
    fn suggestions_are_reproducible_for_a_fixed_seed() {
        let bank = wordbank(&["CRANE", "CRATE", "TRACE", "GRACE", "BRACE"]);
        let mut first = Session::new(bank.clone(), bank.clone(), Some(9));
        let mut second = Session::new(bank.clone(), bank, Some(9));
        assert_eq!(first.suggest(), second.suggest());
    }

    #[test]
    fn loop_exits_immediately_on_request() {
        let mut session = session(&["CRANE", "SLATE", "RAISE"]);
        run_script(&mut session, "exit\n");
        assert_eq!(session.remaining_count(), 3);
    }

    #[test]
    fn loop_survives_invalid_guess() {
        let mut session = session(&["CRANE", "SLATE", "RAISE"]);
        run_script(&mut session, "abc\nexit\n");
    }

    #[test]
    fn loop_survives_invalid_feedback() {
        let mut session = session(&["CRANE", "SLATE", "RAISE"]);
        run_script(&mut session, "CRANE\nBOGUS\nexit\n");
        assert_eq!(session.remaining_count(), 3);
    }

    #[test]
    fn loop_stops_once_solved() {
        let mut session = session(&["CRANE", "SLATE", "RAISE"]);
        run_script(&mut session, "CRANE\nGGGGG\n");
        assert_eq!(session.candidates(), ["CRANE"]);
    }

    #[test]
    fn loop_keeps_candidates_after_inconsistent_feedback() {
        let mut session = session(&["CRANE", "SLATE"]);
        run_script(&mut session, "CRANE\nXXXXX\nexit\n");
        assert_eq!(session.remaining_count(), 2);
    }

    #[test]
    fn loop_new_game_restores_candidates() {
        let mut session = session(&["CRANE", "SLATE", "RAISE"]);
        run_script(&mut session, "SLATE\nGGGGG\nnext\nexit\n");
        // SLATE solved the puzzle and broke the loop before `next` was read,
        // so drive a fresh loop for the reset.
        run_script(&mut session, "next\nexit\n");
        assert_eq!(session.remaining_count(), 3);
    }

    #[test]
    fn loop_accepts_numeric_feedback_encoding() {
        let mut session = session(&["CRANE", "SLATE", "RAISE"]);
        // 1=green: solves exactly like GGGGG.
        run_script(&mut session, "CRANE\n11111\n");
        assert_eq!(session.candidates(), ["CRANE"]);
    }

    #[test]
    fn loop_rejects_words_outside_the_dictionary() {
        let mut session = session(&["CRANE", "SLATE"]);
        run_script(&mut session, "WRUNG\nXXXXX\nexit\n");
        assert_eq!(session.remaining_count(), 2);
    }

    #[test]
    fn loop_ends_at_end_of_input() {
        let mut session = session(&["CRANE", "SLATE"]);
        run_script(&mut session, "");
        assert_eq!(session.remaining_count(), 2);
    }
}
