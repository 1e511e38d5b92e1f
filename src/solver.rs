//! Core decision algorithms: feedback scoring, candidate elimination, and
//! entropy-based guess selection.
//!
//! Everything here is pure. Randomness for tie-breaking comes from a
//! caller-supplied generator so sessions can be replayed from a seed.

use crate::WORD_LENGTH;
use rand::Rng;
use rayon::prelude::*;

/// How many opening suggestions to rank and cache.
pub const STARTING_WORD_COUNT: usize = 5;

/// 3^WORD_LENGTH distinct feedback patterns.
const PATTERN_COUNT: usize = 243;

/// Tile classification for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position (green).
    Match,
    /// Right letter, wrong position (yellow).
    PartialMatch,
    /// Letter not usable at this position given multiplicity (gray).
    NoMatch,
}

impl Feedback {
    /// Parse one feedback character. Accepts the letter form (G/Y/X) and the
    /// numeric form (1=green, 2=yellow, 0=gray).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' | '1' => Some(Feedback::Match),
            'Y' | '2' => Some(Feedback::PartialMatch),
            'X' | '0' => Some(Feedback::NoMatch),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Feedback::Match => 'G',
            Feedback::PartialMatch => 'Y',
            Feedback::NoMatch => 'X',
        }
    }
}

/// A suggested guess with the entropy that earned it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub guess: String,
    /// Expected information gain in bits over the candidate set.
    pub entropy: f64,
    /// Whether the guess could itself be the answer.
    pub is_candidate: bool,
}

fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

/// Score a guess against an answer, one tile per position.
///
/// Two passes with per-letter multiset accounting: exact positions first,
/// then misplaced letters consume whatever unmatched occurrences remain.
/// A repeated guess letter is never credited more times than the answer
/// contains it. Both words must be uppercase and of equal length.
pub fn score(guess: &str, answer: &str) -> [Feedback; WORD_LENGTH] {
    let guess = guess.as_bytes();
    let answer = answer.as_bytes();
    debug_assert_eq!(guess.len(), WORD_LENGTH);
    debug_assert_eq!(answer.len(), WORD_LENGTH);

    let mut tiles = [Feedback::NoMatch; WORD_LENGTH];
    let mut unmatched = [0u8; 26];

    for i in 0..WORD_LENGTH {
        if guess[i] == answer[i] {
            tiles[i] = Feedback::Match;
        } else {
            unmatched[letter_index(answer[i])] += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if tiles[i] == Feedback::Match {
            continue;
        }
        let idx = letter_index(guess[i]);
        if unmatched[idx] > 0 {
            tiles[i] = Feedback::PartialMatch;
            unmatched[idx] -= 1;
        }
    }

    tiles
}

/// Prune `candidates` to the words consistent with `feedback` for `guess`.
///
/// Greens pin positions, yellows require the letter elsewhere, and grays cap
/// the letter's total count at the number of green/yellow occurrences in the
/// guess (zero occurrences bans the letter outright). Checks short-circuit
/// per candidate; input order is preserved.
pub fn filter_candidates(
    candidates: &[String],
    guess: &str,
    feedback: &[Feedback],
) -> Vec<String> {
    let guess = guess.as_bytes();
    debug_assert_eq!(guess.len(), WORD_LENGTH);
    debug_assert_eq!(feedback.len(), WORD_LENGTH);

    // Lower bound on occurrences of each letter in any consistent answer.
    let mut required = [0u8; 26];
    for (i, f) in feedback.iter().enumerate() {
        if matches!(f, Feedback::Match | Feedback::PartialMatch) {
            required[letter_index(guess[i])] += 1;
        }
    }

    let mut remaining = Vec::new();
    'word: for candidate in candidates {
        let word = candidate.as_bytes();
        for i in 0..WORD_LENGTH {
            let letter = guess[i];
            match feedback[i] {
                Feedback::Match => {
                    if word[i] != letter {
                        continue 'word;
                    }
                }
                Feedback::PartialMatch => {
                    if word[i] == letter || !word.contains(&letter) {
                        continue 'word;
                    }
                }
                Feedback::NoMatch => {
                    let count = word.iter().filter(|&&c| c == letter).count() as u8;
                    if count > required[letter_index(letter)] {
                        continue 'word;
                    }
                }
            }
        }
        remaining.push(candidate.clone());
    }
    remaining
}

fn pattern_index(tiles: &[Feedback; WORD_LENGTH]) -> usize {
    tiles.iter().fold(0, |acc, tile| {
        acc * 3
            + match tile {
                Feedback::NoMatch => 0,
                Feedback::Match => 1,
                Feedback::PartialMatch => 2,
            }
    })
}

/// Shannon entropy (bits) of the feedback distribution `guess` induces over
/// `candidates`.
pub fn calculate_entropy(guess: &str, candidates: &[String]) -> f64 {
    let mut buckets = [0u32; PATTERN_COUNT];
    for answer in candidates {
        buckets[pattern_index(&score(guess, answer))] += 1;
    }

    let total = candidates.len() as f64;
    let mut entropy = 0.0;
    for &count in &buckets {
        if count > 0 {
            let fraction = f64::from(count) / total;
            entropy -= fraction * fraction.log2();
        }
    }
    entropy
}

/// Pick the next guess: the word in `guess_words` whose feedback partition
/// of `candidates` has maximal entropy.
///
/// Ties are broken uniformly at random, preferring words that are still
/// viable answers so a lucky guess can end the game. Returns `None` only for
/// an empty candidate slice; a lone candidate is returned without a search.
pub fn select_guess<R: Rng>(
    candidates: &[String],
    guess_words: &[String],
    rng: &mut R,
) -> Option<Recommendation> {
    if candidates.is_empty() {
        return None;
    }
    if candidates.len() == 1 {
        return Some(Recommendation {
            guess: candidates[0].clone(),
            entropy: 0.0,
            is_candidate: true,
        });
    }

    // Parallel sweep, collected back in dictionary order so the tie scan
    // below is identical to a sequential run.
    let entropies: Vec<f64> = guess_words
        .par_iter()
        .map(|word| calculate_entropy(word, candidates))
        .collect();

    let mut max_entropy = 0.0_f64;
    let mut best: Vec<&String> = Vec::new();
    for (word, &entropy) in guess_words.iter().zip(&entropies) {
        if entropy > max_entropy {
            max_entropy = entropy;
            best.clear();
            best.push(word);
        } else if entropy == max_entropy {
            best.push(word);
        }
    }
    if best.is_empty() {
        best = candidates.iter().collect();
    }

    crate::debug_log!(
        "entropy search over {} words: {} tied at {:.4} bits",
        guess_words.len(),
        best.len(),
        max_entropy
    );

    let viable: Vec<&String> = best
        .iter()
        .copied()
        .filter(|word| candidates.contains(*word))
        .collect();
    let finalists = if viable.is_empty() { best } else { viable };

    let choice = finalists[rng.gen_range(0..finalists.len())];
    Some(Recommendation {
        guess: choice.clone(),
        entropy: max_entropy,
        is_candidate: candidates.contains(choice),
    })
}

/// Rank the guess dictionary by entropy against the full answer list and
/// return the top openers, best first. Ties keep dictionary order.
pub fn compute_best_starting_words(
    answer_words: &[String],
    guess_words: &[String],
) -> Vec<String> {
    let mut ranked: Vec<(&String, f64)> = guess_words
        .par_iter()
        .map(|word| (word, calculate_entropy(word, answer_words)))
        .collect();

    ranked.sort_by(|a, b| match b.1.partial_cmp(&a.1) {
        Some(ordering) => ordering,
        None => std::cmp::Ordering::Equal,
    });

    ranked
        .into_iter()
        .take(STARTING_WORD_COUNT)
        .map(|(word, _)| word.clone())
        .collect()
}
