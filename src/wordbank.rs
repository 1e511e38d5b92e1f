use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Curated words that can be the secret answer.
pub const EMBEDDED_ANSWERS: &str = include_str!("resources/answers.txt");
/// Every word accepted as a guess; superset of the answer list.
pub const EMBEDDED_GUESSES: &str = include_str!("resources/guesses.txt");

const STARTING_WORDS_CACHE: &str = ".wordle-engine-starters";

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| {
            word.len() == crate::WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
        })
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_uppercase();
        if word.len() == crate::WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic()) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Cache file for the computed opening suggestions, under the home
/// directory. `None` when no home directory can be determined.
pub fn starting_words_cache_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(STARTING_WORDS_CACHE))
}

/// Read cached starting words. An unreadable or empty cache counts as
/// missing, never as an error.
pub fn read_starting_words(path: &Path) -> Option<Vec<String>> {
    let words = load_wordbank_from_file(path).ok()?;
    if words.is_empty() { None } else { Some(words) }
}

/// Best-effort write; a failed cache write only costs recomputation on the
/// next run.
pub fn write_starting_words(path: &Path, words: &[String]) {
    let result = File::create(path).and_then(|mut file| {
        for word in words {
            writeln!(file, "{word}")?;
        }
        Ok(())
    });
    if let Err(e) = result {
        log::warn!("failed to cache starting words to {}: {e}", path.display());
    }
}
