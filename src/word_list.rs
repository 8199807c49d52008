//! `word_list`: load a word list and look up anagrams and letter patterns.
//!
//! This is a helper for setters and solvers, not part of puzzle validation.
//!
//! Input is read either from an in-memory string (WASM-safe) or, on native
//! builds only, from a file path. The parsing logic:
//! - One word per line, optionally followed by `;score`.
//! - Blank lines and lines starting with `#` are skipped.
//! - Lines whose score does not parse, or is below `min_score`, are skipped.
//!   Unscored lines are always kept.
//! - Words are normalized to lowercase letters and digits; spaces and
//!   punctuation are dropped, so `ICE-CREAM` is stored as `icecream`.
//! - The list is deduplicated and sorted by length, then alphabetically.
//!
//! # Error Codes
//!
//! - W001: `EmptyLetters` (No letters given for an anagram lookup)
//! - W002: `EmptyPattern` (No pattern given)
//! - W003: `InvalidPattern` (Pattern did not compile)

use fancy_regex::{escape, Regex};
use std::collections::HashMap;

/// Pattern characters that match any single letter
pub const WILDCARDS: &str = "?.";

/// Errors from word-list lookups
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("letters empty")]
    EmptyLetters,

    #[error("pattern empty")]
    EmptyPattern,

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] fancy_regex::Error),
}

impl WordListError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordListError::EmptyLetters => "W001",
            WordListError::EmptyPattern => "W002",
            WordListError::InvalidPattern(_) => "W003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            WordListError::EmptyLetters => "No letters given for an anagram lookup",
            WordListError::EmptyPattern => "No pattern given",
            WordListError::InvalidPattern(_) => "Pattern did not compile",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            WordListError::EmptyLetters => "Anagram lookups need at least one letter or digit. Spaces and punctuation are ignored.",
            WordListError::EmptyPattern => "Pattern lookups need at least one character; use '?' or '.' for unknown letters.",
            WordListError::InvalidPattern(_) => "The pattern could not be turned into a matcher. This is usually an internal error.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            WordListError::EmptyLetters => Some("Example: 'react'"),
            WordListError::EmptyPattern => Some("Example: 're?c?' or 'c.t'"),
            WordListError::InvalidPattern(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// A processed, ready-to-query word list.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    by_len: HashMap<usize, Vec<String>>,
    by_signature: HashMap<String, Vec<String>>,
}

/// Lowercase letters and digits of `s`, everything else dropped.
fn normalize(s: &str) -> String {
    s.chars().filter(|c| c.is_alphanumeric()).flat_map(char::to_lowercase).collect()
}

/// Sorted normalized letters: two words are exact anagrams iff their signatures match.
fn signature(s: &str) -> String {
    let mut chars: Vec<char> = normalize(s).chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

impl WordList {
    /// Parse a word list from an in-memory string.
    ///
    /// # Arguments
    /// * `contents`: The raw file contents. Each line is `word` or `word;score`.
    /// * `min_score`: Scored words below this are skipped.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_score: i32) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }
                let word = match line.split_once(';') {
                    Some((word, score_raw)) => {
                        let score: i32 = score_raw.trim().parse().ok()?;
                        if score < min_score {
                            return None;
                        }
                        word
                    }
                    None => line,
                };
                Some(normalize(word)).filter(|w| !w.is_empty())
            })
            .collect();

        // dedup() only drops adjacent duplicates, so sort alphabetically first
        words.sort();
        words.dedup();
        words.sort_by(|a, b| a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b)));

        let mut by_len: HashMap<usize, Vec<String>> = HashMap::new();
        let mut by_signature: HashMap<String, Vec<String>> = HashMap::new();
        for w in &words {
            by_len.entry(w.chars().count()).or_default().push(w.clone());
            by_signature.entry(signature(w)).or_default().push(w.clone());
        }

        WordList { words, by_len, by_signature }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P, min_score: i32) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();
        let t_load = instant::Instant::now();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        let word_list = Self::parse_from_str(&data, min_score);
        log::info!(
            "loaded {} words from '{}' in {:?}",
            word_list.len(),
            path_ref.display(),
            t_load.elapsed()
        );
        Ok(word_list)
    }

    /// Normalized words sorted by (length, alphabetical)
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact anagrams of `letters`, alphabetically.
    ///
    /// When `len` is given and differs from the number of letters, nothing can
    /// match and the result is empty.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::EmptyLetters`] if `letters` has no letters or digits.
    pub fn anagrams(&self, letters: &str, len: Option<usize>) -> Result<Vec<String>, WordListError> {
        let sig = signature(letters);
        if sig.is_empty() {
            return Err(WordListError::EmptyLetters);
        }
        if len.is_some_and(|n| n != sig.chars().count()) {
            return Ok(Vec::new());
        }

        let mut found = self.by_signature.get(&sig).cloned().unwrap_or_default();
        found.sort();
        log::debug!("anagrams of {letters:?}: {} found", found.len());
        Ok(found)
    }

    /// Words matching a crossword pattern such as `re?c?` or `c.t`.
    ///
    /// `?` and `.` match any single letter; every other character matches
    /// itself, case-insensitively. `len` defaults to the pattern length.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::EmptyPattern`] for a blank pattern, or
    /// [`WordListError::InvalidPattern`] if the matcher cannot be built or run.
    pub fn pattern_match(&self, pattern: &str, len: Option<usize>) -> Result<Vec<String>, WordListError> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(WordListError::EmptyPattern);
        }
        let len = len.filter(|&n| n > 0).unwrap_or_else(|| pattern.chars().count());

        let re = pattern_regex(pattern)?;
        let mut found = Vec::new();
        for word in self.by_len.get(&len).into_iter().flatten() {
            if re.is_match(word)? {
                found.push(word.clone());
            }
        }
        found.sort();
        log::debug!("pattern {pattern:?} (len {len}): {} found", found.len());
        Ok(found)
    }
}

// `re?c?` -> `^re.c.$`, everything but wildcards escaped
fn pattern_regex(pattern: &str) -> Result<Regex, WordListError> {
    let body: String = pattern
        .chars()
        .map(|c| {
            if WILDCARDS.contains(c) {
                ".".to_string()
            } else {
                escape(&c.to_lowercase().to_string()).into_owned()
            }
        })
        .collect();
    Ok(Regex::new(&format!("^{body}$"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "react\ntrace\ncrate\ncater\ncat\n";

    #[test]
    fn test_parse_plain_and_scored_lines() {
        let wl = WordList::parse_from_str("cat;50\ndog\nbird;40\n# comment\n\n", 45);
        assert_eq!(wl.words().to_vec(), vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_skips_bad_scores() {
        let wl = WordList::parse_from_str("cat;50\napple;bad_score", 0);
        assert_eq!(wl.words().to_vec(), vec!["cat"]);
    }

    #[test]
    fn test_parse_normalizes_dedups_and_sorts() {
        let wl = WordList::parse_from_str("ICE-CREAM\nDog\ndog\nO'Neil\nab", 0);
        assert_eq!(wl.words().to_vec(), vec!["ab", "dog", "oneil", "icecream"]);
        assert_eq!(wl.len(), 4);
    }

    #[test]
    fn test_words_and_lookups_share_one_index() {
        let wl = WordList::parse_from_str(SAMPLE, 0);
        let five: Vec<&String> = wl.words().iter().filter(|w| w.len() == 5).collect();
        assert_eq!(five, wl.pattern_match("?????", None).unwrap().iter().collect::<Vec<_>>());
        assert_eq!(wl.words().len(), wl.len());
    }

    #[test]
    fn test_anagrams() {
        let wl = WordList::parse_from_str(SAMPLE, 0);
        assert_eq!(wl.anagrams("REACT", Some(5)).unwrap(), vec!["cater", "crate", "react", "trace"]);
        assert_eq!(wl.anagrams("t a c", None).unwrap(), vec!["cat"]);
    }

    #[test]
    fn test_anagrams_length_mismatch_is_empty() {
        let wl = WordList::parse_from_str(SAMPLE, 0);
        assert!(wl.anagrams("react", Some(4)).unwrap().is_empty());
    }

    #[test]
    fn test_anagrams_need_letters() {
        let wl = WordList::parse_from_str(SAMPLE, 0);
        let err = wl.anagrams(" - ", None).unwrap_err();
        assert_eq!(err.code(), "W001");
    }

    #[test]
    fn test_pattern_match() {
        let wl = WordList::parse_from_str(SAMPLE, 0);
        assert_eq!(wl.pattern_match("re?c?", Some(5)).unwrap(), vec!["react"]);
        assert_eq!(wl.pattern_match("C.T", None).unwrap(), vec!["cat"]);
        assert_eq!(wl.pattern_match("??a??", None).unwrap(), vec!["crate", "react", "trace"]);
    }

    #[test]
    fn test_pattern_escapes_regex_characters() {
        let wl = WordList::parse_from_str("cat\ncats", 0);
        assert!(wl.pattern_match("ca+", None).unwrap().is_empty());
        assert!(wl.pattern_match("c*", None).unwrap().is_empty());
    }

    #[test]
    fn test_pattern_needs_content() {
        let wl = WordList::parse_from_str(SAMPLE, 0);
        assert!(matches!(wl.pattern_match("  ", None), Err(WordListError::EmptyPattern)));
    }
}
