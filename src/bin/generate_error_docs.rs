//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details, and help text come straight from the
//! `code()`, `description()`, `details()`, and `help()` methods of
//! `ParseError`, `ValidationError`, `StoreError`, and `WordListError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use cruciverb::errors::ParseError;
use cruciverb::grid::CellRef;
use cruciverb::store::StoreError;
use cruciverb::validation::{Problem, ValidationError};
use cruciverb::word_list::WordListError;

/// Append documentation for any error type with `code()`, `description()`,
/// `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**\n```\n{help_text}\n```\n");
            }

            let _ = writeln!($out, "**Example error message:**\n```\n{error}\n```\n");
            let _ = writeln!($out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
            let _ = writeln!($out, "---\n");
        }
    };
}

fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::EmptyEnumeration { raw: String::new() },
        ParseError::DelimiterAtEdge { raw: "3,".to_string() },
        ParseError::ConsecutiveDelimiters { raw: "3,,5".to_string() },
        ParseError::InvalidEnumerationPart { raw: "3,x".to_string(), part: "x".to_string() },
        ParseError::InvalidGridChar { line: 2, col: 4, ch: '*' },
        ParseError::EmptyGrid,
        ParseError::NomError(nom::error::ErrorKind::Tag),
    ]
}

fn sample_validation_error() -> ValidationError {
    ValidationError::new(vec![
        Problem::EmptyEntry { index: 0 },
        Problem::CellIsBlock { index: 1, cell: CellRef::new(1, 1) },
        Problem::ClueUnknownEntry { index: 0, entry_id: "9A".to_string() },
    ])
}

fn all_store_error_variants() -> Vec<StoreError> {
    vec![
        StoreError::NotFound { id: "p404".to_string() },
        StoreError::Invalid { id: "p1".to_string(), source: sample_validation_error() },
    ]
}

fn all_word_list_error_variants() -> Vec<WordListError> {
    let mut errors = vec![WordListError::EmptyLetters, WordListError::EmptyPattern];
    // InvalidPattern--create by compiling an invalid regex
    if let Err(e) = fancy_regex::Regex::new("(?P<invalid") {
        errors.push(WordListError::InvalidPattern(e));
    }
    errors
}

fn generate_docs() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Table of Contents\n");
    let _ = writeln!(out, "- [Parse Errors (E001–E007)](#parse-errors)");
    let _ = writeln!(out, "- [Validation Errors (V001)](#validation-errors)");
    let _ = writeln!(out, "- [Store Errors (S001–S002)](#store-errors)");
    let _ = writeln!(out, "- [Word List Errors (W001–W003)](#word-list-errors)\n");

    let _ = writeln!(out, "## Parse Errors\n");
    let _ = writeln!(out, "Errors from parsing enumerations such as `3,5` and text grid diagrams.\n");
    generate_error_docs!(&mut out, all_parse_error_variants());

    let _ = writeln!(out, "## Validation Errors\n");
    let _ = writeln!(out, "A single error carrying every structural problem found in a puzzle.\n");
    generate_error_docs!(&mut out, [sample_validation_error()]);

    let _ = writeln!(out, "## Store Errors\n");
    let _ = writeln!(out, "Errors from storing and retrieving puzzles.\n");
    generate_error_docs!(&mut out, all_store_error_variants());

    let _ = writeln!(out, "## Word List Errors\n");
    let _ = writeln!(out, "Errors from anagram and pattern lookups.\n");
    generate_error_docs!(&mut out, all_word_list_error_variants());

    out
}

fn main() {
    print!("{}", generate_docs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_is_documented_once() {
        let docs = generate_docs();
        for code in ["E001", "E002", "E003", "E004", "E005", "E006", "E007", "V001", "S001", "S002", "W001", "W002", "W003"] {
            assert_eq!(docs.matches(&format!("### {code}: ")).count(), 1, "{code} should have one section");
        }
    }

    #[test]
    fn test_store_invalid_shows_nested_problems() {
        let docs = generate_docs();
        assert!(docs.contains("- entry[1] includes block cell (1,1)"));
    }
}
