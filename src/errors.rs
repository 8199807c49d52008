//! Error types for parsing enumerations and grid diagrams, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each variant has a unique code (E001-E007) for documentation lookup:
//!
//! - E001: `EmptyEnumeration` (Enumeration has no content)
//! - E002: `DelimiterAtEdge` (Enumeration starts or ends with a delimiter)
//! - E003: `ConsecutiveDelimiters` (Two delimiters in a row)
//! - E004: `InvalidEnumerationPart` (A part is not a positive integer)
//! - E005: `InvalidGridChar` (Unrecognised character in a grid diagram)
//! - E006: `EmptyGrid` (Grid diagram has no rows)
//! - E007: `NomError` (Low-level nom parser error)
//!
//! Validation failures are not parse errors: they are reported all at once by
//! [`crate::validation::ValidationError`] (code V001).
//!
//! # Examples
//!
//! ```
//! use cruciverb::enumeration::Enumeration;
//!
//! match "3,,5".parse::<Enumeration>() {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(en) => println!("{} letters", en.total),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::io;

/// Parser result type: input, output, with our custom `ParseError`
pub(crate) type PResult<'a, O> = nom::IResult<&'a str, O, Box<ParseError>>;

/// Custom error type for parsing operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("enumeration {raw:?} is empty")]
    EmptyEnumeration { raw: String },

    #[error("enumeration {raw:?} cannot start or end with a delimiter")]
    DelimiterAtEdge { raw: String },

    #[error("enumeration {raw:?} contains consecutive delimiters")]
    ConsecutiveDelimiters { raw: String },

    #[error("enumeration {raw:?} has invalid part {part:?}")]
    InvalidEnumerationPart { raw: String, part: String },

    #[error("invalid character '{ch}' in grid diagram at line {line}, column {col}")]
    InvalidGridChar { line: usize, col: usize, ch: char },

    #[error("grid diagram has no rows")]
    EmptyGrid,

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl From<ParseError> for io::Error {
    fn from(pe: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl<'a> NomParseError<&'a str> for Box<ParseError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(ParseError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::EmptyEnumeration { .. } => "E001",
            ParseError::DelimiterAtEdge { .. } => "E002",
            ParseError::ConsecutiveDelimiters { .. } => "E003",
            ParseError::InvalidEnumerationPart { .. } => "E004",
            ParseError::InvalidGridChar { .. } => "E005",
            ParseError::EmptyGrid => "E006",
            ParseError::NomError(_) => "E007",
        }
    }

    /// True for the variants produced by the enumeration parser.
    #[must_use]
    pub fn is_enumeration_error(&self) -> bool {
        matches!(
            self,
            ParseError::EmptyEnumeration { .. }
                | ParseError::DelimiterAtEdge { .. }
                | ParseError::ConsecutiveDelimiters { .. }
                | ParseError::InvalidEnumerationPart { .. }
        )
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::EmptyEnumeration { .. } => "Enumeration has no content",
            ParseError::DelimiterAtEdge { .. } => "Enumeration starts or ends with a delimiter",
            ParseError::ConsecutiveDelimiters { .. } => "Enumeration contains two delimiters in a row",
            ParseError::InvalidEnumerationPart { .. } => "Enumeration part is not a positive integer",
            ParseError::InvalidGridChar { .. } => "Unrecognised character in grid diagram",
            ParseError::EmptyGrid => "Grid diagram has no rows",
            ParseError::NomError(_) => "Low-level parser error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::EmptyEnumeration { .. } => "An enumeration must contain at least one letter count. Whitespace alone does not count.",
            ParseError::DelimiterAtEdge { .. } => "Commas and hyphens separate letter counts, so they can only appear between two numbers.",
            ParseError::ConsecutiveDelimiters { .. } => "Every comma or hyphen must be followed by a number before the next delimiter.",
            ParseError::InvalidEnumerationPart { .. } => "Each part of an enumeration is a letter count and must be a whole number greater than zero.",
            ParseError::InvalidGridChar { .. } => "Grid diagrams use '#' for blocks, '.' for empty open cells, letters or digits for solutions and '!' before a letter for a given cell.",
            ParseError::EmptyGrid => "A grid diagram needs at least one non-empty line.",
            ParseError::NomError(_) => "The low-level tokenizer rejected the input. This usually accompanies a more specific error.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::EmptyEnumeration { .. } => Some("Example: use '5' or '3,4' or '4-4'"),
            ParseError::DelimiterAtEdge { .. } => Some("Remove the leading or trailing ',' or '-' (e.g., '3,5' not '3,5,')"),
            ParseError::ConsecutiveDelimiters { .. } => Some("Remove the repeated delimiter (e.g., '3,5' not '3,,5')"),
            ParseError::InvalidEnumerationPart { .. } => Some("Parts must be positive whole numbers (e.g., '2,3' not '0,3' or 'a,3')"),
            ParseError::InvalidGridChar { .. } => Some("Example row: 'CAT#.!S'"),
            ParseError::EmptyGrid => Some("Provide one line of cells per grid row"),
            ParseError::NomError(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<ParseError> {
        vec![
            ParseError::EmptyEnumeration { raw: String::new() },
            ParseError::DelimiterAtEdge { raw: ",3".to_string() },
            ParseError::ConsecutiveDelimiters { raw: "3,,5".to_string() },
            ParseError::InvalidEnumerationPart { raw: "a".to_string(), part: "a".to_string() },
            ParseError::InvalidGridChar { line: 1, col: 2, ch: '?' },
            ParseError::EmptyGrid,
            ParseError::NomError(ErrorKind::Tag),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = ParseError::ConsecutiveDelimiters { raw: "3,,5".to_string() };
        assert_eq!(err.code(), "E003");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E003"));
        assert!(detailed.contains("3,,5"));
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 7);
    }

    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(code.starts_with("E0"));
            assert!(code[1..].parse::<u16>().is_ok());
        }
    }

    #[test]
    fn test_enumeration_errors_mention_raw_input() {
        for err in all_variants().into_iter().filter(ParseError::is_enumeration_error) {
            assert!(err.to_string().starts_with("enumeration"), "{err}");
        }
        let err = ParseError::InvalidEnumerationPart { raw: "3,x".to_string(), part: "x".to_string() };
        assert_eq!(err.to_string(), r#"enumeration "3,x" has invalid part "x""#);
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = ParseError::NomError(ErrorKind::Digit);
        assert_eq!(err.display_detailed(), format!("{} (E007)", err));
    }

    #[test]
    fn test_help_text_differs_from_message() {
        for err in all_variants() {
            if let Some(help) = err.help() {
                assert_ne!(help, err.to_string());
                assert!(help.len() > 10, "Help text for {:?} should be substantial", err);
            }
        }
    }
}
