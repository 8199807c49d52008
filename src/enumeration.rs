//! `enumeration`: crossword length annotations such as `"3,5"` or `"4-4"`.
//!
//! An enumeration tells the solver how many letters an answer has and how they
//! split into words. Commas and hyphens are treated the same: both simply end
//! one part and start the next. Whitespace anywhere in the string is ignored.
//!
//! | input       | parts       | total |
//! |-------------|-------------|-------|
//! | `"3"`       | `[3]`       | 3     |
//! | `"3,5"`     | `[3, 5]`    | 8     |
//! | `"4-4"`     | `[4, 4]`    | 8     |
//! | `"3,4-5,2"` | `[3,4,5,2]` | 14    |

use crate::errors::{PResult, ParseError};
use nom::bytes::complete::take_till1;
use nom::character::complete::one_of;
use nom::multi::separated_list1;
use std::fmt;
use std::str::FromStr;

/// Characters that separate enumeration parts
pub const DELIMITERS: &str = ",-";

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(c)
}

/// A parsed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// The source text, trimmed of surrounding whitespace
    pub raw: String,
    /// Letter counts of each part, in order; all positive
    pub parts: Vec<usize>,
    /// Sum of `parts`
    pub total: usize,
}

impl Enumeration {
    /// True when the answer is split into more than one part.
    #[must_use]
    pub fn is_multiword(&self) -> bool {
        self.parts.len() > 1
    }
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Enumeration {
    type Err = Box<ParseError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if compact.is_empty() {
            return Err(Box::new(ParseError::EmptyEnumeration { raw: raw.to_string() }));
        }
        if compact.starts_with(is_delimiter) || compact.ends_with(is_delimiter) {
            return Err(Box::new(ParseError::DelimiterAtEdge { raw: raw.to_string() }));
        }
        let doubled = compact
            .chars()
            .zip(compact.chars().skip(1))
            .any(|(a, b)| is_delimiter(a) && is_delimiter(b));
        if doubled {
            return Err(Box::new(ParseError::ConsecutiveDelimiters { raw: raw.to_string() }));
        }

        let fields = match fields(&compact) {
            Ok(("", fields)) => fields,
            Ok((rest, _)) => {
                return Err(Box::new(ParseError::InvalidEnumerationPart {
                    raw: raw.to_string(),
                    part: rest.to_string(),
                }))
            }
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => return Err(e),
            Err(nom::Err::Incomplete(_)) => {
                return Err(Box::new(ParseError::EmptyEnumeration { raw: raw.to_string() }))
            }
        };

        let parts = fields
            .into_iter()
            .map(|field| match field.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(Box::new(ParseError::InvalidEnumerationPart {
                    raw: raw.to_string(),
                    part: field.to_string(),
                })),
            })
            .collect::<Result<Vec<_>, _>>()?;

        // the part that pushes the total past usize::MAX is reported as invalid
        let total = parts
            .iter()
            .try_fold(0usize, |acc, &n| acc.checked_add(n).ok_or(n))
            .map_err(|n| {
                Box::new(ParseError::InvalidEnumerationPart { raw: raw.to_string(), part: n.to_string() })
            })?;
        Ok(Enumeration { raw: raw.to_string(), parts, total })
    }
}

// Splits a whitespace-free enumeration into its raw fields.
fn fields(input: &str) -> PResult<'_, Vec<&str>> {
    separated_list1(one_of(DELIMITERS), take_till1(is_delimiter))(input)
}

/// Parse an enumeration string.
///
/// # Errors
///
/// Returns one of the enumeration variants of [`ParseError`] when the string is empty,
/// starts or ends with a delimiter, doubles a delimiter, or has a part that is not a
/// positive integer.
pub fn parse_enum(raw: &str) -> Result<Enumeration, Box<ParseError>> {
    raw.parse()
}

/// Number of letters in an answer, as an enumeration counts them.
///
/// Letters and digits count; spaces, hyphens, apostrophes and all other
/// punctuation are ignored.
#[must_use]
pub fn normalized_answer_len(answer: &str) -> usize {
    answer.chars().filter(|c| c.is_alphanumeric()).count()
}
