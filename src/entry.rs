//! Across/down word slots.

use crate::grid::CellRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an entry.
///
/// Anything other than `across`/`down` is kept verbatim as `Other` so that the
/// validator can report it rather than deserialization rejecting the whole puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    Across,
    Down,
    Other(String),
}

impl Direction {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
            Direction::Other(s) => s,
        }
    }

    /// True for `Across` and `Down`.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Direction::Other(_))
    }

    /// One-letter suffix used in derived entry ids (`1A`, `2D`).
    fn id_suffix(&self) -> &str {
        match self {
            Direction::Across => "A",
            Direction::Down => "D",
            Direction::Other(s) => s,
        }
    }
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        match s.as_str() {
            "across" => Direction::Across,
            "down" => Direction::Down,
            _ => Direction::Other(s),
        }
    }
}

impl From<&str> for Direction {
    fn from(s: &str) -> Self {
        Direction::from(s.to_string())
    }
}

impl From<Direction> for String {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One across or down word slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub dir: Direction,
    pub num: u32,
    /// Cells from head to tail
    #[serde(default)]
    pub cells: Vec<CellRef>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Entry {
    /// A bare entry with no id, enumeration or answer.
    #[must_use]
    pub fn new(dir: Direction, num: u32, cells: Vec<CellRef>) -> Self {
        Entry { id: None, dir, num, cells, enumeration: None, answer: None }
    }

    /// Canonical id for a numbered slot, e.g. `1A` or `14D`.
    #[must_use]
    pub fn canonical_id(dir: &Direction, num: u32) -> String {
        format!("{num}{}", dir.id_suffix())
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_enumeration(mut self, enumeration: impl Into<String>) -> Self {
        self.enumeration = Some(enumeration.into());
        self
    }

    #[must_use]
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Number of cells in the span
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The id, if present and non-empty.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Human-readable label such as `14 down`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.num, self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_round_trip_through_json() {
        let dirs: Vec<Direction> = serde_json::from_str(r#"["across","down","diagonal"]"#).unwrap();
        assert_eq!(dirs, vec![Direction::Across, Direction::Down, Direction::Other("diagonal".to_string())]);
        assert_eq!(serde_json::to_string(&dirs).unwrap(), r#"["across","down","diagonal"]"#);
    }

    #[test]
    fn test_direction_is_case_sensitive() {
        assert_eq!(Direction::from("Across"), Direction::Other("Across".to_string()));
        assert!(!Direction::from("Across").is_known());
    }

    #[test]
    fn test_canonical_id() {
        assert_eq!(Entry::canonical_id(&Direction::Across, 1), "1A");
        assert_eq!(Entry::canonical_id(&Direction::Down, 14), "14D");
    }

    #[test]
    fn test_entry_json_uses_enum_key() {
        let entry = Entry::new(Direction::Down, 2, vec![CellRef::new(0, 1), CellRef::new(1, 1)])
            .with_id("2D")
            .with_enumeration("2");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["enum"], "2");
        assert_eq!(json["dir"], "down");
        assert!(json.get("answer").is_none());
    }

    #[test]
    fn test_empty_id_is_treated_as_absent() {
        let entry = Entry::new(Direction::Across, 1, vec![]).with_id("");
        assert_eq!(entry.id(), None);
        assert!(entry.is_empty());
        assert_eq!(entry.label(), "1 across");
    }
}
