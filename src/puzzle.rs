//! `puzzle`: the aggregate root tying a grid to its entries and clues.
//!
//! A `Puzzle` is built once (by an authoring tool or an import), validated with
//! [`crate::validation::validate_puzzle`], and treated as immutable afterwards.
//! Changes produce a new puzzle, which must be validated again.

use crate::entry::Entry;
use crate::grid::Grid;
use crate::numbering::generate_entries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Puzzle style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleType {
    #[default]
    Quick,
    Cryptic,
    Mixed,
}

impl fmt::Display for PuzzleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PuzzleType::Quick => "quick",
            PuzzleType::Cryptic => "cryptic",
            PuzzleType::Mixed => "mixed",
        })
    }
}

/// A clue attached to an entry by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clue {
    #[serde(default)]
    pub entry_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Clue {
    #[must_use]
    pub fn new(entry_id: impl Into<String>, text: impl Into<String>) -> Self {
        Clue { entry_id: entry_id.into(), text: text.into(), ..Clue::default() }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// A complete puzzle: grid, entries and clues.
///
/// Entries and clues are optional; a grid-only puzzle is valid and its entries
/// can be derived with [`Puzzle::with_derived_entries`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: PuzzleType,
    pub rows: usize,
    pub cols: usize,
    #[serde(default)]
    pub grid: Grid,
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub clues: Vec<Clue>,
}

impl Puzzle {
    /// A puzzle with the given grid, taking its dimensions from the matrix.
    #[must_use]
    pub fn from_grid(id: impl Into<String>, title: impl Into<String>, kind: PuzzleType, grid: Grid) -> Self {
        let rows = grid.height();
        let cols = grid.cells.first().map_or(0, Vec::len);
        Puzzle {
            id: id.into(),
            title: title.into(),
            kind,
            rows,
            cols,
            grid,
            entries: Vec::new(),
            clues: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    #[must_use]
    pub fn with_clues(mut self, clues: Vec<Clue>) -> Self {
        self.clues = clues;
        self
    }

    /// This puzzle with its entry list replaced by the one derived from the grid.
    ///
    /// Enumerations and answers of supplied entries are carried over to the
    /// derived entry with the same direction and number, when there is one.
    #[must_use]
    pub fn with_derived_entries(mut self) -> Self {
        let mut derived = generate_entries(&self.grid);
        for entry in &mut derived {
            if let Some(old) = self.entries.iter().find(|e| e.dir == entry.dir && e.num == entry.num) {
                entry.enumeration.clone_from(&old.enumeration);
                entry.answer.clone_from(&old.answer);
            }
        }
        log::debug!(
            "puzzle {}: replaced {} supplied entries with {} derived entries",
            self.id,
            self.entries.len(),
            derived.len()
        );
        self.entries = derived;
        self
    }

    /// The entry with the given (non-empty) id.
    #[must_use]
    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == Some(id))
    }

    /// The clue for the given entry id.
    #[must_use]
    pub fn clue_for(&self, entry_id: &str) -> Option<&Clue> {
        self.clues.iter().find(|c| c.entry_id == entry_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Direction;
    use crate::grid::CellRef;

    #[test]
    fn test_from_grid_takes_dimensions() {
        let puzzle = Puzzle::from_grid("p1", "Test", PuzzleType::Quick, Grid::with_blocks(3, 4, &[]));
        assert_eq!((puzzle.rows, puzzle.cols), (3, 4));
        assert!(puzzle.entries.is_empty());
    }

    #[test]
    fn test_with_derived_entries_keeps_answers() {
        let grid: Grid = "...\n.#.\n...".parse().unwrap();
        let supplied = vec![
            Entry::new(Direction::Across, 1, vec![CellRef::new(0, 0)]).with_answer("CAT").with_enumeration("3"),
            Entry::new(Direction::Across, 99, vec![]),
        ];
        let puzzle = Puzzle::from_grid("p1", "Test", PuzzleType::Quick, grid)
            .with_entries(supplied)
            .with_derived_entries();

        let one_across = puzzle.entry("1A").unwrap();
        assert_eq!(one_across.cells.len(), 3);
        assert_eq!(one_across.answer.as_deref(), Some("CAT"));
        assert_eq!(one_across.enumeration.as_deref(), Some("3"));
        assert!(puzzle.entries.iter().all(|e| e.num != 99));
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{
            "id": "p1", "title": "T", "type": "cryptic", "rows": 1, "cols": 2,
            "grid": {"cells": [[{}, {"block": true}]]},
            "clues": [{"entryId": "1A", "text": "Feline (3)", "tags": ["easy"]}]
        }"#;
        let puzzle: Puzzle = serde_json::from_str(json).unwrap();
        assert_eq!(puzzle.kind, PuzzleType::Cryptic);
        assert_eq!(puzzle.grid.rows, None);
        assert_eq!(puzzle.clues[0].entry_id, "1A");
        assert_eq!(puzzle.clue_for("1A").unwrap().tags, vec!["easy"]);
        assert!(puzzle.clues[0].explanation.is_none());
    }

    #[test]
    fn test_empty_explanation_stays_distinct_from_absent() {
        let clue: Clue = serde_json::from_str(r#"{"entryId":"1A","text":"x","explanation":""}"#).unwrap();
        assert_eq!(clue.explanation.as_deref(), Some(""));
    }
}
