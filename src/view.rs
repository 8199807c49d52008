//! `view`: the answer-free projection of a puzzle.
//!
//! [`to_public_view`] is the only way puzzle data should leave the trusted side:
//! the public types have no solution or answer fields at all, so nothing built
//! from them can leak one. There is no mode that serves solutions.

use crate::entry::{Direction, Entry};
use crate::grid::{CellRef, Grid};
use crate::puzzle::{Clue, Puzzle, PuzzleType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzlePublic {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PuzzleType,
    pub rows: usize,
    pub cols: usize,
    pub grid: GridPublic,
    pub entries: Vec<EntryPublic>,
    pub clues: Vec<CluePublic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridPublic {
    pub rows: usize,
    pub cols: usize,
    /// Empty when the source grid does not have the declared shape
    pub cells: Vec<Vec<CellPublic>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellPublic {
    pub r: usize,
    pub c: usize,
    pub block: bool,
    pub given: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPublic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub dir: Direction,
    pub num: u32,
    pub cells: Vec<CellRef>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CluePublic {
    pub entry_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Project a puzzle to its public view.
///
/// Works on any puzzle, valid or not. The cell matrix is copied only when it has
/// exactly the declared `rows × cols` shape; otherwise the public grid is empty.
#[must_use]
pub fn to_public_view(puzzle: &Puzzle) -> PuzzlePublic {
    PuzzlePublic {
        id: puzzle.id.clone(),
        title: puzzle.title.clone(),
        kind: puzzle.kind,
        rows: puzzle.rows,
        cols: puzzle.cols,
        grid: public_grid(&puzzle.grid, puzzle.rows, puzzle.cols),
        entries: puzzle.entries.iter().map(EntryPublic::from).collect(),
        clues: puzzle.clues.iter().map(CluePublic::from).collect(),
    }
}

fn public_grid(grid: &Grid, rows: usize, cols: usize) -> GridPublic {
    let intact = rows > 0
        && cols > 0
        && grid.cells.len() == rows
        && grid.cells.iter().all(|row| row.len() == cols);

    let cells = if intact {
        grid.cells
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| CellPublic { r, c, block: cell.block, given: cell.given })
                    .collect()
            })
            .collect()
    } else {
        Vec::new()
    };

    GridPublic { rows, cols, cells }
}

impl From<&Entry> for EntryPublic {
    fn from(e: &Entry) -> Self {
        EntryPublic {
            id: e.id.clone(),
            dir: e.dir.clone(),
            num: e.num,
            cells: e.cells.clone(),
            enumeration: e.enumeration.clone(),
        }
    }
}

impl From<&Clue> for CluePublic {
    fn from(c: &Clue) -> Self {
        CluePublic {
            entry_id: c.entry_id.clone(),
            text: c.text.clone(),
            explanation: c.explanation.clone(),
            tags: c.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::numbering::generate_entries;

    fn solved_puzzle() -> Puzzle {
        let grid: Grid = "CAT\nA#O\n!BOW".parse().unwrap();
        let entries = generate_entries(&grid)
            .into_iter()
            .map(|e| {
                let enumeration = e.cells.len().to_string();
                e.with_enumeration(enumeration).with_answer("XYZ")
            })
            .collect();
        Puzzle::from_grid("p1", "Test", PuzzleType::Cryptic, grid)
            .with_entries(entries)
            .with_clues(vec![Clue::new("1A", "Feline (3)").with_explanation("def").with_tags(["animal"])])
    }

    #[test]
    fn test_public_view_keeps_structure() {
        let puzzle = solved_puzzle();
        let public = to_public_view(&puzzle);

        assert_eq!(public.grid.cells.len(), 3);
        assert_eq!(public.grid.cells[1][1], CellPublic { r: 1, c: 1, block: true, given: false });
        assert!(public.grid.cells[2][0].given);
        assert_eq!(public.entries.len(), puzzle.entries.len());
        assert_eq!(public.entries[0].enumeration.as_deref(), Some("3"));
        assert_eq!(public.clues[0].explanation.as_deref(), Some("def"));
        assert_eq!(public.clues[0].tags, vec!["animal"]);
    }

    #[test]
    fn test_public_json_has_no_solutions_or_answers() {
        let json = serde_json::to_string(&to_public_view(&solved_puzzle())).unwrap();
        assert!(!json.contains("solution"));
        assert!(!json.contains("answer"));
        assert!(!json.contains("XYZ"));
        assert!(json.contains(r#""entryId":"1A""#));
        assert!(json.contains(r#""type":"cryptic""#));
    }

    #[test]
    fn test_malformed_grid_projects_to_empty_matrix() {
        let mut puzzle = solved_puzzle();
        puzzle.grid.cells[2].push(Cell::letter('Q'));
        let public = to_public_view(&puzzle);
        assert!(public.grid.cells.is_empty());
        assert_eq!((public.grid.rows, public.grid.cols), (3, 3));
    }

    #[test]
    fn test_coordinates_come_from_position() {
        let mut puzzle = solved_puzzle();
        puzzle.grid.cells[0][0] = Cell::letter('C').at(7, 7);
        let public = to_public_view(&puzzle);
        assert_eq!((public.grid.cells[0][0].r, public.grid.cells[0][0].c), (0, 0));
    }
}
