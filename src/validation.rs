//! Structural validation of puzzles.
//!
//! [`validate_puzzle`] checks that a puzzle is internally consistent: grid shape,
//! entry geometry, enumerations, answer lengths and clue references. It does not
//! judge quality (symmetry, word choice, difficulty) and never fills in anything.
//!
//! Validation reports everything it finds. Each check group is a pure function
//! returning zero or more [`Problem`]s; the groups run in a fixed order and their
//! results are concatenated, so one call gives an author the full list to fix.
//!
//! # Error Handling
//!
//! - V001: `ValidationError` (one or more structural problems; see [`ValidationError::problems`])
//!
//! # Examples
//!
//! ```
//! use cruciverb::grid::Grid;
//! use cruciverb::puzzle::{Puzzle, PuzzleType};
//! use cruciverb::validation::validate_puzzle;
//!
//! let grid = Grid::with_blocks(5, 5, &[(0, 1), (1, 1), (3, 3)]);
//! let puzzle = Puzzle::from_grid("p1", "Test", PuzzleType::Quick, grid);
//! assert!(validate_puzzle(&puzzle).is_ok());
//! ```

use crate::entry::{Direction, Entry};
use crate::enumeration::{normalized_answer_len, Enumeration};
use crate::errors::ParseError;
use crate::grid::{CellRef, Grid};
use crate::puzzle::{Clue, Puzzle};
use instant::Instant;
use log::debug;
use std::collections::{HashMap, HashSet};

fn opt_coord(v: &Option<usize>) -> String {
    v.map_or_else(|| "-".to_string(), |n| n.to_string())
}

/// One structural problem found in a puzzle.
///
/// The `Display` form is the human-readable message reported to authors.
/// Entry and clue problems carry the index of the offending item in its list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    #[error("puzzle dimensions must be > 0, got {rows}x{cols}")]
    Dimensions { rows: usize, cols: usize },

    #[error("grid rows ({grid}) does not match puzzle rows ({puzzle})")]
    GridRowsMismatch { grid: usize, puzzle: usize },

    #[error("grid cols ({grid}) does not match puzzle cols ({puzzle})")]
    GridColsMismatch { grid: usize, puzzle: usize },

    #[error("grid has {found} rows of cells, expected {expected}")]
    RowCount { found: usize, expected: usize },

    #[error("grid row {row} has {found} cols, expected {expected}")]
    RowWidth { row: usize, found: usize, expected: usize },

    #[error("cell coords mismatch at [{r},{c}]: has r={} c={}", opt_coord(.found_r), opt_coord(.found_c))]
    CoordsMismatch { r: usize, c: usize, found_r: Option<usize>, found_c: Option<usize> },

    #[error("block cell [{r},{c}] must not have a solution letter")]
    BlockHasSolution { r: usize, c: usize },

    #[error("block cell [{r},{c}] must not be marked as given")]
    BlockIsGiven { r: usize, c: usize },

    #[error("entry[{index}] has invalid direction {dir:?}")]
    InvalidDirection { index: usize, dir: String },

    #[error("entry[{index}] has invalid number {num}")]
    InvalidNumber { index: usize, num: u32 },

    #[error("entry[{index}] has no cells")]
    EmptyEntry { index: usize },

    #[error("entry[{index}] cell[{cell_index}] out of bounds: {cell}")]
    CellOutOfBounds { index: usize, cell_index: usize, cell: CellRef },

    #[error("entry[{index}] includes block cell {cell}")]
    CellIsBlock { index: usize, cell: CellRef },

    #[error("entry[{index}] {dir} cells not contiguous at index {at}: {prev}->{curr}")]
    NotContiguous { index: usize, dir: Direction, at: usize, prev: CellRef, curr: CellRef },

    #[error("entry[{index}] enum invalid: {error}")]
    InvalidEnumeration { index: usize, error: Box<ParseError> },

    #[error("entry[{index}] enum total {total} does not match cell count {cells}")]
    EnumerationMismatch { index: usize, total: usize, cells: usize },

    #[error("entry[{index}] answer length {len} does not match cell count {cells} (answer={answer:?})")]
    AnswerMismatch { index: usize, len: usize, cells: usize, answer: String },

    #[error("duplicate entry number for {dir} {num}")]
    DuplicateNumber { dir: Direction, num: u32 },

    #[error("cell {cell} belongs to multiple {dir} entries (entry[{first}] and entry[{second}])")]
    CellOwnedTwice { cell: CellRef, dir: Direction, first: usize, second: usize },

    #[error("clue[{index}] missing entryId")]
    ClueMissingEntryId { index: usize },

    #[error("clue[{index}] references unknown entryId {entry_id:?}")]
    ClueUnknownEntry { index: usize, entry_id: String },

    #[error("clue[{index}] has empty text")]
    ClueEmptyText { index: usize },
}

/// A puzzle failed validation.
///
/// Carries every problem found, in check order. Never empty when returned by
/// [`validate_puzzle`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", format_problems(.problems))]
pub struct ValidationError {
    problems: Vec<Problem>,
}

fn format_problems(problems: &[Problem]) -> String {
    if problems.is_empty() {
        return "validation failed".to_string();
    }
    let mut out = "validation failed:".to_string();
    for p in problems {
        out.push_str("\n- ");
        out.push_str(&p.to_string());
    }
    out
}

impl ValidationError {
    #[must_use]
    pub fn new(problems: Vec<Problem>) -> Self {
        ValidationError { problems }
    }

    /// The problems, in the order they were found
    #[must_use]
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// The problems as human-readable strings
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.problems.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }

    /// Returns the error code
    #[must_use]
    pub fn code(&self) -> &'static str {
        "V001"
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        "Puzzle failed structural validation"
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        "The puzzle's grid, entries or clues are inconsistent with each other. Every problem found is listed; fix them all and validate again."
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        Some("Omit the entry list to have entries derived from the grid, or correct each listed problem")
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Validate a puzzle's structure.
///
/// Checks, in order:
/// 1. dimensions are positive;
/// 2. the grid matches the declared shape, coordinates agree with positions, and
///    block cells carry no solution and are not given;
/// 3. if entries are supplied: directions, numbers, bounds, blocks, contiguity,
///    enumeration and answer lengths, unique `(direction, number)` pairs, and no
///    cell owned by two entries of the same direction;
/// 4. if entries and clues are both supplied: every clue names a known entry and
///    has non-blank text.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every problem found.
pub fn validate_puzzle(puzzle: &Puzzle) -> Result<(), ValidationError> {
    let started = Instant::now();

    let mut problems = check_dimensions(puzzle.rows, puzzle.cols);
    problems.extend(check_grid(&puzzle.grid, puzzle.rows, puzzle.cols));
    if !puzzle.entries.is_empty() {
        problems.extend(check_entries(&puzzle.grid, puzzle.rows, puzzle.cols, &puzzle.entries));
        if !puzzle.clues.is_empty() {
            problems.extend(check_clues(&puzzle.entries, &puzzle.clues));
        }
    }

    debug!(
        "validated puzzle {:?} in {:?}: {} problem(s)",
        puzzle.id,
        started.elapsed(),
        problems.len()
    );

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(problems))
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Vec<Problem> {
    if rows == 0 || cols == 0 {
        vec![Problem::Dimensions { rows, cols }]
    } else {
        Vec::new()
    }
}

fn check_grid(grid: &Grid, rows: usize, cols: usize) -> Vec<Problem> {
    let mut problems = Vec::new();

    if let Some(grid_rows) = grid.rows.filter(|&n| n != rows) {
        problems.push(Problem::GridRowsMismatch { grid: grid_rows, puzzle: rows });
    }
    if let Some(grid_cols) = grid.cols.filter(|&n| n != cols) {
        problems.push(Problem::GridColsMismatch { grid: grid_cols, puzzle: cols });
    }

    if grid.cells.len() != rows {
        problems.push(Problem::RowCount { found: grid.cells.len(), expected: rows });
        return problems;
    }

    for (r, row) in grid.cells.iter().enumerate() {
        if row.len() != cols {
            problems.push(Problem::RowWidth { row: r, found: row.len(), expected: cols });
            continue;
        }
        for (c, cell) in row.iter().enumerate() {
            if cell.has_coords() && (cell.r != Some(r) || cell.c != Some(c)) {
                problems.push(Problem::CoordsMismatch { r, c, found_r: cell.r, found_c: cell.c });
            }
            if cell.block {
                if cell.solution.is_some() {
                    problems.push(Problem::BlockHasSolution { r, c });
                }
                if cell.given {
                    problems.push(Problem::BlockIsGiven { r, c });
                }
            }
        }
    }

    problems
}

fn check_entries(grid: &Grid, rows: usize, cols: usize, entries: &[Entry]) -> Vec<Problem> {
    let mut problems: Vec<Problem> = entries
        .iter()
        .enumerate()
        .flat_map(|(index, entry)| check_entry(grid, rows, cols, index, entry))
        .collect();
    problems.extend(check_unique_numbers(entries));
    problems.extend(check_cell_ownership(entries));
    problems
}

fn check_entry(grid: &Grid, rows: usize, cols: usize, index: usize, entry: &Entry) -> Vec<Problem> {
    let mut problems = Vec::new();

    if !entry.dir.is_known() {
        problems.push(Problem::InvalidDirection { index, dir: entry.dir.to_string() });
    }
    if entry.num == 0 {
        problems.push(Problem::InvalidNumber { index, num: entry.num });
    }
    if entry.cells.is_empty() {
        problems.push(Problem::EmptyEntry { index });
        return problems;
    }

    for (cell_index, &cell) in entry.cells.iter().enumerate() {
        if cell.r >= rows || cell.c >= cols {
            problems.push(Problem::CellOutOfBounds { index, cell_index, cell });
            continue;
        }
        // a missing cell inside the declared bounds is a shape problem, reported by check_grid
        if grid.cell(cell.r, cell.c).is_some_and(|gc| gc.block) {
            problems.push(Problem::CellIsBlock { index, cell });
        }
    }

    for (at, pair) in entry.cells.windows(2).enumerate() {
        let (prev, curr) = (pair[0], pair[1]);
        let contiguous = match entry.dir {
            Direction::Across => curr.r == prev.r && prev.c.checked_add(1) == Some(curr.c),
            Direction::Down => curr.c == prev.c && prev.r.checked_add(1) == Some(curr.r),
            Direction::Other(_) => true,
        };
        if !contiguous {
            problems.push(Problem::NotContiguous { index, dir: entry.dir.clone(), at: at + 1, prev, curr });
        }
    }

    let cells = entry.cells.len();
    if let Some(raw) = &entry.enumeration {
        match raw.parse::<Enumeration>() {
            Ok(en) if en.total != cells => {
                problems.push(Problem::EnumerationMismatch { index, total: en.total, cells });
            }
            Ok(_) => {}
            Err(error) => problems.push(Problem::InvalidEnumeration { index, error }),
        }
    }
    if let Some(answer) = &entry.answer {
        let len = normalized_answer_len(answer);
        if len != cells {
            problems.push(Problem::AnswerMismatch { index, len, cells, answer: answer.clone() });
        }
    }

    problems
}

fn check_unique_numbers(entries: &[Entry]) -> Vec<Problem> {
    let mut seen: HashSet<(&Direction, u32)> = HashSet::new();
    entries
        .iter()
        .filter(|e| !seen.insert((&e.dir, e.num)))
        .map(|e| Problem::DuplicateNumber { dir: e.dir.clone(), num: e.num })
        .collect()
}

// A cell may sit in one across and one down entry, never two of the same direction.
fn check_cell_ownership(entries: &[Entry]) -> Vec<Problem> {
    let mut owners: HashMap<(CellRef, &Direction), usize> = HashMap::new();
    let mut problems = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        for &cell in &entry.cells {
            match owners.get(&(cell, &entry.dir)) {
                // the same entry listing a cell twice is a contiguity problem, not an ownership one
                Some(&first) if first != index => problems.push(Problem::CellOwnedTwice {
                    cell,
                    dir: entry.dir.clone(),
                    first,
                    second: index,
                }),
                Some(_) => {}
                None => {
                    owners.insert((cell, &entry.dir), index);
                }
            }
        }
    }
    problems
}

fn check_clues(entries: &[Entry], clues: &[Clue]) -> Vec<Problem> {
    let entry_ids: HashSet<&str> = entries.iter().filter_map(Entry::id).collect();
    let mut problems = Vec::new();

    for (index, clue) in clues.iter().enumerate() {
        if clue.entry_id.is_empty() {
            problems.push(Problem::ClueMissingEntryId { index });
        } else if !entry_ids.is_empty() && !entry_ids.contains(clue.entry_id.as_str()) {
            problems.push(Problem::ClueUnknownEntry { index, entry_id: clue.entry_id.clone() });
        }
        if clue.text.trim().is_empty() {
            problems.push(Problem::ClueEmptyText { index });
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::puzzle::PuzzleType;

    fn puzzle(grid: Grid) -> Puzzle {
        Puzzle::from_grid("p1", "Test", PuzzleType::Quick, grid)
    }

    fn across(num: u32, cells: &[(usize, usize)]) -> Entry {
        Entry::new(Direction::Across, num, cells.iter().map(|&rc| CellRef::from(rc)).collect())
    }

    fn down(num: u32, cells: &[(usize, usize)]) -> Entry {
        Entry::new(Direction::Down, num, cells.iter().map(|&rc| CellRef::from(rc)).collect())
    }

    fn problems(p: &Puzzle) -> Vec<Problem> {
        validate_puzzle(p).map_or_else(ValidationError::into_problems, |()| Vec::new())
    }

    #[test]
    fn test_minimal_grid_only_puzzle_is_valid() {
        let p = puzzle(Grid::with_blocks(5, 5, &[(0, 1), (1, 1), (3, 3)]));
        assert_eq!(validate_puzzle(&p), Ok(()));
    }

    #[test]
    fn test_zero_dimensions() {
        let mut p = puzzle(Grid::default());
        p.cols = 3;
        assert_eq!(problems(&p), vec![Problem::Dimensions { rows: 0, cols: 3 }]);
    }

    #[test]
    fn test_declared_grid_dimensions_must_match() {
        let mut p = puzzle(Grid::with_blocks(3, 3, &[]));
        p.grid.rows = Some(4);
        p.grid.cols = Some(2);
        assert_eq!(
            problems(&p),
            vec![
                Problem::GridRowsMismatch { grid: 4, puzzle: 3 },
                Problem::GridColsMismatch { grid: 2, puzzle: 3 },
            ]
        );
    }

    #[test]
    fn test_row_width_mismatch_skips_only_that_row() {
        let mut p = puzzle(Grid::with_blocks(3, 3, &[]));
        p.grid.cells[1].pop();
        p.grid.cells[2][0] = Cell::block().given();
        assert_eq!(
            problems(&p),
            vec![
                Problem::RowWidth { row: 1, found: 2, expected: 3 },
                Problem::BlockIsGiven { r: 2, c: 0 },
            ]
        );
    }

    #[test]
    fn test_row_count_mismatch_does_not_hide_entry_problems() {
        let mut p = puzzle(Grid::with_blocks(3, 3, &[]));
        p.grid.cells.pop();
        p.entries = vec![across(0, &[(0, 0), (0, 1)])];
        let found = problems(&p);
        assert!(found.contains(&Problem::RowCount { found: 2, expected: 3 }));
        assert!(found.contains(&Problem::InvalidNumber { index: 0, num: 0 }));
    }

    #[test]
    fn test_explicit_coords_must_match_position() {
        let mut p = puzzle(Grid::with_blocks(2, 2, &[]));
        p.grid.cells[0][0] = Cell::open().at(0, 0);
        p.grid.cells[1][1] = Cell::open().at(0, 0);
        p.grid.cells[0][1].c = Some(1);
        let found = problems(&p);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].to_string(), "cell coords mismatch at [0,1]: has r=- c=1");
        assert_eq!(found[1], Problem::CoordsMismatch { r: 1, c: 1, found_r: Some(0), found_c: Some(0) });
    }

    #[test]
    fn test_block_cells_carry_nothing() {
        let mut p = puzzle(Grid::with_blocks(1, 3, &[]));
        p.grid.cells[0][1] = Cell { block: true, given: true, solution: Some('X'), ..Cell::default() };
        assert_eq!(
            problems(&p),
            vec![Problem::BlockHasSolution { r: 0, c: 1 }, Problem::BlockIsGiven { r: 0, c: 1 }]
        );
    }

    #[test]
    fn test_contiguous_across_entry_is_valid() {
        let p = puzzle(Grid::with_blocks(5, 5, &[(0, 1)]))
            .with_entries(vec![across(1, &[(0, 2), (0, 3), (0, 4)]).with_enumeration("3").with_answer("CAT")]);
        assert_eq!(validate_puzzle(&p), Ok(()));
    }

    #[test]
    fn test_non_contiguous_entry_rejected_even_when_lengths_match() {
        let p = puzzle(Grid::with_blocks(5, 5, &[(0, 1)]))
            .with_entries(vec![across(1, &[(0, 0), (0, 2), (0, 3)]).with_enumeration("3").with_answer("CAT")]);
        assert_eq!(
            problems(&p),
            vec![Problem::NotContiguous {
                index: 0,
                dir: Direction::Across,
                at: 1,
                prev: CellRef::new(0, 0),
                curr: CellRef::new(0, 2),
            }]
        );
    }

    #[test]
    fn test_huge_coordinates_are_reported_not_overflowed() {
        let json = r#"{"id":"p1","rows":1,"cols":2,"grid":{"cells":[[{},{}]]},
            "entries":[{"dir":"across","num":1,"cells":[{"r":0,"c":18446744073709551615},{"r":0,"c":0}]},
                       {"dir":"down","num":1,"cells":[{"r":18446744073709551615,"c":1},{"r":0,"c":1}]}]}"#;
        let p: Puzzle = serde_json::from_str(json).unwrap();

        let max = CellRef::new(0, usize::MAX);
        let max_down = CellRef::new(usize::MAX, 1);
        assert_eq!(
            problems(&p),
            vec![
                Problem::CellOutOfBounds { index: 0, cell_index: 0, cell: max },
                Problem::NotContiguous { index: 0, dir: Direction::Across, at: 1, prev: max, curr: CellRef::new(0, 0) },
                Problem::CellOutOfBounds { index: 1, cell_index: 0, cell: max_down },
                Problem::NotContiguous { index: 1, dir: Direction::Down, at: 1, prev: max_down, curr: CellRef::new(0, 1) },
            ]
        );
    }

    #[test]
    fn test_down_contiguity() {
        let p = puzzle(Grid::with_blocks(3, 3, &[])).with_entries(vec![down(1, &[(0, 0), (1, 1), (2, 1)])]);
        let found = problems(&p);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].to_string(), "entry[0] down cells not contiguous at index 1: (0,0)->(1,1)");
    }

    #[test]
    fn test_enumeration_answer_and_cell_count_disagree() {
        let p = puzzle(Grid::with_blocks(1, 4, &[]))
            .with_entries(vec![across(1, &[(0, 0), (0, 1), (0, 2), (0, 3)]).with_enumeration("2,3").with_answer("ICE-CREAM")]);
        assert_eq!(
            problems(&p),
            vec![
                Problem::EnumerationMismatch { index: 0, total: 5, cells: 4 },
                Problem::AnswerMismatch { index: 0, len: 8, cells: 4, answer: "ICE-CREAM".to_string() },
            ]
        );
    }

    #[test]
    fn test_all_three_lengths_agree() {
        let p = puzzle(Grid::with_blocks(1, 8, &[]))
            .with_entries(vec![across(1, &(0..8).map(|c| (0, c)).collect::<Vec<_>>())
                .with_enumeration("3-5")
                .with_answer("ICE-CREAM")]);
        assert_eq!(validate_puzzle(&p), Ok(()));
    }

    #[test]
    fn test_invalid_enumeration_is_reported_not_raised() {
        let p = puzzle(Grid::with_blocks(1, 3, &[]))
            .with_entries(vec![across(1, &[(0, 0), (0, 1), (0, 2)]).with_enumeration("3,,")]);
        let found = problems(&p);
        assert_eq!(found.len(), 1);
        assert!(matches!(found[0], Problem::InvalidEnumeration { index: 0, .. }));
        assert!(found[0].to_string().contains("\"3,,\""));
    }

    #[test]
    fn test_present_but_empty_enumeration_is_invalid() {
        let p = puzzle(Grid::with_blocks(1, 2, &[])).with_entries(vec![across(1, &[(0, 0), (0, 1)]).with_enumeration("")]);
        assert!(matches!(problems(&p)[..], [Problem::InvalidEnumeration { .. }]));
    }

    #[test]
    fn test_entry_geometry_problems() {
        let p = puzzle(Grid::with_blocks(3, 3, &[(1, 1)])).with_entries(vec![
            Entry::new(Direction::from("sideways"), 0, vec![]),
            across(2, &[(1, 0), (1, 1), (1, 2), (1, 3)]),
        ]);
        assert_eq!(
            problems(&p),
            vec![
                Problem::InvalidDirection { index: 0, dir: "sideways".to_string() },
                Problem::InvalidNumber { index: 0, num: 0 },
                Problem::EmptyEntry { index: 0 },
                Problem::CellIsBlock { index: 1, cell: CellRef::new(1, 1) },
                Problem::CellOutOfBounds { index: 1, cell_index: 3, cell: CellRef::new(1, 3) },
            ]
        );
    }

    #[test]
    fn test_duplicate_numbers_per_direction() {
        let p = puzzle(Grid::with_blocks(3, 3, &[])).with_entries(vec![
            across(1, &[(0, 0), (0, 1), (0, 2)]),
            down(1, &[(0, 0), (1, 0), (2, 0)]),
            across(1, &[(2, 0), (2, 1), (2, 2)]),
        ]);
        assert_eq!(problems(&p), vec![Problem::DuplicateNumber { dir: Direction::Across, num: 1 }]);
    }

    #[test]
    fn test_cell_owned_twice_in_one_direction() {
        let p = puzzle(Grid::with_blocks(1, 4, &[])).with_entries(vec![
            across(1, &[(0, 0), (0, 1), (0, 2)]),
            across(2, &[(0, 2), (0, 3)]),
        ]);
        assert_eq!(
            problems(&p),
            vec![Problem::CellOwnedTwice { cell: CellRef::new(0, 2), dir: Direction::Across, first: 0, second: 1 }]
        );
    }

    #[test]
    fn test_crossing_entries_share_cells() {
        let grid = Grid::with_blocks(3, 3, &[]);
        let p = puzzle(grid.clone()).with_entries(crate::numbering::generate_entries(&grid));
        assert_eq!(validate_puzzle(&p), Ok(()));
    }

    #[test]
    fn test_clue_references() {
        let p = puzzle(Grid::with_blocks(1, 3, &[]))
            .with_entries(vec![across(1, &[(0, 0), (0, 1), (0, 2)]).with_id("1A")])
            .with_clues(vec![
                Clue::new("1A", "Feline (3)"),
                Clue::new("", "Orphan"),
                Clue::new("9D", "  \t"),
            ]);
        assert_eq!(
            problems(&p),
            vec![
                Problem::ClueMissingEntryId { index: 1 },
                Problem::ClueUnknownEntry { index: 2, entry_id: "9D".to_string() },
                Problem::ClueEmptyText { index: 2 },
            ]
        );
    }

    #[test]
    fn test_clue_ids_unchecked_when_entries_have_no_ids() {
        let p = puzzle(Grid::with_blocks(1, 3, &[]))
            .with_entries(vec![across(1, &[(0, 0), (0, 1), (0, 2)])])
            .with_clues(vec![Clue::new("anything", "Feline (3)")]);
        assert_eq!(validate_puzzle(&p), Ok(()));
    }

    #[test]
    fn test_clues_ignored_without_entries() {
        let p = puzzle(Grid::with_blocks(1, 3, &[])).with_clues(vec![Clue::new("", "")]);
        assert_eq!(validate_puzzle(&p), Ok(()));
    }

    #[test]
    fn test_error_display_lists_every_problem() {
        let mut p = puzzle(Grid::with_blocks(2, 2, &[]));
        p.rows = 0;
        let err = validate_puzzle(&p).unwrap_err();
        assert_eq!(err.code(), "V001");
        assert_eq!(
            err.to_string(),
            "validation failed:\n- puzzle dimensions must be > 0, got 0x2\n- grid rows (2) does not match puzzle rows (0)\n- grid has 2 rows of cells, expected 0"
        );
        assert_eq!(err.messages().len(), 3);
        assert!(err.display_detailed().contains("(V001)"));
    }
}
