//! `grid`: the cell matrix of a crossword.
//!
//! A [`Grid`] is a rectangular matrix of [`Cell`]s. Cells are either blocks
//! (unfillable, word boundaries) or open. Open cells may carry the solution
//! letter and may be marked as given (pre-filled for the solver).
//!
//! Grids can be built directly from a matrix, deserialized from JSON, or parsed
//! from a compact text diagram:
//!
//! ```text
//! C#.!S.
//! A#....
//! ```
//!
//! - `#` is a block
//! - `.` is an open cell with no known solution
//! - a letter or digit is an open cell with that solution
//! - `!` before a letter or digit marks a given cell
//!
//! Diagram rows are not required to have equal lengths; ragged input is kept
//! as-is so that [`crate::validation`] can report the shape problem.

use crate::errors::{PResult, ParseError};
use nom::branch::alt;
use nom::character::complete::{char as nom_char, satisfy};
use nom::combinator::{map, value};
use nom::multi::many0;
use nom::sequence::preceded;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Diagram character for a block cell
pub const BLOCK_CHAR: char = '#';
/// Diagram character for an open cell with no solution
pub const EMPTY_CHAR: char = '.';
/// Diagram prefix marking a given cell
pub const GIVEN_PREFIX: char = '!';

/// A `(row, column)` coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellRef {
    pub r: usize,
    pub c: usize,
}

impl CellRef {
    #[must_use]
    pub fn new(r: usize, c: usize) -> Self {
        CellRef { r, c }
    }
}

impl From<(usize, usize)> for CellRef {
    fn from((r, c): (usize, usize)) -> Self {
        CellRef { r, c }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.r, self.c)
    }
}

/// One grid position.
///
/// `r`/`c` are optional self-reported coordinates. When present they must
/// agree with the cell's position in the matrix; when absent the position is
/// taken from the matrix alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<usize>,
    #[serde(default)]
    pub block: bool,
    #[serde(default)]
    pub given: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<char>,
}

impl Cell {
    /// An open cell with no solution.
    #[must_use]
    pub fn open() -> Self {
        Cell::default()
    }

    /// A block cell.
    #[must_use]
    pub fn block() -> Self {
        Cell { block: true, ..Cell::default() }
    }

    /// An open cell with a known solution.
    #[must_use]
    pub fn letter(solution: char) -> Self {
        Cell { solution: Some(solution), ..Cell::default() }
    }

    /// Mark this cell as given.
    #[must_use]
    pub fn given(mut self) -> Self {
        self.given = true;
        self
    }

    /// Record explicit coordinates on this cell.
    #[must_use]
    pub fn at(mut self, r: usize, c: usize) -> Self {
        self.r = Some(r);
        self.c = Some(c);
        self
    }

    /// True when either coordinate was supplied.
    #[must_use]
    pub fn has_coords(&self) -> bool {
        self.r.is_some() || self.c.is_some()
    }
}

/// The cell matrix of a puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Declared row count, if the source stated one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    /// Declared column count, if the source stated one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<usize>,
    #[serde(default)]
    pub cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from a cell matrix, declaring the matrix's own dimensions.
    ///
    /// The column count is taken from the first row; ragged matrices are kept
    /// as they are.
    #[must_use]
    pub fn new(cells: Vec<Vec<Cell>>) -> Self {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        Grid { rows: Some(rows), cols: Some(cols), cells }
    }

    /// An all-open `rows × cols` grid with blocks at the given positions.
    #[must_use]
    pub fn with_blocks(rows: usize, cols: usize, blocks: &[(usize, usize)]) -> Self {
        let cells = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| if blocks.contains(&(r, c)) { Cell::block() } else { Cell::open() })
                    .collect()
            })
            .collect();
        Grid::new(cells)
    }

    /// Number of rows actually present in the matrix
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// The cell at `(r, c)`, if the matrix has one there.
    #[must_use]
    pub fn cell(&self, r: usize, c: usize) -> Option<&Cell> {
        self.cells.get(r)?.get(c)
    }

    /// Whether `(r, c)` acts as a block. Positions off the matrix count as blocks.
    #[must_use]
    pub fn is_block(&self, r: usize, c: usize) -> bool {
        self.cell(r, c).map_or(true, |cell| cell.block)
    }

    /// Number of open cells in the matrix
    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.block).count()
    }

    /// True when every row has the same length as the declared (or first-row) width.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        let width = self.cols.or_else(|| self.cells.first().map(Vec::len)).unwrap_or(0);
        self.cells.iter().all(|row| row.len() == width)
    }
}

// === Diagram parsing ===

fn block_cell(input: &str) -> PResult<'_, Cell> {
    value(Cell::block(), nom_char(BLOCK_CHAR))(input)
}

fn empty_cell(input: &str) -> PResult<'_, Cell> {
    value(Cell::open(), nom_char(EMPTY_CHAR))(input)
}

fn letter_cell(input: &str) -> PResult<'_, Cell> {
    map(satisfy(char::is_alphanumeric), Cell::letter)(input)
}

fn given_cell(input: &str) -> PResult<'_, Cell> {
    map(preceded(nom_char(GIVEN_PREFIX), letter_cell), Cell::given)(input)
}

fn diagram_row(input: &str) -> PResult<'_, Vec<Cell>> {
    many0(alt((block_cell, empty_cell, given_cell, letter_cell)))(input)
}

impl FromStr for Grid {
    type Err = Box<ParseError>;

    /// Parse a text diagram, one line per row.
    ///
    /// Leading/trailing whitespace on each line and blank lines are ignored.
    fn from_str(diagram: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();

        let lines = diagram.lines().map(str::trim).enumerate().filter(|(_, l)| !l.is_empty());
        for (line_idx, line) in lines {
            let (rest, row) = diagram_row(line).map_err(|e| match e {
                nom::Err::Error(e) | nom::Err::Failure(e) => e,
                nom::Err::Incomplete(_) => Box::new(ParseError::EmptyGrid),
            })?;

            if let Some(ch) = rest.chars().next() {
                // column of the first unconsumed character, in chars
                let col = line[..line.len() - rest.len()].chars().count();
                // a bare '!' is reported at the character after it
                let (col, ch) = if ch == GIVEN_PREFIX {
                    (col + 1, rest.chars().nth(1).unwrap_or(GIVEN_PREFIX))
                } else {
                    (col, ch)
                };
                return Err(Box::new(ParseError::InvalidGridChar { line: line_idx + 1, col: col + 1, ch }));
            }

            cells.push(row);
        }

        if cells.is_empty() {
            return Err(Box::new(ParseError::EmptyGrid));
        }

        Ok(Grid::new(cells))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                if cell.block {
                    write!(f, "{BLOCK_CHAR}")?;
                    continue;
                }
                match (cell.given, cell.solution) {
                    (true, Some(ch)) => write!(f, "{GIVEN_PREFIX}{ch}")?,
                    (false, Some(ch)) => write!(f, "{ch}")?,
                    (_, None) => write!(f, "{EMPTY_CHAR}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
