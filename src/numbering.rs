//! `numbering`: derive the canonical across/down entries of a grid.
//!
//! Standard crossword numbering: cells are scanned row by row, left to right.
//! A cell starts an across entry when it is open, the cell to its left is a
//! block (or the edge) and the cell to its right is open; likewise for down
//! with the cells above and below. Every cell that starts at least one entry
//! takes the next number, shared by its across and down entries.

use crate::entry::{Direction, Entry};
use crate::grid::{CellRef, Grid};

/// Derive the ordered entry list of a grid.
///
/// Entries come out in scan order, which is also ascending number order, with
/// across before down when both start at the same cell. Each entry gets its
/// canonical id (`1A`, `1D`, ...) but no enumeration or answer. Positions off
/// the matrix count as blocks, so a ragged matrix is numbered as if it were
/// padded with blocks.
#[must_use]
pub fn generate_entries(grid: &Grid) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut num: u32 = 1;

    for (r, row) in grid.cells.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if cell.block {
                continue;
            }

            let left_is_block = c.checked_sub(1).map_or(true, |cc| grid.is_block(r, cc));
            let top_is_block = r.checked_sub(1).map_or(true, |rr| grid.is_block(rr, c));
            let starts_across = left_is_block && !grid.is_block(r, c + 1);
            let starts_down = top_is_block && !grid.is_block(r + 1, c);

            if starts_across {
                entries.push(slot(grid, Direction::Across, num, r, c));
            }
            if starts_down {
                entries.push(slot(grid, Direction::Down, num, r, c));
            }
            if starts_across || starts_down {
                num += 1;
            }
        }
    }

    log::debug!("numbered {} entries ({} numbers)", entries.len(), num - 1);
    entries
}

// Walk from (r, c) in `dir` until a block or the edge.
fn slot(grid: &Grid, dir: Direction, num: u32, r: usize, c: usize) -> Entry {
    let (dr, dc) = if dir == Direction::Across { (0, 1) } else { (1, 0) };
    let cells = (0..)
        .map(|i| CellRef::new(r + i * dr, c + i * dc))
        .take_while(|cr| !grid.is_block(cr.r, cr.c))
        .collect();
    let id = Entry::canonical_id(&dir, num);
    Entry::new(dir, num, cells).with_id(id)
}
