//! Pure cell-set geometry: translation and centroid rotation.
//!
//! Both operations produce a new candidate set and never touch the grid;
//! the engine validates candidates before committing them.

use tetros_types::CellLocation;

use crate::PieceCells;

/// Shift every location by `(d_row, d_col)`.
pub fn translated(cells: &[CellLocation], d_row: i32, d_col: i32) -> PieceCells {
    cells
        .iter()
        .map(|cell| CellLocation::new(cell.row + d_row, cell.column + d_col))
        .collect()
}

/// Turn a cell set 90 degrees about its truncated centroid.
///
/// `direction` is `+1` (clockwise) or `-1` (counter-clockwise). The
/// centroid is the mean column `x` and mean row `y` over all cells with
/// `i32` division, truncating toward zero; each cell maps to column
/// `x + (y - row) * direction` and row `y + (x - column) * direction`.
///
/// For shapes that are not symmetric about the truncated centroid the
/// pivot sits off-center and repeated turns drift. The truncation and
/// the exact mapping are observable game behavior and are kept
/// bit-for-bit, not idealized.
///
/// `cells` must be non-empty (callers pass the active piece's four
/// cells).
pub fn rotated(cells: &[CellLocation], direction: i32) -> PieceCells {
    let mut x = 0;
    let mut y = 0;
    for cell in cells {
        x += cell.column;
        y += cell.row;
    }
    x /= cells.len() as i32;
    y /= cells.len() as i32;

    cells
        .iter()
        .map(|cell| {
            let column = x + (y - cell.row) * direction;
            let row = y + (x - cell.column) * direction;
            CellLocation::new(row, column)
        })
        .collect()
}
