//! Reshaping a board while keeping what the user drew.
//!
//! Any (row, col) present in both the old and the new shape keeps its state;
//! cells that appear are dead, cells that fall off are dropped.

use super::{Cell, Grid};
use crate::error::{Result, ValidationError};

/// Reshape `grid` to `new_rows x new_cols` in place. Returns the alive count
/// of the reshaped board. Zero dimensions, or a shape past `MAX_CELLS`, are
/// rejected and leave `grid` as is.
pub fn resize(grid: &mut Grid, new_rows: usize, new_cols: usize) -> Result<usize> {
    let new_cells = ValidationError::check_shape(new_rows, new_cols)?;

    let (rows, cols) = grid.dimensions();
    let wrap = grid.wrap();
    let old = std::mem::replace(grid, Grid::new(0, 0, wrap));
    let mut cells = old.into_cells();

    if cols == new_cols {
        // Row-major: changing only the row count is a pure append/truncate
        cells.resize(new_cells, Cell::Dead);
    } else {
        cells = remap_columns(&cells, rows, cols, new_rows, new_cols, new_cells);
    }

    *grid = Grid::from_cells(new_rows, new_cols, wrap, cells);
    Ok(grid.count_alive())
}

/// Full positional remap for a column change (optionally with a row change).
fn remap_columns(
    cells: &[Cell],
    rows: usize,
    cols: usize,
    new_rows: usize,
    new_cols: usize,
    new_cells: usize,
) -> Vec<Cell> {
    let mut out = Vec::with_capacity(new_cells);
    let keep = cols.min(new_cols);

    if cols > 0 {
        for row in cells.chunks(cols).take(rows.min(new_rows)) {
            out.extend_from_slice(&row[..keep]);
            out.resize(out.len() + (new_cols - keep), Cell::Dead);
        }
    }

    // Rows beyond the old height start dead
    out.resize(new_cells, Cell::Dead);
    out
}
