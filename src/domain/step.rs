//! Generation advance.
//!
//! Every cell's next state is computed from the *old* board only; the new
//! board is built on the side and swapped in after the full pass, so no
//! observer ever sees half a generation.

use rayon::prelude::*;

use super::{Algorithm, Cell, Grid, neighborhood};

/// The next generation of a board, not yet committed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub cells: Vec<Cell>,
    pub alive: usize,
}

/// Number of live neighbors of `index` under the board's wrap policy
pub fn live_neighbors(grid: &Grid, index: usize) -> u8 {
    let (rows, cols) = grid.dimensions();
    neighborhood::neighbors(index, rows, cols, grid.wrap())
        .iter()
        .filter(|&n| grid.is_alive(n))
        .count() as u8
}

#[inline]
fn next_cell(grid: &Grid, index: usize) -> Cell {
    let current = grid.get(index).unwrap_or_default();
    current.evolve(live_neighbors(grid, index))
}

/// Compute the next generation on the calling thread
pub fn evolve(grid: &Grid) -> Generation {
    let mut alive = 0;
    let cells = (0..grid.len())
        .map(|i| {
            let next = next_cell(grid, i);
            if next.is_alive() {
                alive += 1;
            }
            next
        })
        .collect();

    Generation { cells, alive }
}

/// Compute the next generation across the rayon pool
pub fn evolve_parallel(grid: &Grid) -> Generation {
    let cells: Vec<Cell> = (0..grid.len())
        .into_par_iter()
        .map(|i| next_cell(grid, i))
        .collect();
    let alive = cells.par_iter().filter(|c| c.is_alive()).count();

    Generation { cells, alive }
}

/// Compute with the chosen strategy, then commit. Returns the new alive count.
pub fn advance(grid: &mut Grid, algorithm: Algorithm) -> usize {
    let next = match algorithm {
        Algorithm::Serial => evolve(grid),
        Algorithm::Parallel => evolve_parallel(grid),
    };
    grid.replace_cells(next.cells);
    next.alive
}
