//! Random seeding: exactly `k` distinct live cells, uniformly placed.

use rand::Rng;

use super::{Cell, Grid};
use crate::error::{Result, ValidationError};

/// Live-cell count used when "randomize" is asked for without one:
/// uniform in `[1, cells / 2)`. Boards under 4 cells have an empty range
/// and get a single live cell (none for an empty board).
pub fn default_count<R: Rng + ?Sized>(cells: usize, rng: &mut R) -> usize {
    let upper = cells / 2;
    if upper > 1 {
        rng.random_range(1..upper)
    } else {
        cells.min(1)
    }
}

/// Kill every cell, then bring exactly `k` distinct cells to life.
/// Returns the alive count (always `k`).
pub fn seed<R: Rng + ?Sized>(grid: &mut Grid, k: usize, rng: &mut R) -> Result<usize> {
    let cells = grid.len();
    if k > cells {
        return Err(ValidationError::SeedCount {
            requested: k,
            cells,
        });
    }

    place(grid, k, rng);
    Ok(k)
}

/// Reseed with a [`default_count`] number of live cells. Returns that count.
pub fn seed_default<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let k = default_count(grid.len(), rng);
    place(grid, k, rng);
    k
}

/// Rejection sampling of `k <= grid.len()` positions. Past half the board the
/// dead cells are sampled instead, so the loop never chases the last few free
/// slots.
fn place<R: Rng + ?Sized>(grid: &mut Grid, k: usize, rng: &mut R) {
    let cells = grid.len();
    let (fill, mark, count) = if k <= cells / 2 {
        (Cell::Dead, Cell::Alive, k)
    } else {
        (Cell::Alive, Cell::Dead, cells.saturating_sub(k))
    };

    for i in 0..cells {
        grid.set(i, fill);
    }

    let mut remaining = count;
    while remaining > 0 {
        let index = rng.random_range(0..cells);
        if grid.get(index) == Some(fill) {
            grid.set(index, mark);
            remaining -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_exact_count_for_every_k() {
        let mut rng = rng();
        let mut grid = Grid::new(5, 5, true);
        for k in 0..=25 {
            let alive = seed(&mut grid, k, &mut rng).unwrap();
            assert_eq!(alive, k);
            assert_eq!(grid.count_alive(), k, "k = {k}");
        }
    }

    #[test]
    fn test_zero_leaves_board_dead() {
        let mut rng = rng();
        let mut grid = Grid::new(4, 4, true);
        seed(&mut grid, 10, &mut rng).unwrap();
        seed(&mut grid, 0, &mut rng).unwrap();
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_full_board() {
        let mut rng = rng();
        let mut grid = Grid::new(3, 7, false);
        seed(&mut grid, 21, &mut rng).unwrap();
        assert_eq!(grid.count_alive(), 21);
    }

    #[test]
    fn test_too_many_rejected_without_change() {
        let mut rng = rng();
        let mut grid = Grid::new(2, 2, true);
        grid.set(1, Cell::Alive);
        let before = grid.clone();

        assert_eq!(
            seed(&mut grid, 5, &mut rng),
            Err(ValidationError::SeedCount { requested: 5, cells: 4 })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_positions_spread_over_board() {
        let mut rng = rng();
        let mut grid = Grid::new(5, 5, true);
        let mut hits = [0u32; 25];

        for _ in 0..2000 {
            seed(&mut grid, 5, &mut rng).unwrap();
            for (i, cell) in grid.cells().iter().enumerate() {
                if cell.is_alive() {
                    hits[i] += 1;
                }
            }
        }

        // Each cell expected 2000 * 5 / 25 = 400 times
        for (i, &h) in hits.iter().enumerate() {
            assert!((250..550).contains(&h), "cell {i} hit {h} times");
        }
    }

    #[test]
    fn test_default_count_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let k = default_count(625, &mut rng);
            assert!((1..312).contains(&k), "k = {k}");
        }
    }

    #[test]
    fn test_seed_default_places_its_count() {
        let mut rng = rng();
        let mut grid = Grid::new(25, 25, true);
        for _ in 0..50 {
            let k = seed_default(&mut grid, &mut rng);
            assert!((1..312).contains(&k), "k = {k}");
            assert_eq!(grid.count_alive(), k);
        }

        let mut tiny = Grid::new(1, 1, false);
        assert_eq!(seed_default(&mut tiny, &mut rng), 1);
        assert_eq!(tiny.count_alive(), 1);
    }

    #[test]
    fn test_default_count_tiny_boards() {
        let mut rng = rng();
        assert_eq!(default_count(0, &mut rng), 0);
        assert_eq!(default_count(1, &mut rng), 1);
        assert_eq!(default_count(3, &mut rng), 1);
        // cells = 4..=5 -> range [1, 2) -> always 1
        assert_eq!(default_count(5, &mut rng), 1);
    }
}
