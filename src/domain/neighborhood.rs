//! Moore neighborhood lookup on a flat row-major board.
//!
//! Purely positional: the result depends on the index, the board shape and
//! the wrap policy, never on cell contents. With wrap on, the left edge is
//! glued to the right edge of the *same row* and the top row to the bottom
//! row. With wrap off, anything past an edge is simply missing.

/// Up to eight distinct neighbor indices of one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbors {
    center: usize,
    indices: [usize; 8],
    len: usize,
}

impl Neighbors {
    fn new(center: usize) -> Self {
        Self {
            center,
            indices: [0; 8],
            len: 0,
        }
    }

    /// Record a neighbor. Tiny wrapped boards fold several directions onto
    /// the same cell (or onto the center itself); each index is kept once.
    fn push(&mut self, index: usize) {
        if index != self.center && !self.as_slice().contains(&index) {
            self.indices[self.len] = index;
            self.len += 1;
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.as_slice().contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Left and right neighbors of `index` on its own row
#[inline]
fn push_sides(out: &mut Neighbors, index: usize, cols: usize, wrap: bool) {
    let col = index % cols;
    let max = cols - 1;

    if col > 0 {
        out.push(index - 1);
    } else if wrap {
        out.push(index + max);
    }

    if col < max {
        out.push(index + 1);
    } else if wrap {
        out.push(index - max);
    }
}

/// Resolve the neighbors of `index` on a `rows x cols` board.
///
/// Returns an empty set for an index outside the board.
pub fn neighbors(index: usize, rows: usize, cols: usize, wrap: bool) -> Neighbors {
    let mut out = Neighbors::new(index);
    let total = rows * cols;
    if index >= total {
        return out;
    }

    push_sides(&mut out, index, cols, wrap);

    let above = if index >= cols {
        Some(index - cols)
    } else if wrap {
        Some(index + total - cols)
    } else {
        None
    };

    let below = if index + cols < total {
        Some(index + cols)
    } else if wrap {
        Some(index + cols - total)
    } else {
        None
    };

    // Diagonals are the sides of the vertical neighbors
    for vertical in [above, below].into_iter().flatten() {
        out.push(vertical);
        push_sides(&mut out, vertical, cols, wrap);
    }

    out
}
