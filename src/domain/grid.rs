use super::Cell;

/// Grid owns the flat cell storage of the board.
/// Cells are stored row-major: the cell at (row, col) lives at `row * cols + col`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    wrap: bool,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead. The shape is taken
    /// as is; user input goes through `ValidationError::check_shape` first.
    pub fn new(rows: usize, cols: usize, wrap: bool) -> Self {
        Self {
            rows,
            cols,
            wrap,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Build a grid from existing row-major storage.
    /// `cells.len()` must equal `rows * cols`.
    pub(crate) fn from_cells(rows: usize, cols: usize, wrap: bool, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, wrap, cells }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether opposite edges are connected
    pub const fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Convert (row, col) to a flat index
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Convert a flat index back to (row, col)
    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cells.len()).then(|| (index / self.cols, index % self.cols))
    }

    /// Get cell at index (with bounds checking)
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Get cell at (row, col)
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.index_of(row, col).and_then(|i| self.get(i))
    }

    /// Is the cell at index alive? Out of range reads as dead.
    #[inline]
    pub fn is_alive(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|c| c.is_alive())
    }

    /// Set cell at index. Returns the previous state, or None if out of range.
    pub fn set(&mut self, index: usize, cell: Cell) -> Option<Cell> {
        self.cells
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, cell))
    }

    /// Read-only view of the row-major storage
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Swap in a whole new generation of the same shape
    pub(crate) fn replace_cells(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }

    /// Count alive cells with one scan
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / cols, i % cols, cell))
    }

    /// Consume the grid, handing back its storage
    pub(crate) fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}
