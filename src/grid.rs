//! Dense two-dimensional storage used by the solvers.
//!
//! Both the memo tables of the recursive solvers and the tabulation grids of
//! the iterative solvers are indexed by an (item boundary, capacity) pair that
//! is bounded by `n` and `capacity`, so a flat row-major `Vec` suffices.

/// Row-major `rows x cols` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Allocate a grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Overwrite an entire row with `value`.
    pub fn fill_row(&mut self, row: usize, value: T) {
        self.row_mut(row).fill(value);
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows, "row {row} out of {}", self.rows);
        debug_assert!(col < self.cols, "col {col} out of {}", self.cols);
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.cells[self.offset(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.offset(row, col);
        self.cells[idx] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// Borrow row `src` immutably and row `dst` mutably at the same time.
    ///
    /// # Panics
    /// Panics if `src == dst`.
    pub fn row_pair_mut(&mut self, src: usize, dst: usize) -> (&[T], &mut [T]) {
        assert_ne!(src, dst, "source and destination rows must differ");
        let cols = self.cols;
        if src < dst {
            let (head, tail) = self.cells.split_at_mut(dst * cols);
            (&head[src * cols..(src + 1) * cols], &mut tail[..cols])
        } else {
            let (head, tail) = self.cells.split_at_mut(src * cols);
            (&tail[..cols], &mut head[dst * cols..(dst + 1) * cols])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;

    #[test]
    fn zero_sized_grid_is_empty() {
        let g: Grid<u64> = Grid::new(0, 5, 0);
        assert_eq!(g.len(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn row_major_layout() {
        let mut g = Grid::new(3, 4, 0u64);
        g.set(1, 2, 7);
        assert_eq!(*g.get(1, 2), 7);
        assert_eq!(g.row(1), &[0, 0, 7, 0]);
        g.fill_row(2, 9);
        assert_eq!(g.row(2), &[9, 9, 9, 9]);
        assert_eq!(g.row(0), &[0, 0, 0, 0]);
    }

    #[test]
    fn row_pair_in_both_directions() {
        let mut g = Grid::new(3, 2, 0u64);
        g.fill_row(0, 1);
        g.fill_row(2, 3);

        let (src, dst) = g.row_pair_mut(0, 1);
        dst.copy_from_slice(src);
        assert_eq!(g.row(1), &[1, 1]);

        let (src, dst) = g.row_pair_mut(2, 1);
        dst[0] = src[1];
        assert_eq!(g.row(1), &[3, 1]);
    }

    #[test]
    #[should_panic]
    fn row_pair_rejects_same_row() {
        let mut g = Grid::new(2, 2, 0u64);
        let _ = g.row_pair_mut(1, 1);
    }
}
