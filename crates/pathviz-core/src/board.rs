//! The [`Board`] type: a square matrix of [`Cell`]s.
//!
//! A board owns every cell for the lifetime of one puzzle. Cells refer to
//! each other by [`Point`] only, so the board can be cloned and handed to a
//! search without any shared-ownership plumbing.

use crate::cell::{Cell, CellState};
use crate::geom::Point;

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A `rows × rows` grid of cells stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of `rows × rows` empty cells. Negative sizes give an
    /// empty board.
    pub fn new(rows: i32) -> Self {
        let rows = rows.max(0);
        let cells = (0..rows)
            .flat_map(|row| (0..rows).map(move |col| Cell::new(Point::new(row, col))))
            .collect();
        Self { rows, cells }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
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

    /// Row-major index of `p` on any `rows × rows` board, or `None` if it
    /// falls outside. Per-cell tables sized from a board use this directly.
    #[inline]
    pub fn flat_index(rows: i32, p: Point) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.row >= rows || p.col >= rows {
            return None;
        }
        Some(p.row as usize * rows as usize + p.col as usize)
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// Flat row-major index of `p`, or `None` if it is off the board.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        Self::flat_index(self.rows, p)
    }

    /// Get the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// State of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.cell(p).map(Cell::state)
    }

    /// Whether `p` is a barrier. Off-board points are not barriers; callers
    /// that care about bounds check [`contains`](Self::contains) first.
    #[inline]
    pub fn is_barrier(&self, p: Point) -> bool {
        self.state(p) == Some(CellState::Barrier)
    }

    /// Cached neighbours of `p` (empty if `p` is off the board).
    #[inline]
    pub fn neighbors(&self, p: Point) -> &[Point] {
        self.cell(p).map(Cell::neighbors).unwrap_or(&[])
    }

    /// Set the state at `p`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, p: Point, state: CellState) {
        if let Some(cell) = self.cell_mut(p) {
            cell.set_state(state);
        }
    }

    /// Apply a cell mutator such as [`Cell::make_open`] at `p`. Out-of-bounds
    /// points are ignored.
    #[inline]
    pub fn update(&mut self, p: Point, f: impl FnOnce(&mut Cell)) {
        if let Some(cell) = self.cell_mut(p) {
            f(cell);
        }
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Position of the first cell (row-major) in `state`.
    pub fn find(&self, state: CellState) -> Option<Point> {
        self.cells.iter().find(|c| c.state() == state).map(Cell::pos)
    }

    /// Positions of every cell in `state`, row-major.
    pub fn positions(&self, state: CellState) -> Vec<Point> {
        self.cells
            .iter()
            .filter(|c| c.state() == state)
            .map(Cell::pos)
            .collect()
    }

    /// Recompute every cell's neighbour cache from the current barriers.
    ///
    /// Must run after the last barrier edit and before a search, since the
    /// searches trust the cache.
    pub fn update_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let pos = self.cells[i].pos();
            let mut neighbors = std::mem::take(&mut self.cells[i].neighbors);
            neighbors.clear();
            neighbors.extend(
                pos.neighbors_4()
                    .into_iter()
                    .filter(|&n| self.contains(n) && !self.is_barrier(n)),
            );
            self.cells[i].neighbors = neighbors;
        }
    }

    /// Reset every Open, Closed and Path cell to Empty, leaving start, end
    /// and barriers in place.
    pub fn clear_search(&mut self) {
        for cell in &mut self.cells {
            if cell.state().is_search_mark() {
                cell.reset();
            }
        }
    }

    /// Reset every cell to Empty.
    pub fn fill_empty(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }
}
