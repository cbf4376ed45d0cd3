use std::collections::BinaryHeap;

use pathviz_core::{Board, Point};

/// Sentinel g score for cells not reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Predecessors
// ---------------------------------------------------------------------------

/// Maps each discovered cell to the cell it was discovered from.
///
/// Stored densely over the board; the start cell (and anything never
/// reached) has no predecessor.
#[derive(Clone, Debug)]
pub struct Predecessors {
    rows: i32,
    from: Vec<Option<Point>>,
}

impl Predecessors {
    /// An empty mapping sized for `board`.
    pub fn new(board: &Board) -> Self {
        Self {
            rows: board.rows(),
            from: vec![None; board.len()],
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        Board::flat_index(self.rows, p)
    }

    /// Record that `p` was reached from `from`.
    #[inline]
    pub fn insert(&mut self, p: Point, from: Point) {
        if let Some(i) = self.idx(p) {
            self.from[i] = Some(from);
        }
    }

    /// The cell `p` was reached from.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Point> {
        self.idx(p).and_then(|i| self.from[i])
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.get(p).is_some()
    }

    /// `goal` followed by its predecessors, ending at the cell that has none.
    pub fn chain(&self, goal: Point) -> Vec<Point> {
        let mut chain = vec![goal];
        let mut current = goal;
        while let Some(prev) = self.get(current) {
            chain.push(prev);
            current = prev;
        }
        chain
    }
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Per-cell g scores, [`UNREACHABLE`] until set.
#[derive(Clone, Debug)]
pub(crate) struct Scores {
    rows: i32,
    g: Vec<i32>,
}

impl Scores {
    pub(crate) fn new(board: &Board) -> Self {
        Self {
            rows: board.rows(),
            g: vec![UNREACHABLE; board.len()],
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        Board::flat_index(self.rows, p)
    }

    #[inline]
    pub(crate) fn get(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.g[i],
            None => UNREACHABLE,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, p: Point, g: i32) {
        if let Some(i) = self.idx(p) {
            self.g[i] = g;
        }
    }
}

/// Cells marked when first enqueued by an uninformed search.
#[derive(Clone, Debug)]
pub(crate) struct Visited {
    rows: i32,
    seen: Vec<bool>,
}

impl Visited {
    pub(crate) fn new(board: &Board) -> Self {
        Self {
            rows: board.rows(),
            seen: vec![false; board.len()],
        }
    }

    #[inline]
    pub(crate) fn contains(&self, p: Point) -> bool {
        Board::flat_index(self.rows, p).is_some_and(|i| self.seen[i])
    }

    #[inline]
    pub(crate) fn insert(&mut self, p: Point) {
        if let Some(i) = Board::flat_index(self.rows, p) {
            self.seen[i] = true;
        }
    }
}

// ---------------------------------------------------------------------------
// Priority frontier
// ---------------------------------------------------------------------------

/// Heap entry ordered by priority, then by insertion sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) priority: i32,
    pub(crate) seq: u64,
    pub(crate) pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and the earliest insertion among equal priorities.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier with FIFO tie-breaking and a membership mirror.
///
/// A cell is pushed only while it is not already resident, so the heap never
/// holds two entries for the same cell.
#[derive(Debug)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<Entry>,
    members: Vec<bool>,
    rows: i32,
    seq: u64,
}

impl OpenSet {
    pub(crate) fn new(board: &Board) -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: vec![false; board.len()],
            rows: board.rows(),
            seq: 0,
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        Board::flat_index(self.rows, p)
    }

    #[inline]
    pub(crate) fn contains(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.members[i])
    }

    pub(crate) fn push(&mut self, pos: Point, priority: i32) {
        let Some(i) = self.idx(pos) else {
            return;
        };
        self.members[i] = true;
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            pos,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Point> {
        let entry = self.heap.pop()?;
        if let Some(i) = self.idx(entry.pos) {
            self.members[i] = false;
        }
        Some(entry.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_set_pops_lowest_priority_then_fifo() {
        let board = Board::new(4);
        let mut open = OpenSet::new(&board);
        open.push(Point::new(0, 0), 3);
        open.push(Point::new(0, 1), 1);
        open.push(Point::new(0, 2), 3);
        open.push(Point::new(0, 3), 1);
        assert!(open.contains(Point::new(0, 2)));

        let order: Vec<_> = std::iter::from_fn(|| open.pop()).collect();
        assert_eq!(
            order,
            vec![
                Point::new(0, 1),
                Point::new(0, 3),
                Point::new(0, 0),
                Point::new(0, 2),
            ]
        );
        assert!(!open.contains(Point::new(0, 2)));
    }

    #[test]
    fn open_set_ignores_off_board_cells() {
        let board = Board::new(2);
        let mut open = OpenSet::new(&board);
        open.push(Point::new(5, 5), 0);
        assert!(!open.contains(Point::new(5, 5)));
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn tables_share_the_board_bounds() {
        let board = Board::new(3);
        let mut seen = Visited::new(&board);
        seen.insert(Point::new(2, 2));
        seen.insert(Point::new(0, 3));
        assert!(seen.contains(Point::new(2, 2)));
        assert!(!seen.contains(Point::new(0, 3)));
        let mut came_from = Predecessors::new(&board);
        came_from.insert(Point::new(3, 0), Point::new(2, 0));
        assert_eq!(came_from.get(Point::new(3, 0)), None);
    }

    #[test]
    fn scores_default_to_unreachable() {
        let board = Board::new(3);
        let mut g = Scores::new(&board);
        assert_eq!(g.get(Point::new(1, 1)), UNREACHABLE);
        g.set(Point::new(1, 1), 4);
        assert_eq!(g.get(Point::new(1, 1)), 4);
        assert_eq!(g.get(Point::new(-1, 0)), UNREACHABLE);
    }

    #[test]
    fn predecessor_chain_walks_back_to_root() {
        let board = Board::new(3);
        let mut came_from = Predecessors::new(&board);
        came_from.insert(Point::new(0, 1), Point::new(0, 0));
        came_from.insert(Point::new(1, 1), Point::new(0, 1));
        assert!(came_from.contains(Point::new(1, 1)));
        assert!(!came_from.contains(Point::new(0, 0)));
        assert_eq!(
            came_from.chain(Point::new(1, 1)),
            vec![Point::new(1, 1), Point::new(0, 1), Point::new(0, 0)]
        );
    }
}
