//! Successor functions for the best-first searches.

use pathviz_core::{Board, Point};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather};

/// Ray directions for Jump Point Search: right, down, left, up.
pub const ORTHOGONAL_RAYS: [Point; 4] = [Point::RIGHT, Point::DOWN, Point::LEFT, Point::UP];

/// Ray directions for Theta*: the orthogonal rays, then the diagonals.
pub const ALL_RAYS: [Point; 8] = [
    Point::RIGHT,
    Point::DOWN,
    Point::LEFT,
    Point::UP,
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// The board's cached orthogonal neighbours with no goal estimate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uninformed;

impl Pather for Uninformed {
    fn neighbors(&self, board: &Board, p: Point, buf: &mut Vec<Point>) {
        buf.extend_from_slice(board.neighbors(p));
    }
}

impl AstarPather for Uninformed {
    #[inline]
    fn estimate(&self, _from: Point, _to: Point) -> i32 {
        0
    }
}

/// The board's cached orthogonal neighbours ranked by Manhattan distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Informed;

impl Pather for Informed {
    fn neighbors(&self, board: &Board, p: Point, buf: &mut Vec<Point>) {
        buf.extend_from_slice(board.neighbors(p));
    }
}

impl AstarPather for Informed {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// Straight-run successors: every cell along each ray is a neighbour.
///
/// A ray stops before a barrier or the board edge, and right after the
/// goal. Barriers are read from the board at call time, not from the
/// neighbour cache.
#[derive(Clone, Copy, Debug)]
pub struct Rays<'a> {
    dirs: &'a [Point],
    goal: Point,
}

impl<'a> Rays<'a> {
    pub fn new(dirs: &'a [Point], goal: Point) -> Self {
        Self { dirs, goal }
    }

    /// The four axis rays used by Jump Point Search.
    pub fn orthogonal(goal: Point) -> Rays<'static> {
        Rays::new(&ORTHOGONAL_RAYS, goal)
    }

    /// The eight rays used by Theta*.
    pub fn all(goal: Point) -> Rays<'static> {
        Rays::new(&ALL_RAYS, goal)
    }
}

impl Pather for Rays<'_> {
    fn neighbors(&self, board: &Board, p: Point, buf: &mut Vec<Point>) {
        for &d in self.dirs {
            let mut n = p + d;
            while board.contains(n) && !board.is_barrier(n) {
                buf.push(n);
                if n == self.goal {
                    break;
                }
                n = n + d;
            }
        }
    }
}

impl AstarPather for Rays<'_> {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
