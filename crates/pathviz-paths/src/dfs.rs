use pathviz_core::{Board, Cell, Point};

use crate::frontier::{Predecessors, Visited};
use crate::reconstruct::{reconstruct_path, restore_endpoints};
use crate::search::Outcome;
use crate::traits::Redraw;

/// Depth-first search over the cached orthogonal neighbours.
///
/// Cells are marked visited when pushed, so each is pushed at most once.
/// The most recently pushed neighbour is expanded first, which with the
/// down, up, right, left enumeration biases the walk towards the left.
/// The path found is not in general the shortest.
pub fn dfs<R: Redraw + ?Sized>(board: &mut Board, start: Point, end: Point, redraw: &mut R) -> Outcome {
    let mut stack = vec![start];
    let mut visited = Visited::new(board);
    let mut came_from = Predecessors::new(board);
    let mut nbuf = Vec::with_capacity(4);
    visited.insert(start);

    loop {
        if redraw.cancelled() {
            return Outcome::Cancelled;
        }
        let Some(current) = stack.pop() else {
            return Outcome::NotFound;
        };
        if current == end {
            reconstruct_path(board, &came_from, end, redraw);
            restore_endpoints(board, start, end);
            return Outcome::Found;
        }

        nbuf.clear();
        nbuf.extend_from_slice(board.neighbors(current));
        for &n in nbuf.iter() {
            if visited.contains(n) || board.is_barrier(n) {
                continue;
            }
            came_from.insert(n, current);
            stack.push(n);
            visited.insert(n);
            board.update(n, Cell::make_open);
        }

        redraw.redraw(board);

        if current != start {
            board.update(current, Cell::make_closed);
        }
    }
}
