use std::collections::VecDeque;

use pathviz_core::{Board, Cell, Point};

use crate::frontier::{Predecessors, Visited};
use crate::reconstruct::restore_endpoints;
use crate::search::Outcome;
use crate::traits::Redraw;

/// One direction of the search: a FIFO frontier with its own visited set and
/// predecessor map.
struct Side {
    queue: VecDeque<Point>,
    seen: Visited,
    came_from: Predecessors,
}

impl Side {
    fn new(board: &Board, root: Point) -> Self {
        let mut seen = Visited::new(board);
        seen.insert(root);
        Self {
            queue: VecDeque::from([root]),
            seen,
            came_from: Predecessors::new(board),
        }
    }

    /// Enqueue every unvisited, non-barrier cached neighbour of `current`.
    fn expand(&mut self, board: &mut Board, current: Point, nbuf: &mut Vec<Point>) {
        nbuf.clear();
        nbuf.extend_from_slice(board.neighbors(current));
        for &n in nbuf.iter() {
            if self.seen.contains(n) || board.is_barrier(n) {
                continue;
            }
            self.came_from.insert(n, current);
            self.queue.push_back(n);
            self.seen.insert(n);
            board.update(n, Cell::make_open);
        }
    }
}

/// Mark both predecessor chains through `meet` as Path.
fn mark_meeting(board: &mut Board, from_start: &Side, from_end: &Side, meet: Point) {
    for p in from_start
        .came_from
        .chain(meet)
        .into_iter()
        .chain(from_end.came_from.chain(meet))
    {
        board.update(p, Cell::make_path);
    }
}

/// Bidirectional breadth-first search.
///
/// Two FIFO frontiers grow from `start` and `end`, one dequeue each per
/// round. The search stops at the first dequeued cell that the other side
/// has already visited and marks both predecessor chains through it. That
/// meeting rule does not compare combined lengths, so on some boards the
/// marked path can be longer than the shortest one.
///
/// `start == end` succeeds at once without touching the board.
pub fn bidirectional<R: Redraw + ?Sized>(
    board: &mut Board,
    start: Point,
    end: Point,
    redraw: &mut R,
) -> Outcome {
    if start == end {
        return Outcome::Found;
    }

    let mut forward = Side::new(board, start);
    let mut backward = Side::new(board, end);
    let mut nbuf = Vec::with_capacity(4);

    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        if redraw.cancelled() {
            return Outcome::Cancelled;
        }

        let Some(current_start) = forward.queue.pop_front() else {
            break;
        };
        if backward.seen.contains(current_start) {
            mark_meeting(board, &forward, &backward, current_start);
            restore_endpoints(board, start, end);
            return Outcome::Found;
        }
        forward.expand(board, current_start, &mut nbuf);

        let Some(current_end) = backward.queue.pop_front() else {
            break;
        };
        if forward.seen.contains(current_end) {
            mark_meeting(board, &forward, &backward, current_end);
            restore_endpoints(board, start, end);
            return Outcome::Found;
        }
        backward.expand(board, current_end, &mut nbuf);

        redraw.redraw(board);

        if current_start != start {
            board.update(current_start, Cell::make_closed);
        }
        if current_end != end {
            board.update(current_end, Cell::make_closed);
        }
    }

    Outcome::NotFound
}
