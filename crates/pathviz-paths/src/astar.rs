use pathviz_core::{Board, Point};

use crate::neighbors::Informed;
use crate::reconstruct::{reconstruct_path, restore_endpoints};
use crate::search::{Outcome, Search, best_first};
use crate::traits::Redraw;

/// A* search ranked by `g + manhattan(cell, end)`.
///
/// Manhattan distance is admissible and consistent for orthogonal unit
/// steps, so the marked path is a shortest one in hop count.
pub fn astar<R: Redraw + ?Sized>(board: &mut Board, start: Point, end: Point, redraw: &mut R) -> Outcome {
    match best_first(board, &Informed, start, end, redraw) {
        Search::Reached(came_from) => {
            reconstruct_path(board, &came_from, end, redraw);
            restore_endpoints(board, start, end);
            Outcome::Found
        }
        Search::Exhausted => Outcome::NotFound,
        Search::Cancelled => Outcome::Cancelled,
    }
}
