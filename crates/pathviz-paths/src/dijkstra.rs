use pathviz_core::{Board, Point};

use crate::neighbors::Uninformed;
use crate::reconstruct::{reconstruct_path, restore_endpoints};
use crate::search::{Outcome, Search, best_first};
use crate::traits::Redraw;

/// Dijkstra's algorithm with unit step costs.
///
/// The frontier is ordered by accumulated cost, ties broken by insertion
/// order, which on this uniform grid expands cells in breadth-first order.
/// The marked path is a shortest one in hop count.
pub fn dijkstra<R: Redraw + ?Sized>(
    board: &mut Board,
    start: Point,
    end: Point,
    redraw: &mut R,
) -> Outcome {
    match best_first(board, &Uninformed, start, end, redraw) {
        Search::Reached(came_from) => {
            reconstruct_path(board, &came_from, end, redraw);
            restore_endpoints(board, start, end);
            Outcome::Found
        }
        Search::Exhausted => Outcome::NotFound,
        Search::Cancelled => Outcome::Cancelled,
    }
}
