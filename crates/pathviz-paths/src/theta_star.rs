use pathviz_core::{Board, Cell, CellState, Point};

use crate::line::Line;
use crate::neighbors::Rays;
use crate::reconstruct::{reconstruct_path, restore_endpoints};
use crate::search::{Outcome, Search, best_first};
use crate::traits::Redraw;

/// Theta*-style any-angle search.
///
/// Like [`jps`](crate::jps) but rays run in all eight directions, so a
/// single step can cut diagonally across open ground. Diagonal rays only
/// check the cells on the diagonal itself, so they can pass between two
/// barriers that touch at a corner. On success the chain of ray endpoints is
/// joined with Bresenham lines.
///
/// Not guaranteed to be shortest.
pub fn theta_star<R: Redraw + ?Sized>(
    board: &mut Board,
    start: Point,
    end: Point,
    redraw: &mut R,
) -> Outcome {
    match best_first(board, &Rays::all(end), start, end, redraw) {
        Search::Reached(came_from) => {
            reconstruct_path(board, &came_from, end, redraw);
            restore_endpoints(board, start, end);

            let mut waypoints = came_from.chain(end);
            waypoints.reverse();
            for &p in &waypoints {
                board.update(p, Cell::make_path);
            }
            for pair in waypoints.windows(2) {
                for p in Line::new(pair[0], pair[1]) {
                    if !matches!(board.state(p), Some(CellState::Path | CellState::Barrier)) {
                        board.update(p, Cell::make_path);
                    }
                }
            }

            redraw.redraw(board);
            restore_endpoints(board, start, end);
            Outcome::Found
        }
        Search::Exhausted => Outcome::NotFound,
        Search::Cancelled => Outcome::Cancelled,
    }
}
