use pathviz_core::{Board, Cell, CellState, Point};

use crate::neighbors::Rays;
use crate::reconstruct::{reconstruct_path, restore_endpoints};
use crate::search::{Outcome, Search, best_first};
use crate::traits::Redraw;

/// Mark the cells strictly between two points on the same row or column as
/// Path, skipping cells that are already Path or Barrier.
fn fill_straight(board: &mut Board, a: Point, b: Point) {
    let between: Vec<Point> = if a.row == b.row {
        (a.col.min(b.col) + 1..a.col.max(b.col))
            .map(|col| Point::new(a.row, col))
            .collect()
    } else if a.col == b.col {
        (a.row.min(b.row) + 1..a.row.max(b.row))
            .map(|row| Point::new(row, a.col))
            .collect()
    } else {
        return;
    };
    for p in between {
        if !matches!(board.state(p), Some(CellState::Path | CellState::Barrier)) {
            board.update(p, Cell::make_path);
        }
    }
}

/// Simplified Jump Point Search.
///
/// A* over straight runs: every cell along the four axis rays from a cell is
/// a successor at cost one, so the search hops whole corridors at once. Rays
/// stop at barriers, the board edge, and the goal. Once the goal is reached
/// the jump chain is marked and the gaps between consecutive jump points are
/// filled so the path reads as continuous.
///
/// Because a jump of any length costs one, the path is not in general the
/// shortest.
pub fn jps<R: Redraw + ?Sized>(board: &mut Board, start: Point, end: Point, redraw: &mut R) -> Outcome {
    match best_first(board, &Rays::orthogonal(end), start, end, redraw) {
        Search::Reached(came_from) => {
            reconstruct_path(board, &came_from, end, redraw);
            restore_endpoints(board, start, end);

            let jumps = came_from.chain(end);
            for &p in &jumps {
                board.update(p, Cell::make_path);
            }
            for pair in jumps.windows(2) {
                fill_straight(board, pair[0], pair[1]);
            }

            redraw.redraw(board);
            restore_endpoints(board, start, end);
            Outcome::Found
        }
        Search::Exhausted => Outcome::NotFound,
        Search::Cancelled => Outcome::Cancelled,
    }
}
