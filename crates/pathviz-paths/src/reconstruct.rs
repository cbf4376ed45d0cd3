use pathviz_core::{Board, Cell, Point};

use crate::frontier::Predecessors;
use crate::traits::Redraw;

/// Walk `came_from` back from `goal`, marking every predecessor as Path and
/// redrawing after each step.
///
/// `goal` itself is not marked; the walk ends at the cell with no
/// predecessor (the start), which is marked too. Callers re-assert the start
/// and end states afterwards.
pub fn reconstruct_path<R: Redraw + ?Sized>(
    board: &mut Board,
    came_from: &Predecessors,
    goal: Point,
    redraw: &mut R,
) {
    let mut current = goal;
    while let Some(prev) = came_from.get(current) {
        current = prev;
        board.update(current, Cell::make_path);
        redraw.redraw(board);
    }
}

/// Re-tag the endpoints after path marking. When `start == end` the cell
/// ends up as Start.
#[inline]
pub(crate) fn restore_endpoints(board: &mut Board, start: Point, end: Point) {
    board.update(end, Cell::make_end);
    board.update(start, Cell::make_start);
}
