//! Random barrier placement for seeding boards.

use rand::{Rng, RngExt};

use crate::board::Board;
use crate::cell::CellState;
use crate::geom::Point;

/// Turn each Empty cell into a Barrier with probability `density`, leaving
/// every position in `keep` untouched.
///
/// `density` is clamped to `0.0..=1.0`. Cells that are not Empty (start,
/// end, existing barriers, search marks) are never changed. Returns the
/// number of barriers placed.
pub fn scatter_barriers<R: Rng + ?Sized>(
    board: &mut Board,
    density: f64,
    rng: &mut R,
    keep: &[Point],
) -> usize {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let targets: Vec<Point> = board
        .iter()
        .filter(|c| c.state() == CellState::Empty && !keep.contains(&c.pos()))
        .map(|c| c.pos())
        .collect();

    let mut placed = 0;
    for p in targets {
        if rng.random_bool(density) {
            board.set(p, CellState::Barrier);
            placed += 1;
        }
    }
    log::debug!(
        "scattered {placed} barriers over {} cells (density {density:.2})",
        board.len()
    );
    placed
}
