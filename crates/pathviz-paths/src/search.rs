use pathviz_core::{Board, Cell, Point};

use crate::frontier::{OpenSet, Predecessors, Scores};
use crate::traits::{AstarPather, Redraw};

/// How a search run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// A path was found and marked on the board.
    Found,
    /// The frontier emptied without reaching the goal.
    NotFound,
    /// The redraw reported cancellation. The board keeps whatever marks
    /// the search had made so far.
    Cancelled,
}

impl Outcome {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(self) -> bool {
        self == Outcome::Found
    }
}

impl From<Outcome> for bool {
    fn from(o: Outcome) -> bool {
        o.is_found()
    }
}

/// Result of the shared best-first loop, before any path marking.
pub(crate) enum Search {
    Reached(Predecessors),
    Exhausted,
    Cancelled,
}

/// Best-first search with unit step cost, shared by Dijkstra, A*, JPS and
/// Theta*.
///
/// The frontier is ordered by `g + estimate` with insertion order breaking
/// ties. Newly discovered cells are marked Open, expanded cells Closed
/// (except the start), and `redraw` runs once per expansion.
pub(crate) fn best_first<P, R>(
    board: &mut Board,
    pather: &P,
    start: Point,
    end: Point,
    redraw: &mut R,
) -> Search
where
    P: AstarPather,
    R: Redraw + ?Sized,
{
    let mut open = OpenSet::new(board);
    let mut g = Scores::new(board);
    let mut came_from = Predecessors::new(board);
    let mut nbuf = Vec::with_capacity(8);

    g.set(start, 0);
    open.push(start, 0);

    loop {
        if redraw.cancelled() {
            return Search::Cancelled;
        }
        let Some(current) = open.pop() else {
            return Search::Exhausted;
        };
        if current == end {
            return Search::Reached(came_from);
        }

        nbuf.clear();
        pather.neighbors(board, current, &mut nbuf);

        let tentative_g = g.get(current).saturating_add(1);
        for &n in nbuf.iter() {
            if board.is_barrier(n) || tentative_g >= g.get(n) {
                continue;
            }
            came_from.insert(n, current);
            g.set(n, tentative_g);
            if !open.contains(n) {
                open.push(n, tentative_g + pather.estimate(n, end));
                board.update(n, Cell::make_open);
            }
        }

        redraw.redraw(board);

        if current != start {
            board.update(current, Cell::make_closed);
        }
    }
}
