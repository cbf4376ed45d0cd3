use pathviz_core::{Board, Context, Point};

/// Receives the board after every visible step of a search.
///
/// The search holds the board mutably while it runs, so the renderer gets a
/// shared borrow for the duration of each call instead of owning a handle.
/// Any `FnMut(&Board)` closure is a `Redraw`.
pub trait Redraw {
    /// Called after each expansion step (and each path-marking step).
    fn redraw(&mut self, board: &Board);

    /// Polled once per frontier dequeue. Returning `true` makes the search
    /// stop and report [`Outcome::Cancelled`](crate::Outcome::Cancelled).
    fn cancelled(&self) -> bool {
        false
    }
}

impl<F: FnMut(&Board)> Redraw for F {
    #[inline]
    fn redraw(&mut self, board: &Board) {
        self(board)
    }
}

/// A [`Redraw`] that draws nothing and never cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRedraw;

impl Redraw for NoRedraw {
    #[inline]
    fn redraw(&mut self, _board: &Board) {}
}

/// Wraps a [`Redraw`] so that cancelling `ctx` stops the search.
///
/// Every frame passed through is recorded on `ctx`, so a context built with
/// [`Context::with_frame_limit`] stops the search once its budget is spent.
#[derive(Debug)]
pub struct Watch<R> {
    ctx: Context,
    inner: R,
}

impl<R: Redraw> Watch<R> {
    pub fn new(ctx: Context, inner: R) -> Self {
        Self { ctx, inner }
    }

    /// Give back the wrapped redraw.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Redraw> Redraw for Watch<R> {
    #[inline]
    fn redraw(&mut self, board: &Board) {
        self.inner.redraw(board);
        self.ctx.record_frame();
    }

    #[inline]
    fn cancelled(&self) -> bool {
        self.ctx.is_done() || self.inner.cancelled()
    }
}

/// Neighbour enumeration for a search.
pub trait Pather {
    /// Append the successors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, board: &Board, p: Point, buf: &mut Vec<Point>);
}

/// Pather with a goal-distance estimate for best-first ordering.
pub trait AstarPather: Pather {
    /// Estimate of the remaining cost from `from` to `to`. Zero turns a
    /// best-first search into Dijkstra.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
