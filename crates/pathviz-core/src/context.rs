//! Stop handle shared between a running search and whoever drives it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct Shared {
    stopped: AtomicBool,
    frames: AtomicUsize,
}

/// Cooperative stop flag plus a frame counter with an optional budget.
///
/// Clones share state: the driver keeps one handle while the search polls
/// another. Once the budget is reached the context stops itself.
#[derive(Clone, Debug, Default)]
pub struct Context {
    shared: Arc<Shared>,
    frame_limit: Option<usize>,
}

impl Context {
    /// A context that only stops when [`cancel`](Self::cancel) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that stops itself after `limit` recorded frames. A limit of
    /// zero starts out stopped, so no frame is drawn at all.
    pub fn with_frame_limit(limit: usize) -> Self {
        let ctx = Self {
            frame_limit: Some(limit),
            ..Self::default()
        };
        if limit == 0 {
            ctx.cancel();
        }
        ctx
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.shared.stopped.load(Ordering::Relaxed)
    }

    /// Ask the search to stop at its next poll.
    #[inline]
    pub fn cancel(&self) {
        self.shared.stopped.store(true, Ordering::Relaxed);
    }

    /// Count one drawn frame, stopping if the budget is now spent. Returns
    /// the running total.
    pub fn record_frame(&self) -> usize {
        let n = self.shared.frames.fetch_add(1, Ordering::Relaxed) + 1;
        if self.frame_limit.is_some_and(|limit| n >= limit) && !self.is_done() {
            log::debug!("frame budget of {n} spent");
            self.cancel();
        }
        n
    }

    /// Frames recorded so far.
    #[inline]
    pub fn frames(&self) -> usize {
        self.shared.frames.load(Ordering::Relaxed)
    }

    pub fn frame_limit(&self) -> Option<usize> {
        self.frame_limit
    }
}
