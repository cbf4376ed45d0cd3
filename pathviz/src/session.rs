use std::fmt;
use std::time::{Duration, Instant};

use pathviz_core::{Board, Cell, CellState, Point};
use pathviz_paths::{Algorithm, Outcome, Redraw};

use crate::settings::Settings;

/// Why a search could not be started.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("no start cell has been placed")]
    MissingStart,
    #[error("no end cell has been placed")]
    MissingEnd,
}

/// Summary of one search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    pub elapsed: Duration,
    /// Path cells marked, endpoints excluded. Zero unless the path was found.
    pub path_length: usize,
    /// Closed cells left over, i.e. cells expanded that are not on the path.
    /// Zero unless the path was found.
    pub extra_search: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.algorithm.label();
        match self.outcome {
            Outcome::Found => write!(
                f,
                "{label}: path of {} cells, {} extra cells searched, {:.2?}",
                self.path_length, self.extra_search, self.elapsed
            ),
            Outcome::NotFound => write!(f, "{label}: no path, {:.2?}", self.elapsed),
            Outcome::Cancelled => write!(f, "{label}: cancelled after {:.2?}", self.elapsed),
        }
    }
}

/// The editable board plus the endpoints and algorithm chosen for it.
#[derive(Clone, Debug)]
pub struct Session {
    settings: Settings,
    board: Board,
    start: Option<Point>,
    end: Option<Point>,
    algorithm: Algorithm,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            board: Board::new(settings.rows),
            start: None,
            end: None,
            algorithm: settings.algorithm,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for bulk edits such as random barrier placement.
    /// Endpoints are not re-read afterwards.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn rows(&self) -> i32 {
        self.board.rows()
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Place the first missing endpoint at `p`, or a barrier once both exist.
    ///
    /// Start comes first, then end. Painting over an existing endpoint does
    /// nothing, and so does painting off the board.
    pub fn paint(&mut self, p: Point) {
        if !self.board.contains(p) {
            return;
        }
        if self.start.is_none() && self.end != Some(p) {
            self.start = Some(p);
            self.board.update(p, Cell::make_start);
        } else if self.end.is_none() && self.start != Some(p) {
            self.end = Some(p);
            self.board.update(p, Cell::make_end);
        } else if self.start != Some(p) && self.end != Some(p) {
            self.board.update(p, Cell::make_barrier);
        }
    }

    /// Reset `p` to Empty, forgetting it as an endpoint if it was one.
    pub fn erase(&mut self, p: Point) {
        if !self.board.contains(p) {
            return;
        }
        self.board.update(p, Cell::reset);
        if self.start == Some(p) {
            self.start = None;
        } else if self.end == Some(p) {
            self.end = None;
        }
    }

    /// Move the start to `p`. Fails off the board or on the end cell.
    pub fn set_start(&mut self, p: Point) -> bool {
        if !self.board.contains(p) || self.end == Some(p) {
            return false;
        }
        if let Some(old) = self.start.replace(p) {
            self.board.update(old, Cell::reset);
        }
        self.board.update(p, Cell::make_start);
        true
    }

    /// Move the end to `p`. Fails off the board or on the start cell.
    pub fn set_end(&mut self, p: Point) -> bool {
        if !self.board.contains(p) || self.start == Some(p) {
            return false;
        }
        if let Some(old) = self.end.replace(p) {
            self.board.update(old, Cell::reset);
        }
        self.board.update(p, Cell::make_end);
        true
    }

    /// Start over with an empty board of the current size.
    pub fn clear(&mut self) {
        self.rebuild(self.rows());
    }

    /// Add `resize_step` rows, up to `max_rows`. Rebuilds the board.
    pub fn grow(&mut self) -> bool {
        let rows = (self.rows() + self.settings.resize_step).min(self.settings.max_rows);
        self.resize(rows)
    }

    /// Remove `resize_step` rows, down to `min_rows`. Rebuilds the board.
    pub fn shrink(&mut self) -> bool {
        let rows = (self.rows() - self.settings.resize_step).max(self.settings.min_rows);
        self.resize(rows)
    }

    fn resize(&mut self, rows: i32) -> bool {
        if rows == self.rows() {
            return false;
        }
        log::debug!("resizing board {} -> {rows}", self.rows());
        self.rebuild(rows);
        true
    }

    fn rebuild(&mut self, rows: i32) {
        self.board = Board::new(rows);
        self.start = None;
        self.end = None;
    }

    pub fn select(&mut self, algorithm: Algorithm) {
        log::debug!("selected {}", algorithm.label());
        self.algorithm = algorithm;
    }

    /// Select by key '1' to '6'. Other keys are ignored.
    pub fn select_key(&mut self, key: char) -> bool {
        match Algorithm::from_key(key) {
            Some(algorithm) => {
                self.select(algorithm);
                true
            }
            None => false,
        }
    }

    /// Replace the board, taking the endpoints from its Start and End cells.
    pub fn load(&mut self, board: Board) {
        self.start = board.find(CellState::Start);
        self.end = board.find(CellState::End);
        if !(self.settings.min_rows..=self.settings.max_rows).contains(&board.rows()) {
            log::warn!(
                "loaded board has {} rows, outside {}..={}",
                board.rows(),
                self.settings.min_rows,
                self.settings.max_rows
            );
        }
        self.board = board;
    }

    /// Run the selected search from start to end.
    ///
    /// Marks from any previous run are cleared and neighbour caches rebuilt
    /// first. `redraw` sees every frame.
    pub fn run<R: Redraw + ?Sized>(&mut self, redraw: &mut R) -> Result<Report, SessionError> {
        let start = self.start.ok_or(SessionError::MissingStart)?;
        let end = self.end.ok_or(SessionError::MissingEnd)?;

        self.board.clear_search();
        self.board.update_neighbors();

        let began = Instant::now();
        let outcome = self.algorithm.run(&mut self.board, start, end, redraw);
        let elapsed = began.elapsed();

        let (path_length, extra_search) = if outcome.is_found() {
            (
                self.board.count(CellState::Path),
                self.board.count(CellState::Closed),
            )
        } else {
            (0, 0)
        };
        let report = Report {
            algorithm: self.algorithm,
            outcome,
            elapsed,
            path_length,
            extra_search,
        };
        log::info!("{report}");
        Ok(report)
    }
}
