//! The [`Cell`] type and its exclusive [`CellState`] tag.

use crate::geom::Point;

/// What a cell currently is. Exactly one state holds at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellState {
    #[default]
    Empty,
    /// Discovered, waiting in a frontier.
    Open,
    /// Already expanded.
    Closed,
    /// Impassable.
    Barrier,
    Start,
    End,
    /// Part of the discovered route.
    Path,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 7] = [
        CellState::Empty,
        CellState::Open,
        CellState::Closed,
        CellState::Barrier,
        CellState::Start,
        CellState::End,
        CellState::Path,
    ];

    /// The character used for this state in text maps.
    pub const fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Barrier => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Path => '*',
        }
    }

    /// Inverse of [`symbol`](Self::symbol).
    pub const fn from_symbol(ch: char) -> Option<CellState> {
        Some(match ch {
            '.' => CellState::Empty,
            'o' => CellState::Open,
            'x' => CellState::Closed,
            '#' => CellState::Barrier,
            'S' => CellState::Start,
            'E' => CellState::End,
            '*' => CellState::Path,
            _ => return None,
        })
    }

    /// States written by a search run, as opposed to the user.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, CellState::Open | CellState::Closed | CellState::Path)
    }
}

/// One grid position.
///
/// `neighbors` is a cache filled by [`Board::update_neighbors`]; it holds the
/// in-bounds, non-barrier orthogonal neighbours as of the last refresh.
///
/// [`Board::update_neighbors`]: crate::Board::update_neighbors
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    state: CellState,
    pub(crate) neighbors: Vec<Point>,
}

impl Cell {
    /// Create an empty cell at `pos`.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            state: CellState::Empty,
            neighbors: Vec::new(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Cached traversal neighbours (down, up, right, left order).
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    /// Replace the state.
    #[inline]
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == CellState::Open
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state == CellState::Closed
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.state == CellState::Path
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }

    pub fn reset(&mut self) {
        self.state = CellState::Empty;
    }

    pub fn make_open(&mut self) {
        self.state = CellState::Open;
    }

    pub fn make_closed(&mut self) {
        self.state = CellState::Closed;
    }

    pub fn make_barrier(&mut self) {
        self.state = CellState::Barrier;
    }

    pub fn make_start(&mut self) {
        self.state = CellState::Start;
    }

    pub fn make_end(&mut self) {
        self.state = CellState::End;
    }

    pub fn make_path(&mut self) {
        self.state = CellState::Path;
    }
}
