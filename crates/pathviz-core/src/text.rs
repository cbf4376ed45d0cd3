//! Plain-text board maps.
//!
//! One line per row, one character per cell, using [`CellState::symbol`]:
//!
//! ```text
//! S.#..
//! ..#..
//! ..#.E
//! ..#..
//! .....
//! ```
//!
//! Leading and trailing whitespace of the whole text is ignored, individual
//! lines are not trimmed (apart from a trailing `'\r'`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::board::Board;
use crate::cell::CellState;
use crate::geom::Point;

/// Errors that can occur when parsing a board map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("map is empty")]
    Empty,
    #[error("line {line} has width {width}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        width: usize,
        expected: usize,
    },
    #[error("map must be square, got {rows} rows of {cols} columns")]
    NotSquare { rows: usize, cols: usize },
    #[error("invalid symbol {ch:?} at {pos}")]
    InvalidSymbol { ch: char, pos: Point },
    #[error("more than one start cell (second at {0})")]
    DuplicateStart(Point),
    #[error("more than one end cell (second at {0})")]
    DuplicateEnd(Point),
}

impl Board {
    /// Parse a board from its text form.
    ///
    /// Every line must have the same width and the map must be square. At
    /// most one `S` and one `E` are allowed. Neighbour caches are not
    /// computed; call [`update_neighbors`](Board::update_neighbors) before
    /// searching.
    pub fn parse(s: &str) -> Result<Board, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }
        let lines: Vec<&str> = s.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).collect();
        let cols = lines[0].chars().count();
        for (i, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(MapError::InconsistentWidth {
                    line: i,
                    width,
                    expected: cols,
                });
            }
        }
        if lines.len() != cols {
            return Err(MapError::NotSquare {
                rows: lines.len(),
                cols,
            });
        }

        let mut board = Board::new(cols as i32);
        let mut start = None;
        let mut end = None;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(row as i32, col as i32);
                let state = CellState::from_symbol(ch).ok_or(MapError::InvalidSymbol { ch, pos })?;
                match state {
                    CellState::Start if start.replace(pos).is_some() => {
                        return Err(MapError::DuplicateStart(pos));
                    }
                    CellState::End if end.replace(pos).is_some() => {
                        return Err(MapError::DuplicateEnd(pos));
                    }
                    _ => {}
                }
                board.set(pos, state);
            }
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.iter().enumerate() {
            if i > 0 && cell.col() == 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", cell.state().symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "
S.#..
..#..
..#.E
..#..
.....
";

    #[test]
    fn parse_and_size() {
        let b = Board::parse(MAZE).unwrap();
        assert_eq!(b.rows(), 5);
        assert_eq!(b.find(CellState::Start), Some(Point::new(0, 0)));
        assert_eq!(b.find(CellState::End), Some(Point::new(2, 4)));
        assert_eq!(b.count(CellState::Barrier), 4);
    }

    #[test]
    fn display_is_inverse_of_parse() {
        let b = Board::parse(MAZE).unwrap();
        assert_eq!(b.to_string(), MAZE.trim());
        assert_eq!(b.to_string().parse::<Board>().unwrap(), b);
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let b = Board::parse("S.\r\n.E\r\n").unwrap();
        assert_eq!(b.find(CellState::End), Some(Point::new(1, 1)));
    }

    #[test]
    fn rejects_bad_maps() {
        assert_eq!(Board::parse("  \n "), Err(MapError::Empty));
        assert_eq!(
            Board::parse("..\n...\n..."),
            Err(MapError::InconsistentWidth {
                line: 1,
                width: 3,
                expected: 2
            })
        );
        assert_eq!(
            Board::parse("...\n..."),
            Err(MapError::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(
            Board::parse("..\n.?"),
            Err(MapError::InvalidSymbol {
                ch: '?',
                pos: Point::new(1, 1)
            })
        );
        assert_eq!(
            Board::parse("SS\n.."),
            Err(MapError::DuplicateStart(Point::new(0, 1)))
        );
        assert_eq!(
            Board::parse("E.\n.E"),
            Err(MapError::DuplicateEnd(Point::new(1, 1)))
        );
    }

    #[test]
    fn error_messages() {
        let err = Board::parse("..\n.?").unwrap_err();
        assert_eq!(err.to_string(), "invalid symbol '?' at (1, 1)");
    }
}
