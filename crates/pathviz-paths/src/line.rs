//! Bresenham line rasterization between grid cells.
//!
//! ```text
//! (0,0) -> (2,5):
//!
//!   row 0  ●●
//!   row 1    ●●
//!   row 2      ●●
//! ```
//!
//! Rows play the role of the x axis and columns the y axis, so the cells
//! chosen on ties are fixed for a given pair of endpoints.

use pathviz_core::Point;

/// Iterator over every cell on the digital line from `from` to `to`,
/// both endpoints included.
#[derive(Clone, Debug)]
pub struct Line {
    cur: Point,
    end: Point,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl Line {
    pub fn new(from: Point, to: Point) -> Self {
        let dx = (to.row - from.row).abs();
        let dy = (to.col - from.col).abs();
        Self {
            cur: from,
            end: to,
            dx,
            dy,
            sx: if from.row < to.row { 1 } else { -1 },
            sy: if from.col < to.col { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if p == self.end {
            self.done = true;
            return Some(p);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.cur.row += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.cur.col += self.sy;
        }
        Some(p)
    }
}

/// Collect the cells of [`Line::new`]`(from, to)`.
pub fn bresenham(from: Point, to: Point) -> Vec<Point> {
    Line::new(from, to).collect()
}
