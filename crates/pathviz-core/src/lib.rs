//! **pathviz-core** — the grid model shared by the pathviz searches and
//! driver.
//!
//! This crate provides the foundational types: grid coordinates, cells with
//! an exclusive state tag, the square [`Board`] that owns them, a plain-text
//! map format, random barrier placement, and a cooperative cancellation
//! token.

pub mod board;
pub mod cell;
pub mod context;
pub mod geom;
pub mod scatter;
pub mod text;

pub use board::Board;
pub use cell::{Cell, CellState};
pub use context::Context;
pub use geom::{ParsePointError, Point};
pub use scatter::scatter_barriers;
pub use text::MapError;
