//! Grid search algorithms that paint their progress onto a [`Board`].
//!
//! Each search takes a board, a start and an end cell, and a [`Redraw`]
//! sink that is handed the board after every expansion step:
//!
//! - **DFS** depth-first, stack driven ([`dfs`])
//! - **Dijkstra** uniform-cost, priority queue driven ([`dijkstra`])
//! - **Bidirectional BFS** two FIFO frontiers meeting in the middle ([`bidirectional`])
//! - **A\*** Manhattan-guided best-first search ([`astar`])
//! - **Jump Point Search** simplified, axis rays as successors ([`jps`])
//! - **Theta\*** simplified, eight-way rays joined by Bresenham lines ([`theta_star`])
//!
//! [`Algorithm`] selects one of these at runtime.
//!
//! Cells are marked Open when first discovered, Closed once expanded, and
//! Path on the reported route. Start and End markers are always restored
//! before a search returns.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Redraw`] | per-step frame sink, also polled for cancellation |
//! | [`Pather`] | successor generation for the best-first core |
//! | [`AstarPather`] : [`Pather`] | adds the remaining-cost estimate |
//!
//! [`Board`]: pathviz_core::Board

mod algorithm;
mod astar;
mod bidirectional;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;
mod jps;
mod line;
mod neighbors;
mod reconstruct;
mod search;
mod theta_star;
mod traits;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::astar;
pub use bidirectional::bidirectional;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::{euclidean, manhattan};
pub use frontier::{Predecessors, UNREACHABLE};
pub use jps::jps;
pub use line::{Line, bresenham};
pub use neighbors::{ALL_RAYS, Informed, ORTHOGONAL_RAYS, Rays, Uninformed};
pub use reconstruct::reconstruct_path;
pub use search::Outcome;
pub use theta_star::theta_star;
pub use traits::{AstarPather, NoRedraw, Pather, Redraw, Watch};
