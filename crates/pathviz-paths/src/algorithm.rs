use std::fmt;
use std::str::FromStr;

use pathviz_core::{Board, Point};

use crate::search::Outcome;
use crate::traits::Redraw;
use crate::{astar, bidirectional, dfs, dijkstra, jps, theta_star};

/// The available searches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    #[default]
    Dfs,
    Dijkstra,
    Bidirectional,
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    Jps,
    #[cfg_attr(feature = "serde", serde(rename = "theta"))]
    ThetaStar,
}

impl Algorithm {
    /// Every algorithm, in selection-key order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Bidirectional,
        Algorithm::AStar,
        Algorithm::Jps,
        Algorithm::ThetaStar,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Dfs => "Depth First Search",
            Algorithm::Dijkstra => "Dijkstra Algorithm",
            Algorithm::Bidirectional => "Bidirectional Search",
            Algorithm::AStar => "A* Algorithm",
            Algorithm::Jps => "Jump Point Search",
            Algorithm::ThetaStar => "Theta* Algorithm",
        }
    }

    /// Short name used on the command line and in settings files.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bidirectional => "bidirectional",
            Algorithm::AStar => "astar",
            Algorithm::Jps => "jps",
            Algorithm::ThetaStar => "theta",
        }
    }

    /// A paragraph describing how the search behaves.
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Dfs => {
                "Uninformed search that follows one branch as deep as it can before \
                 backtracking. Finds a path if one exists, but usually not the shortest."
            }
            Algorithm::Dijkstra => {
                "Expands cells in order of distance from the start. With equal step \
                 costs this is a breadth-first sweep and always finds a shortest path."
            }
            Algorithm::Bidirectional => {
                "Runs two breadth-first searches, one from each end, and stops where \
                 they meet. Usually explores far less than a single sweep."
            }
            Algorithm::AStar => {
                "Ranks cells by distance travelled plus estimated distance remaining. \
                 The Manhattan estimate never overshoots, so the path is a shortest one."
            }
            Algorithm::Jps => {
                "A* over straight runs: whole corridors are reached in a single jump, \
                 cutting the number of cells expanded. Does not guarantee the shortest path."
            }
            Algorithm::ThetaStar => {
                "Like jump point search but with diagonal rays too, producing direct \
                 any-angle shortcuts across open ground."
            }
        }
    }

    /// The selection key ('1' to '6').
    pub fn key(self) -> char {
        match self {
            Algorithm::Dfs => '1',
            Algorithm::Dijkstra => '2',
            Algorithm::Bidirectional => '3',
            Algorithm::AStar => '4',
            Algorithm::Jps => '5',
            Algorithm::ThetaStar => '6',
        }
    }

    /// Inverse of [`key`](Self::key).
    pub fn from_key(key: char) -> Option<Algorithm> {
        Self::ALL.into_iter().find(|a| a.key() == key)
    }

    /// Cycle to the next algorithm.
    pub fn next(self) -> Algorithm {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Whether the marked path is always a shortest one.
    pub fn is_optimal(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar | Algorithm::Bidirectional)
    }

    /// Whether the path may take diagonal steps.
    pub fn is_diagonal(self) -> bool {
        self == Algorithm::ThetaStar
    }

    /// Run this search on `board` from `start` to `end`.
    ///
    /// The board's neighbour caches must be current (see
    /// [`Board::update_neighbors`]) and `start`/`end` must lie on the
    /// board.
    pub fn run<R: Redraw + ?Sized>(
        self,
        board: &mut Board,
        start: Point,
        end: Point,
        redraw: &mut R,
    ) -> Outcome {
        let rows = board.rows();
        log::debug!("{}: searching {start} -> {end} on {rows}x{rows}", self.name());
        let outcome = match self {
            Algorithm::Dfs => dfs(board, start, end, redraw),
            Algorithm::Dijkstra => dijkstra(board, start, end, redraw),
            Algorithm::Bidirectional => bidirectional(board, start, end, redraw),
            Algorithm::AStar => astar(board, start, end, redraw),
            Algorithm::Jps => jps(board, start, end, redraw),
            Algorithm::ThetaStar => theta_star(board, start, end, redraw),
        };
        match outcome {
            Outcome::Cancelled => log::warn!("{}: cancelled", self.name()),
            _ => log::debug!("{}: {outcome:?}", self.name()),
        }
        outcome
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised algorithm name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?} (expected one of dfs, dijkstra, bidirectional, astar, jps, theta)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Accepts the short [`name`](Algorithm::name), a few common spellings,
    /// or the selection key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let found = match lower.as_str() {
            "dfs" | "depth-first" => Some(Algorithm::Dfs),
            "dijkstra" => Some(Algorithm::Dijkstra),
            "bidirectional" | "bfs2" | "bidi" => Some(Algorithm::Bidirectional),
            "astar" | "a*" | "a-star" => Some(Algorithm::AStar),
            "jps" | "jump-point" => Some(Algorithm::Jps),
            "theta" | "theta*" | "theta-star" => Some(Algorithm::ThetaStar),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(k), None) => Algorithm::from_key(k),
                    _ => None,
                }
            }
        };
        found.ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NoRedraw;

    #[test]
    fn keys_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(Algorithm::from_key(a.key()), Some(a));
        }
        assert_eq!(Algorithm::from_key('7'), None);
    }

    #[test]
    fn names_parse() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("4".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert!("bogo".parse::<Algorithm>().is_err());
    }

    #[test]
    fn next_cycles_through_all() {
        let mut a = Algorithm::default();
        for expected in Algorithm::ALL.iter().cycle().skip(1).take(6) {
            a = a.next();
            assert_eq!(a, *expected);
        }
        assert_eq!(a, Algorithm::Dfs);
    }

    #[test]
    fn labels_and_descriptions_are_distinct() {
        let labels: std::collections::HashSet<_> = Algorithm::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels.len(), 6);
        assert!(Algorithm::ALL.iter().all(|a| !a.description().is_empty()));
    }

    #[test]
    fn run_dispatches_each_algorithm() {
        for a in Algorithm::ALL {
            let mut b = Board::new(4);
            b.update_neighbors();
            let outcome = a.run(&mut b, Point::new(0, 0), Point::new(3, 3), &mut NoRedraw);
            assert_eq!(outcome, Outcome::Found, "{a}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_the_short_names() {
        for a in Algorithm::ALL {
            let json = serde_json::to_string(&a).unwrap();
            assert_eq!(json, format!("\"{}\"", a.name()));
            assert_eq!(serde_json::from_str::<Algorithm>(&json).unwrap(), a);
        }
    }
}
