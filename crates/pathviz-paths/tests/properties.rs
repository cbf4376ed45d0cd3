//! Whole-algorithm properties checked against a plain breadth-first baseline
//! on seeded random boards.

use std::collections::{HashSet, VecDeque};

use pathviz_core::{Board, CellState, Point, scatter_barriers};
use pathviz_paths::{Algorithm, NoRedraw, Outcome};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const SEEDS: std::ops::Range<u64> = 0..40;

/// Whether `end` can be reached from `start` with king moves through
/// non-barrier cells.
fn reachable_8(board: &Board, start: Point, end: Point) -> bool {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        if p == end {
            return true;
        }
        for dr in -1..=1 {
            for dc in -1..=1 {
                let n = p.shift(dr, dc);
                if board.contains(n) && !board.is_barrier(n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
    }
    false
}

/// Shortest hop count from `start` to `end` through non-barrier cells.
fn baseline(board: &Board, start: Point, end: Point) -> Option<usize> {
    let mut dist = vec![usize::MAX; board.len()];
    let mut queue = VecDeque::from([start]);
    dist[board.index(start)?] = 0;
    while let Some(p) = queue.pop_front() {
        let d = dist[board.index(p)?];
        if p == end {
            return Some(d);
        }
        for n in p.neighbors_4() {
            let Some(i) = board.index(n) else { continue };
            if board.is_barrier(n) || dist[i] != usize::MAX {
                continue;
            }
            dist[i] = d + 1;
            queue.push_back(n);
        }
    }
    None
}

fn random_board(seed: u64) -> (Board, Point, Point) {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = rng.random_range(4..20);
    let density = [0.0, 0.15, 0.25, 0.35][seed as usize % 4];
    let start = Point::new(rng.random_range(0..rows), rng.random_range(0..rows));
    let mut end = Point::new(rng.random_range(0..rows), rng.random_range(0..rows));
    if end == start {
        end = Point::new(rows - 1 - start.row, rows - 1 - start.col);
    }
    if end == start {
        end = Point::new(0, 0);
    }

    let mut board = Board::new(rows);
    board.set(start, CellState::Start);
    board.set(end, CellState::End);
    scatter_barriers(&mut board, density, &mut rng, &[start, end]);
    board.update_neighbors();
    (board, start, end)
}

/// Whether the marked route links `start` to `end` through Path cells.
fn path_connects(board: &Board, start: Point, end: Point, diagonal: bool) -> bool {
    let on_route =
        |p: Point| matches!(board.state(p), Some(CellState::Path | CellState::Start | CellState::End));
    let mut seen = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some(p) = stack.pop() {
        if p == end {
            return true;
        }
        for dr in -1..=1 {
            for dc in -1..=1 {
                let n = p.shift(dr, dc);
                let step_ok = if diagonal { p.is_adjacent_8(n) } else { p.is_adjacent_4(n) };
                if step_ok && on_route(n) && seen.insert(n) {
                    stack.push(n);
                }
            }
        }
    }
    false
}

fn run(algo: Algorithm, board: &Board, start: Point, end: Point) -> (Board, Outcome) {
    let mut board = board.clone();
    let outcome = algo.run(&mut board, start, end, &mut NoRedraw);
    (board, outcome)
}

#[test]
fn every_search_agrees_with_reachability() {
    for seed in SEEDS {
        let (board, start, end) = random_board(seed);
        let reachable = baseline(&board, start, end).is_some();
        for algo in Algorithm::ALL {
            let (_, outcome) = run(algo, &board, start, end);
            if algo.is_diagonal() {
                // Diagonal rays can slip between corner-touching barriers.
                let expected = reachable_8(&board, start, end);
                assert_eq!(outcome.is_found(), expected, "{algo} seed {seed}");
            } else {
                assert_eq!(outcome.is_found(), reachable, "{algo} seed {seed}");
            }
        }
    }
}

#[test]
fn marked_routes_are_connected_and_respect_barriers() {
    for seed in SEEDS {
        let (board, start, end) = random_board(seed);
        let barriers = board.positions(CellState::Barrier);
        for algo in Algorithm::ALL {
            let (after, outcome) = run(algo, &board, start, end);
            assert_eq!(after.positions(CellState::Barrier), barriers, "{algo} seed {seed}");
            assert_eq!(after.state(start), Some(CellState::Start), "{algo} seed {seed}");
            assert_eq!(after.state(end), Some(CellState::End), "{algo} seed {seed}");
            if outcome.is_found() {
                assert!(
                    path_connects(&after, start, end, algo.is_diagonal()),
                    "{algo} seed {seed}\n{after}"
                );
            } else {
                assert_eq!(after.count(CellState::Path), 0, "{algo} seed {seed}");
            }
        }
    }
}

#[test]
fn optimal_searches_match_the_baseline_length() {
    for seed in SEEDS {
        let (board, start, end) = random_board(seed);
        let Some(shortest) = baseline(&board, start, end) else {
            continue;
        };
        for algo in Algorithm::ALL.into_iter().filter(|a| a.is_optimal()) {
            let (after, outcome) = run(algo, &board, start, end);
            assert!(outcome.is_found(), "{algo} seed {seed}");
            assert_eq!(after.count(CellState::Path) + 1, shortest, "{algo} seed {seed}\n{after}");
        }
    }
}

#[test]
fn runs_are_deterministic() {
    for seed in SEEDS.step_by(5) {
        let (board, start, end) = random_board(seed);
        for algo in Algorithm::ALL {
            let mut frames_a = Vec::new();
            let mut a = board.clone();
            let oa = algo.run(&mut a, start, end, &mut |b: &Board| frames_a.push(b.to_string()));

            let mut frames_b = Vec::new();
            let mut b = board.clone();
            let ob = algo.run(&mut b, start, end, &mut |b: &Board| frames_b.push(b.to_string()));

            assert_eq!(oa, ob);
            assert_eq!(a, b, "{algo} seed {seed}");
            assert_eq!(frames_a, frames_b, "{algo} seed {seed}");
        }
    }
}

#[test]
fn enclosed_start_finds_nothing() {
    let mut board = Board::parse(
        "
.....
.###.
.#S#.
.###.
....E",
    )
    .unwrap();
    board.update_neighbors();
    for algo in Algorithm::ALL {
        let (after, outcome) = run(algo, &board, Point::new(2, 2), Point::new(4, 4));
        assert_eq!(outcome, Outcome::NotFound, "{algo}");
        assert_eq!(after.count(CellState::Path), 0, "{algo}");
    }
}

#[test]
fn start_equal_to_end_is_trivially_found() {
    let mut board = Board::new(4);
    let p = Point::new(2, 1);
    board.set(p, CellState::Start);
    board.update_neighbors();
    for algo in Algorithm::ALL {
        let (after, outcome) = run(algo, &board, p, p);
        assert_eq!(outcome, Outcome::Found, "{algo}");
        assert_eq!(after.state(p), Some(CellState::Start), "{algo}");
        assert_eq!(after.count(CellState::Path), 0, "{algo}");
    }
}

#[test]
fn wall_with_a_gap_at_the_bottom() {
    let mut board = Board::parse(
        "
S.#.E
..#..
..#..
..#..
.....",
    )
    .unwrap();
    board.update_neighbors();
    let (start, end) = (Point::new(0, 0), Point::new(0, 4));
    // down four, across four, up four
    assert_eq!(baseline(&board, start, end), Some(12));

    for algo in Algorithm::ALL {
        let (after, outcome) = run(algo, &board, start, end);
        assert_eq!(outcome, Outcome::Found, "{algo}");
        assert_eq!(after.state(Point::new(4, 2)), Some(CellState::Path), "{algo}\n{after}");
        if algo.is_optimal() {
            assert_eq!(after.count(CellState::Path) + 1, 12, "{algo}\n{after}");
        }
    }
}

#[test]
fn cancellation_leaves_no_path() {
    let (board, start, end) = random_board(3);
    for algo in Algorithm::ALL {
        let mut b = board.clone();
        let ctx = pathviz_core::Context::new();
        let mut frames = 0;
        let redraw = |_: &Board| frames += 1;
        let mut watch = pathviz_paths::Watch::new(ctx.clone(), redraw);
        ctx.cancel();
        let outcome = algo.run(&mut b, start, end, &mut watch);
        drop(watch);
        assert_eq!(outcome, Outcome::Cancelled, "{algo}");
        assert_eq!(frames, 0, "{algo}");
        assert_eq!(b.count(CellState::Path), 0, "{algo}");
    }
}

#[test]
fn zero_frame_budget_draws_nothing() {
    let (board, start, end) = random_board(7);
    for algo in Algorithm::ALL {
        let mut b = board.clone();
        let ctx = pathviz_core::Context::with_frame_limit(0);
        let mut frames = 0;
        let mut watch = pathviz_paths::Watch::new(ctx.clone(), |_: &Board| frames += 1);
        let outcome = algo.run(&mut b, start, end, &mut watch);
        drop(watch);
        assert_eq!(outcome, Outcome::Cancelled, "{algo}");
        assert_eq!((frames, ctx.frames()), (0, 0), "{algo}");
    }
}
