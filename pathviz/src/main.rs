use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context as _, bail};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use pathviz::{Report, Session, Settings};
use pathviz_core::{Board, Context, Point, scatter_barriers};
use pathviz_paths::{Algorithm, Redraw, Watch};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Run grid path searches and print the explored board.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// ASCII map file (`.` empty, `#` barrier, `S` start, `E` end)
    #[arg(short, long, conflicts_with = "rows")]
    map: Option<PathBuf>,

    /// Size of a generated square board
    #[arg(short, long)]
    rows: Option<i32>,

    /// Start cell as ROW,COL
    #[arg(short, long)]
    start: Option<Point>,

    /// End cell as ROW,COL
    #[arg(short, long)]
    end: Option<Point>,

    /// Fraction of empty cells to turn into barriers
    #[arg(short, long, default_value_t = 0.0)]
    density: f64,

    /// Seed for barrier placement
    #[arg(long)]
    seed: Option<u64>,

    /// Search to run: dfs, dijkstra, bidirectional, astar, jps or theta
    #[arg(short, long, conflicts_with = "all")]
    algorithm: Option<Algorithm>,

    /// Run every search on the same board and compare them
    #[arg(long)]
    all: bool,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every frame while searching
    #[arg(long)]
    animate: bool,

    /// Cancel the search after this many frames
    #[arg(long)]
    max_redraws: Option<usize>,
}

/// Prints each frame to stdout when animating.
struct Frames {
    animate: bool,
    delay: Duration,
}

impl Redraw for Frames {
    fn redraw(&mut self, board: &Board) {
        if self.animate {
            println!("{board}\n");
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
    }
}

fn build_session(args: &Args, settings: Settings) -> anyhow::Result<Session> {
    let mut session = Session::new(settings);

    if let Some(path) = &args.map {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading map {}", path.display()))?;
        let board: Board = text
            .parse()
            .with_context(|| format!("parsing map {}", path.display()))?;
        session.load(board);
    }

    if let Some(p) = args.start {
        if !session.set_start(p) {
            bail!("start {p} is off the board or on the end cell");
        }
    }
    if let Some(p) = args.end {
        if !session.set_end(p) {
            bail!("end {p} is off the board or on the start cell");
        }
    }

    if args.density > 0.0 {
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("barrier seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        let keep: Vec<Point> = session.start().into_iter().chain(session.end()).collect();
        scatter_barriers(session.board_mut(), args.density, &mut rng, &keep);
    }
    Ok(session)
}

fn run_one(session: &mut Session, args: &Args) -> anyhow::Result<Report> {
    let ctx = match args.max_redraws {
        Some(limit) => Context::with_frame_limit(limit),
        None => Context::new(),
    };
    let frames = Frames {
        animate: args.animate,
        delay: Duration::from_millis(session.settings().frame_delay_ms),
    };
    let report = session.run(&mut Watch::new(ctx.clone(), frames))?;
    log::debug!("{} frames drawn", ctx.frames());
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path).context("loading settings")?,
        None => Settings::default(),
    };
    if let Some(rows) = args.rows {
        settings.rows = rows;
    }
    if let Some(algorithm) = args.algorithm {
        settings.algorithm = algorithm;
    }
    settings.validate()?;

    let session = build_session(&args, settings)?;

    if args.all {
        let mut reports = Vec::with_capacity(Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            let mut copy = session.clone();
            copy.select(algorithm);
            let report = run_one(&mut copy, &args)?;
            println!("{}\n", copy.board());
            reports.push(report);
        }
        println!("{:<22} {:>9} {:>6} {:>6} {:>10}", "algorithm", "outcome", "path", "extra", "time");
        for r in &reports {
            println!(
                "{:<22} {:>9} {:>6} {:>6} {:>10.2?}",
                r.algorithm.label(),
                format!("{:?}", r.outcome),
                r.path_length,
                r.extra_search,
                r.elapsed
            );
        }
    } else {
        let mut session = session;
        let report = run_one(&mut session, &args)?;
        println!("{}", session.board());
        println!("{report}");
    }
    Ok(())
}
