use std::process::exit;

use clap::Parser;
use env_logger::Env;
use knights_tour::{KnightTour, Square, Topology, TourStatus};
use log::{error, info};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Find a knight's tour with Warnsdorff-ordered backtracking search.
#[derive(Parser, Debug)]
#[command(name = "tour", version, about)]
struct Args {
    /// Start row (0-based)
    #[arg(short, long, default_value_t = 0)]
    row: u8,

    /// Start column (0-based)
    #[arg(short, long, default_value_t = 0)]
    col: u8,

    /// Board side length (1..=8)
    #[arg(short, long, default_value_t = 8)]
    size: usize,

    /// Search from every start square and print a summary
    #[arg(short, long)]
    all: bool,

    /// Pick the start square at random
    #[arg(long, conflicts_with = "all")]
    random: bool,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let topology = match Topology::new(args.size) {
        Ok(topology) => topology,
        Err(e) => {
            error!("{}", e);
            exit(2);
        }
    };

    if args.all {
        run_all(&topology);
        return;
    }

    let start = if args.random {
        let squares: Vec<Square> = (0..topology.area()).map(|i| topology.square_at(i)).collect();
        let mut rng = StdRng::seed_from_u64(args.seed);
        match squares.choose(&mut rng) {
            Some(square) => *square,
            None => {
                error!("board has no squares");
                exit(2);
            }
        }
    } else {
        Square::new(args.row, args.col)
    };

    let report = match KnightTour::new(&topology).find(start) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            exit(2);
        }
    };

    info!(
        "{} from {} ({} nodes, {} dead ends)",
        report.status, report.start, report.stats.nodes, report.stats.dead_ends
    );

    match report.order {
        Some(order) => print!("{}", order),
        None => {
            info!("no knight's tour exists from {}", start);
            exit(1);
        }
    }
}

fn run_all(topology: &Topology) {
    let mut engine = KnightTour::new(topology);
    let mut complete = 0;
    let mut total_nodes = 0;

    for idx in 0..topology.area() {
        let start = topology.square_at(idx);
        let report = match engine.find(start) {
            Ok(report) => report,
            Err(e) => {
                error!("{}: {}", start, e);
                continue;
            }
        };
        total_nodes += report.stats.nodes;
        if report.status == TourStatus::Complete {
            complete += 1;
        }
        info!(
            "{}: {} ({} nodes, {} dead ends)",
            start, report.status, report.stats.nodes, report.stats.dead_ends
        );
    }

    println!(
        "{}/{} start squares complete, {} nodes total",
        complete,
        topology.area(),
        total_nodes
    );
}
