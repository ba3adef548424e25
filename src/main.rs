use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wayfind::{AStarSolver, GraphStore, Outcome};

/// Shortest-path query engine for geographic road networks
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(about = "A* shortest-path queries over DIMACS-style road networks", long_about = None)]
struct Args {
    /// Start vertex id
    start: u32,

    /// Goal vertex id
    goal: u32,

    /// Base name of the dataset pair (<map>.co and <map>.gr)
    #[arg(short, long)]
    map: String,

    /// Path the reconstructed route is written to
    #[arg(short, long)]
    output: PathBuf,

    /// Optional path for a JSON dump of the query statistics
    #[arg(long)]
    stats: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("Loading map: {}...", args.map);
    let graph = match GraphStore::load(&args.map) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let start_time = Instant::now();
    let mut solver = AStarSolver::new(&graph);
    let solution = solver.solve(args.start, args.goal);
    let elapsed = start_time.elapsed().as_secs_f64();

    println!("# vertices: {}", graph.vertex_count());
    println!("# edges : {}", graph.edge_count());

    match solution.outcome {
        Outcome::Route { cost } => println!("Optimal solution found with cost {cost}"),
        Outcome::NoRoute | Outcome::UnknownVertex => println!("No route found."),
    }

    println!("Execution time: {elapsed:.2} seconds");

    let expanded = solution.stats.expanded_nodes();
    let rate = if elapsed > 0.0 {
        expanded as f64 / elapsed
    } else {
        0.0
    };
    println!("# expansions: {expanded} ({rate:.2} nodes/sec)");

    let route = match solution.outcome {
        Outcome::Route { .. } => solver.reconstruct_path(args.start, args.goal),
        Outcome::NoRoute | Outcome::UnknownVertex => String::new(),
    };
    if let Err(err) = std::fs::write(&args.output, route + "\n") {
        eprintln!("Error writing {}: {err}", args.output.display());
        std::process::exit(1);
    }

    if let Some(stats_path) = &args.stats {
        if let Err(err) = solution.stats.dump(stats_path) {
            eprintln!("Error writing {}: {err}", stats_path.display());
            std::process::exit(1);
        }
    }
}
