//! Shortest path search over a JSON graph file.

use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Error;
use clap::Parser;
use log::info;

use pathsearch_core::{AStar, Bfs, Dijkstra, Graph, GraphSolver, Heuristic};

use crate::graph_file::GraphFile;

mod graph_file;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let opts: Opts = Opts::parse();

    let file = GraphFile::load(&opts.graph)?;
    let graph = file.to_graph();
    info!("Loaded {} nodes from {}", graph.len(), opts.graph.display());

    let report = search(&opts, &file, &graph)?;
    println!("{}", report);

    Ok(())
}

/// Shortest path search over a JSON graph file.
#[derive(Parser, Debug)]
#[clap(version, author = "The pathsearch developers")]
struct Opts {
    /// Graph file (JSON)
    #[clap(long, short = 'g')]
    graph: PathBuf,

    /// Start node
    #[clap(long)]
    from: String,

    /// Target node
    #[clap(long)]
    to: String,

    /// Search algorithm: bfs, dijkstra or astar
    #[clap(long, short = 'a', default_value = "dijkstra")]
    algorithm: Algorithm,

    /// A* heuristic over node coordinates: manhattan, euclidean, chebyshev or zero
    #[clap(long, default_value = "manhattan")]
    heuristic: Heuristic,

    /// Print the path from target back to start
    #[clap(long)]
    reverse: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Algorithm {
    Bfs,
    Dijkstra,
    AStar,
}

#[derive(thiserror::Error, Clone, PartialEq, Eq, Debug)]
#[error("Unknown algorithm '{0}', expected one of: bfs, dijkstra, astar")]
struct UnknownAlgorithm(String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Run the configured search and render the outcome, with how much work it took.
fn search(opts: &Opts, file: &GraphFile, graph: &Graph<String, f64>) -> Result<String, Error> {
    let solver: Box<dyn GraphSolver<String, f64> + '_> = match opts.algorithm {
        Algorithm::Bfs => Box::new(Bfs),
        Algorithm::Dijkstra => Box::new(Dijkstra),
        Algorithm::AStar => Box::new(AStar::new(file.heuristic(opts.heuristic))),
    };

    let started = Instant::now();
    let (path, stats) = solver.path_with_stats(graph, &opts.from, &opts.to)?;
    let elapsed = started.elapsed();
    info!("{:?} search done, {} nodes explored, {} left queued", opts.algorithm, stats.explored, stats.queued);

    let mut report = match path {
        Some(path) => {
            let mut report = if opts.reverse {
                path.iter().rev().cloned().collect::<Vec<_>>().join(" -> ")
            } else {
                path.join(" -> ")
            };
            report.push_str(&format!("\nhops: {}", path.len() - 1));
            if let Some(cost) = graph.path_cost(&path) {
                report.push_str(&format!("\ncost: {}", cost));
            }
            report
        }
        None => format!("no path from {} to {}", opts.from, opts.to),
    };
    report.push_str(&format!("\nnodes explored: {}", stats.explored));
    report.push_str(&format!("\ntime: {:.3} ms", elapsed.as_secs_f64() * 1000.0));

    Ok(report)
}
