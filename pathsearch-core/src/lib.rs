//! Shortest-path search over in-memory weighted directed graphs.
//!
//! Three interchangeable strategies share one graph model:
//! breadth-first search ([`bfs`]), Dijkstra ([`dijkstra`]) and A* ([`astar`]).
//! Each either returns a path, reports that none exists (`Ok(None)`),
//! or rejects malformed input with [`InvalidInput`].

pub use self::astar::{astar, astar_route, astar_with_stats, AStar};
pub use self::bfs::{bfs, bfs_with_stats, Bfs};
pub use self::dijkstra::{dijkstra, dijkstra_with_stats, Dijkstra};
pub use self::errors::{InvalidInput, Result};
pub use self::frontier::Frontier;
pub use self::graph::{Graph, GraphBuilder, GraphSolver};
pub use self::heuristic::{Heuristic, Point, UnknownHeuristic};
pub use self::numtraits::{CheckedAdd, IntoOrd, Zero};
pub use self::path::{Route, SearchStats};

mod astar;
mod bfs;
mod dijkstra;
mod errors;
mod frontier;
mod graph;
mod numtraits;
mod path;

pub mod heuristic;
