//! Breadth-first path search.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use log::{debug, trace};

use crate::errors::Result;
use crate::graph::{Graph, GraphSolver};
use crate::path::{reconstruct_path, SearchStats};

/// Find the path from `start` to `target` with the fewest links.
///
/// Link weights are ignored. Among equally short paths the one discovered first
/// wins, following each node's link order.
pub fn bfs<T: Clone + Eq + Hash, W>(graph: &Graph<T, W>, start: &T, target: &T) -> Result<Option<Vec<T>>> {
    Ok(bfs_with_stats(graph, start, target)?.0)
}

/// Same as [`bfs`], also reporting how much work the search did.
pub fn bfs_with_stats<T: Clone + Eq + Hash, W>(graph: &Graph<T, W>, start: &T, target: &T) -> Result<(Option<Vec<T>>, SearchStats)> {
    graph.check_endpoints(start, target)?;

    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    let mut previous = HashMap::<T, T>::new();
    let mut explored = 0_usize;

    queue.push_back(start.clone());
    visited.insert(start.clone());

    while let Some(id) = queue.pop_front() {
        explored += 1;
        trace!("bfs: visiting node #{}", explored);

        if id == *target {
            let path = reconstruct_path(&previous, &id);
            debug!("bfs: found path of {} hops, {} nodes explored, {} discovered", path.len() - 1, explored, visited.len());
            return Ok((Some(path), SearchStats { explored, queued: queue.len() }));
        }

        for (n_node, _) in graph.neighbors(&id) {
            // Marking on enqueue keeps every node in the queue at most once
            if visited.insert(n_node.clone()) {
                previous.insert(n_node.clone(), id.clone());
                queue.push_back(n_node.clone());
            }
        }
    }

    debug!("bfs: no path, {} nodes explored", explored);
    Ok((None, SearchStats { explored, queued: 0 }))
}

/// Breadth-first search strategy.
#[derive(Copy, Clone, Debug, Default)]
pub struct Bfs;

impl<T: Clone + Eq + Hash, W> GraphSolver<T, W> for Bfs {
    fn path_with_stats(&self, graph: &Graph<T, W>, from: &T, to: &T) -> Result<(Option<Vec<T>>, SearchStats)> {
        bfs_with_stats(graph, from, to)
    }
}
