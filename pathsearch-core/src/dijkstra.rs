//! Dijkstra path search implementation.

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};

use crate::errors::{InvalidInput, Result};
use crate::frontier::Frontier;
use crate::graph::{Graph, GraphSolver};
use crate::numtraits::{is_non_negative, CheckedAdd, IntoOrd, Zero};
use crate::path::{reconstruct_path, Route, SearchStats};

/// Find the cheapest path from `start` to `target` and its total weight.
///
/// All link weights must be non-negative; a negative (or `NaN`) weight met during
/// the search fails it with [`InvalidInput::NegativeWeight`], and a path cost the
/// weight type can't hold fails it with [`InvalidInput::WeightOverflow`].
///
/// Equal-cost alternatives are resolved by discovery: a node keeps the first
/// predecessor that reached it at its final cost, and queued entries of equal
/// cost are expanded in the order they were pushed.
pub fn dijkstra<T, W>(graph: &Graph<T, W>, start: &T, target: &T) -> Result<Option<Route<T, W>>>
where
    T: Clone + Eq + Hash,
    W: Copy + PartialOrd + CheckedAdd + Zero + IntoOrd,
{
    Ok(dijkstra_with_stats(graph, start, target)?.0)
}

/// Same as [`dijkstra`], also reporting how much work the search did.
pub fn dijkstra_with_stats<T, W>(graph: &Graph<T, W>, start: &T, target: &T) -> Result<(Option<Route<T, W>>, SearchStats)>
where
    T: Clone + Eq + Hash,
    W: Copy + PartialOrd + CheckedAdd + Zero + IntoOrd,
{
    graph.check_endpoints(start, target)?;

    // Algorithm state. A node missing from `distance` has infinite distance.
    let mut distance = HashMap::<T, W>::new();
    let mut previous = HashMap::<T, T>::new();
    let mut frontier = Frontier::<T, W>::new();
    let mut explored = 0_usize;
    let mut stale = 0_usize;

    distance.insert(start.clone(), W::ZERO);
    frontier.push(start.clone(), W::ZERO);

    while let Some((id, queued_cost)) = frontier.pop() {
        explored += 1;

        // Every queued node has a distance; it may have improved since this entry was pushed
        let cost = distance[&id];
        if queued_cost > cost {
            stale += 1;
        }
        trace!("dijkstra: popped node #{} ({} queued)", explored, frontier.len());

        if id == *target {
            let path = reconstruct_path(&previous, &id);
            debug!(
                "dijkstra: found path of {} hops, {} pops ({} stale), {} still queued",
                path.len() - 1, explored, stale, frontier.len(),
            );
            let stats = SearchStats { explored, queued: frontier.len() };
            return Ok((Some(Route { path, distance: cost }), stats));
        }

        for (n_node, n_cost) in graph.neighbors(&id) {
            if !is_non_negative(n_cost) {
                return Err(InvalidInput::NegativeWeight);
            }

            let alt = cost.checked_add(*n_cost).ok_or(InvalidInput::WeightOverflow)?;
            let improved = distance.get(n_node).map_or(true, |&known| alt < known);
            if improved {
                distance.insert(n_node.clone(), alt);
                previous.insert(n_node.clone(), id.clone());
                frontier.push(n_node.clone(), alt);
            }
        }
    }

    debug!("dijkstra: no path, {} pops ({} stale)", explored, stale);
    Ok((None, SearchStats { explored, queued: 0 }))
}

/// Dijkstra search strategy.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dijkstra;

impl<T, W> GraphSolver<T, W> for Dijkstra
where
    T: Clone + Eq + Hash,
    W: Copy + PartialOrd + CheckedAdd + Zero + IntoOrd,
{
    fn path_with_stats(&self, graph: &Graph<T, W>, from: &T, to: &T) -> Result<(Option<Vec<T>>, SearchStats)> {
        let (route, stats) = dijkstra_with_stats(graph, from, to)?;
        Ok((route.map(|route| route.path), stats))
    }
}
