//! A* path search.
//!
//! Same relaxation as Dijkstra, but the frontier is ordered by `g + h`, where `h`
//! is a caller-supplied estimate of the remaining cost to the target.
//! With an admissible heuristic the path is optimal; with an inadmissible one the
//! search still terminates but may return a longer path. Neither is checked.

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};

use crate::errors::{InvalidInput, Result};
use crate::frontier::Frontier;
use crate::graph::{Graph, GraphSolver};
use crate::numtraits::{is_comparable, is_non_negative, CheckedAdd, IntoOrd, Zero};
use crate::path::{reconstruct_path, Route, SearchStats};

/// Find a path from `start` to `target` guided by `heuristic(node, target)`.
pub fn astar<T, W, H>(graph: &Graph<T, W>, start: &T, target: &T, heuristic: H) -> Result<Option<Vec<T>>>
where
    T: Clone + Eq + Hash,
    W: Copy + PartialOrd + CheckedAdd + Zero + IntoOrd,
    H: Fn(&T, &T) -> W,
{
    Ok(astar_route(graph, start, target, heuristic)?.map(|route| route.path))
}

/// Same as [`astar`], also reporting the cost of the path found.
pub fn astar_route<T, W, H>(graph: &Graph<T, W>, start: &T, target: &T, heuristic: H) -> Result<Option<Route<T, W>>>
where
    T: Clone + Eq + Hash,
    W: Copy + PartialOrd + CheckedAdd + Zero + IntoOrd,
    H: Fn(&T, &T) -> W,
{
    Ok(astar_with_stats(graph, start, target, heuristic)?.0)
}

/// Same as [`astar_route`], also reporting how much work the search did.
pub fn astar_with_stats<T, W, H>(graph: &Graph<T, W>, start: &T, target: &T, heuristic: H) -> Result<(Option<Route<T, W>>, SearchStats)>
where
    T: Clone + Eq + Hash,
    W: Copy + PartialOrd + CheckedAdd + Zero + IntoOrd,
    H: Fn(&T, &T) -> W,
{
    graph.check_endpoints(start, target)?;

    // Queue priority `g + h` of `node`; it must be orderable, so a NaN estimate
    // or an infinite `g` meeting a negatively infinite `h` is rejected.
    let f_score = |g: W, node: &T| -> Result<W> {
        let h = heuristic(node, target);
        if !is_comparable(&h) {
            return Err(InvalidInput::InvalidHeuristic);
        }
        let f = g.checked_add(h).ok_or(InvalidInput::WeightOverflow)?;
        if is_comparable(&f) { Ok(f) } else { Err(InvalidInput::InvalidHeuristic) }
    };

    // Cost of the best known path from start; missing means infinity.
    // The f-score lives only in the frontier entries.
    let mut g_score = HashMap::<T, W>::new();
    let mut previous = HashMap::<T, T>::new();
    let mut open_set = Frontier::<T, W>::new();
    let mut explored = 0_usize;

    g_score.insert(start.clone(), W::ZERO);
    open_set.push(start.clone(), f_score(W::ZERO, start)?);

    while let Some((current, _)) = open_set.pop() {
        explored += 1;
        trace!("astar: popped node #{} ({} queued)", explored, open_set.len());

        let current_g = g_score[&current];

        if current == *target {
            let path = reconstruct_path(&previous, &current);
            debug!("astar: found path of {} hops, {} pops, {} still queued", path.len() - 1, explored, open_set.len());
            let stats = SearchStats { explored, queued: open_set.len() };
            return Ok((Some(Route { path, distance: current_g }), stats));
        }

        for (neighbor, weight) in graph.neighbors(&current) {
            if !is_non_negative(weight) {
                return Err(InvalidInput::NegativeWeight);
            }

            let tentative_g = current_g.checked_add(*weight).ok_or(InvalidInput::WeightOverflow)?;
            let improved = g_score.get(neighbor).map_or(true, |&known| tentative_g < known);
            if improved {
                let f = f_score(tentative_g, neighbor)?;
                previous.insert(neighbor.clone(), current.clone());
                g_score.insert(neighbor.clone(), tentative_g);
                open_set.push(neighbor.clone(), f);
            }
        }
    }

    debug!("astar: no path, {} pops", explored);
    Ok((None, SearchStats { explored, queued: 0 }))
}

/// A* search strategy with its heuristic.
#[derive(Copy, Clone, Debug)]
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {
    pub fn new(heuristic: H) -> Self {
        AStar { heuristic }
    }
}

impl<T, W, H> GraphSolver<T, W> for AStar<H>
where
    T: Clone + Eq + Hash,
    W: Copy + PartialOrd + CheckedAdd + Zero + IntoOrd,
    H: Fn(&T, &T) -> W,
{
    fn path_with_stats(&self, graph: &Graph<T, W>, from: &T, to: &T) -> Result<(Option<Vec<T>>, SearchStats)> {
        let (route, stats) = astar_with_stats(graph, from, to, &self.heuristic)?;
        Ok((route.map(|route| route.path), stats))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::dijkstra::dijkstra;
    use crate::errors::InvalidInput;
    use crate::graph::{Graph, GraphBuilder, GraphSolver};
    use crate::heuristic::manhattan;
    use crate::path::Route;

    use super::{astar, astar_route, astar_with_stats, AStar};

    type Pos = (i64, i64);

    fn sample() -> Graph<&'static str, f64> {
        let mut g = Graph::new();
        g.add_node("A", vec![("B", 1.0), ("C", 4.0)]);
        g.add_node("B", vec![("C", 1.0), ("D", 2.0)]);
        g.add_node("C", vec![("D", 1.0)]);
        g.add_node("D", vec![]);
        g.add_node("E", vec![]);
        g
    }

    fn zero(_: &&str, _: &&str) -> f64 {
        0.0
    }

    /// Open 4-connected grid with unit links, minus the `walls`.
    fn grid(w: i64, h: i64, walls: &[Pos]) -> Graph<Pos, f64> {
        let mut g = Graph::new();
        for x in 0..w {
            for y in 0..h {
                if walls.contains(&(x, y)) {
                    continue;
                }
                let links = [(1, 0), (-1, 0), (0, 1), (0, -1)]
                    .iter()
                    .map(|(dx, dy)| (x + dx, y + dy))
                    .filter(|&(nx, ny)| nx >= 0 && ny >= 0 && nx < w && ny < h && !walls.contains(&(nx, ny)))
                    .map(|p| (p, 1.0))
                    .collect::<Vec<_>>();
                g.add_node((x, y), links);
            }
        }
        g
    }

    #[test]
    fn test_astar_zero_heuristic_matches_dijkstra() {
        let g = sample();
        assert_eq!(astar(&g, &"A", &"D", zero), Ok(Some(vec!["A", "B", "D"])));
        assert_eq!(astar_route(&g, &"A", &"D", zero), Ok(Some(Route { path: vec!["A", "B", "D"], distance: 3.0 })));
        let d = dijkstra(&g, &"A", &"D").unwrap().unwrap();
        let a = astar_route(&g, &"A", &"D", zero).unwrap().unwrap();
        assert_eq!(a, d);
    }

    #[test]
    fn test_astar_grid_manhattan() {
        let walls = [(2, 0), (2, 1), (2, 2), (2, 3)];
        let g = grid(5, 5, &walls);
        let route = astar_route(&g, &(0, 0), &(4, 0), |a: &Pos, b: &Pos| manhattan(*a, *b)).unwrap().unwrap();
        let best = dijkstra(&g, &(0, 0), &(4, 0)).unwrap().unwrap();
        // Around the wall through row 4
        assert_eq!(route.distance, 12.0);
        assert_eq!(route.distance, best.distance);
        assert_eq!(g.path_cost(&route.path), Some(12.0));
        assert_eq!(route.path.first(), Some(&(0, 0)));
        assert_eq!(route.path.last(), Some(&(4, 0)));
    }

    #[test]
    fn test_astar_heuristic_prunes_search() {
        let g = grid(8, 8, &[]);
        let calls = Cell::new(0);
        let counted = |a: &Pos, b: &Pos| {
            calls.set(calls.get() + 1);
            manhattan(*a, *b)
        };
        let path = astar(&g, &(0, 0), &(7, 0), counted).unwrap().unwrap();
        assert_eq!(path.len(), 8);
        // A straight corridor is followed without flooding the whole grid
        assert!(calls.get() < 64, "heuristic called {} times", calls.get());
    }

    #[test]
    fn test_astar_inadmissible_heuristic_still_terminates() {
        // Overestimating the cost through B makes A* settle for the direct link
        let mut g = Graph::new();
        g.add_node("S", vec![("B", 1), ("T", 5)]);
        g.add_node("B", vec![("T", 1)]);
        let h = |n: &&str, _: &&str| if *n == "B" { 100 } else { 0 };
        assert_eq!(astar(&g, &"S", &"T", h), Ok(Some(vec!["S", "T"])));
        assert_eq!(dijkstra(&g, &"S", &"T").unwrap().map(|r| r.distance), Some(2));
    }

    #[test]
    fn test_astar_start_is_target() {
        let g = sample();
        assert_eq!(astar(&g, &"C", &"C", zero), Ok(Some(vec!["C"])));
    }

    #[test]
    fn test_astar_not_found() {
        let g = sample();
        assert_eq!(astar(&g, &"A", &"E", zero), Ok(None));
        assert_eq!(AStar::new(zero).path(&g, &"A", &"E"), Ok(None));
    }

    #[test]
    fn test_astar_invalid_input() {
        let g = sample();
        assert_eq!(astar(&g, &"Q", &"A", zero), Err(InvalidInput::UnknownStartNode));
        assert_eq!(astar(&g, &"A", &"Q", zero), Err(InvalidInput::UnknownTargetNode));
        assert_eq!(astar(&g, &"A", &"D", |_: &&str, _: &&str| f64::NAN), Err(InvalidInput::InvalidHeuristic));

        let mut g = Graph::new();
        g.add_node("A", vec![("B", -2.0)]);
        assert_eq!(astar(&g, &"A", &"B", zero), Err(InvalidInput::NegativeWeight));
    }

    #[test]
    fn test_astar_unorderable_priority() {
        // inf + -inf has no order; the search must reject it rather than queue it
        let mut g = Graph::new();
        g.add_node("A", vec![("B", f64::INFINITY), ("C", 1.0)]);
        let h = |n: &&str, _: &&str| if *n == "B" { f64::NEG_INFINITY } else { 0.0 };
        assert_eq!(astar(&g, &"A", &"C", h), Err(InvalidInput::InvalidHeuristic));

        // Infinite weight alone is still a valid, if useless, link
        let mut g = Graph::new();
        g.add_node("A", vec![("B", f64::INFINITY), ("C", 1.0)]);
        assert_eq!(astar(&g, &"A", &"C", zero), Ok(Some(vec!["A", "C"])));
    }

    #[test]
    fn test_astar_weight_overflow() {
        let mut g = Graph::new();
        g.add_node("A", vec![("B", 200_u8)]);
        g.add_node("B", vec![("C", 100_u8)]);
        let no_estimate = |_: &&str, _: &&str| 0_u8;
        assert_eq!(astar(&g, &"A", &"B", no_estimate), Ok(Some(vec!["A", "B"])));
        assert_eq!(astar(&g, &"A", &"C", no_estimate), Err(InvalidInput::WeightOverflow));

        // A path cost that fits, pushed over the limit by the estimate
        let big_estimate = |n: &&str, _: &&str| if *n == "B" { 100_u8 } else { 0 };
        assert_eq!(astar(&g, &"A", &"B", big_estimate), Err(InvalidInput::WeightOverflow));
    }

    #[test]
    fn test_astar_stats() {
        let g = sample();
        let (found, stats) = astar_with_stats(&g, &"A", &"D", zero).unwrap();
        assert_eq!(found, Some(Route { path: vec!["A", "B", "D"], distance: 3.0 }));
        assert_eq!(stats.explored, 4);
        assert_eq!(stats.queued, 1);

        let (path, stats) = AStar::new(zero).path_with_stats(&g, &"A", &"E").unwrap();
        assert_eq!(path, None);
        assert_eq!(stats.explored, 5);
    }

    #[test]
    fn test_astar_solver() {
        let g = sample();
        let solver = AStar::new(zero);
        assert_eq!(solver.path(&g, &"A", &"D"), Ok(Some(vec!["A", "B", "D"])));
        assert_eq!(solver.reverse_path(&g, &"A", &"D"), Ok(Some(vec!["D", "B", "A"])));
    }
}
