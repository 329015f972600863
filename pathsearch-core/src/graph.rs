//! Graph model and path solver traits.

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FromIterator;

use crate::errors::{InvalidInput, Result};
use crate::numtraits::{CheckedAdd, Zero};
use crate::path::SearchStats;

/// Graph building functions.
pub trait GraphBuilder<T, W> {
    /// Set the outgoing links of `node_tag`, replacing any links it already had.
    fn add_node<I: IntoIterator<Item=(T, W)>>(&mut self, node_tag: T, links: I);
}

/// Path finding functions.
pub trait GraphSolver<T, W> {
    /// Find a path from `from` node to `to` node, along with the work it took.
    fn path_with_stats(&self, graph: &Graph<T, W>, from: &T, to: &T) -> Result<(Option<Vec<T>>, SearchStats)>;

    /// Find a path from `from` node to `to` node.
    /// `Ok(None)` means `to` is not reachable from `from`.
    fn path(&self, graph: &Graph<T, W>, from: &T, to: &T) -> Result<Option<Vec<T>>> {
        Ok(self.path_with_stats(graph, from, to)?.0)
    }

    /// Find a reverse path from `to` node to `from` node.
    fn reverse_path(&self, graph: &Graph<T, W>, from: &T, to: &T) -> Result<Option<Vec<T>>> {
        let path = self.path(graph, from, to)?;
        Ok(path.map(|mut path| {
            path.reverse();
            path
        }))
    }
}

/// Directed weighted graph stored as adjacency lists.
///
/// The order of each node's links is the order in which searches visit its neighbors.
#[derive(Clone, Debug)]
pub struct Graph<T, W> {
    /// Links node with tag `<T>` to the list of adjacent nodes with corresponding weights `<W>`.
    nodes: HashMap<T, Vec<(T, W)>>,
}

impl<T, W> Graph<T, W> {
    /// Create new instance with empty graph.
    pub fn new() -> Self {
        Graph {
            nodes: HashMap::new()
        }
    }

    /// Number of nodes, including the ones only known as link targets.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all node tags, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item=&T> {
        self.nodes.keys()
    }
}

impl<T: Eq + Hash, W> Graph<T, W> {
    pub fn contains(&self, node: &T) -> bool {
        self.nodes.contains_key(node)
    }

    /// Outgoing links of `node` in insertion order. Unknown nodes have none.
    pub fn neighbors(&self, node: &T) -> &[(T, W)] {
        self.nodes.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Both search endpoints must be nodes of this graph.
    pub(crate) fn check_endpoints(&self, start: &T, target: &T) -> Result<()> {
        if !self.contains(start) {
            return Err(InvalidInput::UnknownStartNode);
        }
        if !self.contains(target) {
            return Err(InvalidInput::UnknownTargetNode);
        }
        Ok(())
    }
}

impl<T: Clone + Eq + Hash, W> Graph<T, W> {
    /// Append a single link `from -> to`, keeping the links `from` already has.
    pub fn add_edge(&mut self, from: T, to: T, weight: W) {
        self.nodes.entry(to.clone()).or_insert_with(Vec::new);
        self.nodes.entry(from).or_insert_with(Vec::new).push((to, weight));
    }
}

impl<T, W> Graph<T, W> where T: Eq + Hash, W: Copy + PartialOrd + CheckedAdd + Zero {
    /// Total weight of the given path, taking the cheapest link between each pair of
    /// consecutive nodes. `None` if some pair is not linked, the path is empty
    /// or the total overflows `W`.
    pub fn path_cost(&self, path: &[T]) -> Option<W> {
        if path.is_empty() {
            return None;
        }

        let mut total = W::ZERO;
        for hop in path.windows(2) {
            let (from, to) = (&hop[0], &hop[1]);
            let cheapest = self.neighbors(from)
                .iter()
                .filter(|(n, _)| n == to)
                .map(|&(_, w)| w)
                .fold(None, |best: Option<W>, w| match best {
                    Some(b) if b <= w => Some(b),
                    _ => Some(w),
                })?;
            total = total.checked_add(cheapest)?;
        }

        Some(total)
    }
}

impl<T, W> GraphBuilder<T, W> for Graph<T, W> where T: Clone + Eq + Hash {
    fn add_node<I: IntoIterator<Item=(T, W)>>(&mut self, node_tag: T, links: I) {
        let links = links.into_iter().collect::<Vec<(T, W)>>();
        for (target, _) in links.iter() {
            if !self.nodes.contains_key(target) {
                self.nodes.insert(target.clone(), Vec::new());
            }
        }
        self.nodes.insert(node_tag, links);
    }
}

impl<T, W> Default for Graph<T, W> {
    fn default() -> Self {
        Graph::new()
    }
}

impl<T, W> FromIterator<(T, Vec<(T, W)>)> for Graph<T, W> where T: Clone + Eq + Hash {
    fn from_iter<I: IntoIterator<Item=(T, Vec<(T, W)>)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for (node, links) in iter {
            graph.add_node(node, links);
        }
        graph
    }
}
