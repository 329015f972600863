//! Graph file format.
//!
//! ```json
//! {
//!     "nodes": { "A": [["B", 1.0], ["C", 4.0]], "B": [["C", 1.0]] },
//!     "coords": { "A": [0, 0], "B": [1, 0], "C": [1, 1] }
//! }
//! ```
//!
//! Link lists keep their order, which is the order searches visit neighbors in.
//! `coords` is optional and only feeds the A* heuristic.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Error};
use log::{debug, warn};
use serde::Deserialize;

use pathsearch_core::{Graph, GraphBuilder, Heuristic, Point};

#[derive(Clone, Default, PartialEq, Debug, Deserialize)]
pub struct GraphFile {
    /// Node name to its outgoing links `[target, weight]`.
    pub nodes: BTreeMap<String, Vec<(String, f64)>>,

    /// Optional grid position of each node.
    #[serde(default)]
    pub coords: HashMap<String, Point>,
}

impl GraphFile {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = fs::read_to_string(path).with_context(|| format!("can't read graph file {}", path.display()))?;
        let file = Self::parse(&data).with_context(|| format!("bad graph file {}", path.display()))?;
        debug!("graph file {}: {} nodes, {} with coordinates", path.display(), file.nodes.len(), file.coords.len());
        Ok(file)
    }

    pub fn parse(data: &str) -> Result<Self, Error> {
        let file = serde_json::from_str(data)?;
        Ok(file)
    }

    pub fn to_graph(&self) -> Graph<String, f64> {
        let mut graph = Graph::new();
        for (node, links) in self.nodes.iter() {
            graph.add_node(node.clone(), links.iter().cloned());
        }
        graph
    }

    /// Heuristic over the file's coordinates.
    /// Nodes without coordinates are estimated at zero, which keeps it admissible.
    pub fn heuristic(&self, kind: Heuristic) -> impl Fn(&String, &String) -> f64 + '_ {
        let warned = Cell::new(false);
        move |node: &String, target: &String| -> f64 {
            match (self.coords.get(node), self.coords.get(target)) {
                (Some(&a), Some(&b)) => kind.estimate(a, b),
                _ => {
                    if !warned.replace(true) {
                        warn!("No coordinates for [{}] or [{}], estimating zero remaining cost", node, target);
                    }
                    0.0
                }
            }
        }
    }
}
