//! Distance estimates between points on a plane, for use as A* heuristics.
//!
//! On a 4-connected grid with unit step cost `manhattan` is admissible and consistent;
//! with diagonal steps use `chebyshev` (unit diagonal cost) or `euclidean`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Point on an integer grid, `(x, y)`.
pub type Point = (i64, i64);

pub fn manhattan(a: Point, b: Point) -> f64 {
    ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f64
}

pub fn euclidean(a: Point, b: Point) -> f64 {
    ((a.0 - b.0) as f64).hypot((a.1 - b.1) as f64)
}

pub fn chebyshev(a: Point, b: Point) -> f64 {
    (a.0 - b.0).abs().max((a.1 - b.1).abs()) as f64
}

/// Degenerates A* into uniform-cost search.
pub fn zero(_: Point, _: Point) -> f64 {
    0.0
}

/// Named choice of a stock heuristic.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Heuristic {
    Manhattan,
    Euclidean,
    Chebyshev,
    Zero,
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[error("Unknown heuristic '{0}', expected one of: manhattan, euclidean, chebyshev, zero")]
pub struct UnknownHeuristic(pub String);

impl Heuristic {
    pub fn estimate(self, a: Point, b: Point) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan(a, b),
            Heuristic::Euclidean => euclidean(a, b),
            Heuristic::Chebyshev => chebyshev(a, b),
            Heuristic::Zero => zero(a, b),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Zero => "zero",
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Manhattan
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            "chebyshev" => Ok(Heuristic::Chebyshev),
            "zero" => Ok(Heuristic::Zero),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}
