use thiserror::Error;

/// Input rejected by a search before or while running it.
///
/// A missing path is not an error; searches report it as `Ok(None)`.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum InvalidInput {
    #[error("Invalid input: start node is not in the graph")]
    UnknownStartNode,

    #[error("Invalid input: target node is not in the graph")]
    UnknownTargetNode,

    #[error("Invalid input: edge weight must be a non-negative number")]
    NegativeWeight,

    #[error("Invalid input: heuristic returned a value that can't be ordered")]
    InvalidHeuristic,

    #[error("Invalid input: path cost overflows the weight type")]
    WeightOverflow,
}

pub type Result<T> = std::result::Result<T, InvalidInput>;
