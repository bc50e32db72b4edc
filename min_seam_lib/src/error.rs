use thiserror::Error;

/// Failures raised by the seam core.
///
/// `InvalidInput` is the only variant a well-behaved caller should ever see;
/// the rest signal a broken invariant inside the graph, queue or solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeamError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("extract-min called on an empty queue")]
    EmptyQueue,

    #[error("invalid decrease-key for node {node}")]
    InvalidDecreaseKey { node: usize },

    // not named `source`: thiserror would treat that field as the error cause
    #[error("sink {sink} is unreachable from source {start}")]
    Unreachable { start: usize, sink: usize },

    #[error("distance overflow while relaxing edges into node {node}")]
    DistanceOverflow { node: usize },

    #[error("shortest path does not form a seam: {0}")]
    InvalidPath(String),
}

pub type Result<T, E = SeamError> = std::result::Result<T, E>;
