use std::error::Error;
use std::fmt;

/// An error type indicating that a requested
/// node or edge would make the graph structurally
/// invalid. These are configuration errors, raised
/// during construction and never during training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The graph already holds its maximum number of nodes.
    NodeCapacityExceeded(usize),
    /// The destination node already has the maximum number of incoming edges.
    FanInExceeded { node: usize, limit: usize },
    /// The source node already has the maximum number of outgoing edges.
    FanOutExceeded { node: usize, limit: usize },
    /// One or both of the edge's endpoints do not exist.
    NonexistentEndpoint(usize, usize),
    /// The edge's source is not created strictly before its destination.
    RankViolation(usize, usize),
    /// The edge's destination is an input node.
    InputDestination(usize),
    /// An edge between the same endpoints already exists.
    DuplicateEdge(usize, usize),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeCapacityExceeded(limit) => {
                write!(f, "node insertion into graph at capacity ({} nodes)", limit)
            }
            Self::FanInExceeded { node, limit } => write!(
                f,
                "edge insertion into node {} exceeds maximum fan-in of {}",
                node, limit
            ),
            Self::FanOutExceeded { node, limit } => write!(
                f,
                "edge insertion out of node {} exceeds maximum fan-out of {}",
                node, limit
            ),
            Self::NonexistentEndpoint(source, destination) => write!(
                f,
                "edge insertion between nonexistent endpoint(s) {} -- {}",
                source, destination
            ),
            Self::RankViolation(source, destination) => write!(
                f,
                "edge insertion {} -- {} from a node not created before its destination",
                source, destination
            ),
            Self::InputDestination(id) => {
                write!(f, "edge insertion with input node {} as destination", id)
            }
            Self::DuplicateEdge(source, destination) => write!(
                f,
                "duplicate edge insertion between endpoints {} -- {}",
                source, destination
            ),
        }
    }
}

impl Error for GraphError {}
