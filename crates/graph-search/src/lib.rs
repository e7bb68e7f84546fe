use std::{error::Error, fmt::Display};

pub mod algorithms;
pub mod builder;
pub mod graph;
pub mod input;
pub mod types;

pub use graph::{Graph, adjacency::AdjacencyList};
pub use types::{EdgeKind, VertexRecord, VertexState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A graph was requested with a vertex count that is not positive.
    InvalidArgument(usize),
    /// A vertex id outside `1..=vertex_count` was supplied.
    OutOfRange { vertex: usize, vertex_count: usize },
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(n) => {
                write!(f, "vertex count must be positive, got {}", n)
            }
            Self::OutOfRange {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex_id: {} out of range 1..={}",
                vertex, vertex_count
            ),
        }
    }
}
