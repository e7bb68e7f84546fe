use std::{fmt::Display, ops::RangeInclusive};

use log::{debug, info};

use crate::{
    GraphError,
    types::{EdgeKind, VertexRecord, VertexState},
};

pub mod adjacency;
pub(crate) mod state;

use adjacency::AdjacencyList;
use state::TraversalState;

/// Graph over the fixed vertex set `1..=n`.
///
/// Besides the adjacency lists the graph owns the bookkeeping written by
/// [`Bfs`](crate::algorithms::Bfs) and [`Dfs`](crate::algorithms::Dfs).
/// That bookkeeping survives between traversals; call
/// [`Graph::reset_state`] to start a traversal from a clean slate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edge_count: usize,
    adjacency: Vec<AdjacencyList>,
    traversal: TraversalState,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// Returns [`GraphError::InvalidArgument`] if `vertex_count` is zero or
    /// too large to allocate the per-vertex slots.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidArgument(vertex_count));
        }

        let slots = vertex_count
            .checked_add(1)
            .ok_or(GraphError::InvalidArgument(vertex_count))?;
        let g = Self {
            vertex_count,
            edge_count: 0,
            adjacency: vec![AdjacencyList::new(); slots],
            traversal: TraversalState::new(slots),
        };

        info!("Created graph (vertex_count: {})", vertex_count);

        Ok(g)
    }

    pub(crate) fn check(&self, vertex: usize) -> Result<usize, GraphError> {
        if vertex == 0 || vertex > self.vertex_count {
            return Err(GraphError::OutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(vertex)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertex_count
    }

    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    /// `true` if no edge has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    pub fn vertices(&self) -> RangeInclusive<usize> {
        1..=self.vertex_count
    }

    /// Append `v` to the adjacency list of `u`.
    pub fn add_directed_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check(u)?;
        self.check(v)?;

        self.adjacency[u].push(v);
        self.edge_count += 1;

        Ok(())
    }

    /// Append `v` to the list of `u` and `u` to the list of `v`.
    ///
    /// Counts as a single edge.
    pub fn add_undirected_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check(u)?;
        self.check(v)?;

        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edge_count += 1;

        Ok(())
    }

    pub fn add_edge(&mut self, u: usize, v: usize, kind: EdgeKind) -> Result<(), GraphError> {
        match kind {
            EdgeKind::Directed => self.add_directed_edge(u, v),
            EdgeKind::Undirected => self.add_undirected_edge(u, v),
        }
    }

    pub fn neighbors_of(&self, vertex: usize) -> Result<&AdjacencyList, GraphError> {
        Ok(&self.adjacency[self.check(vertex)?])
    }

    pub fn state_of(&self, vertex: usize) -> Result<VertexState, GraphError> {
        Ok(self.traversal.state[self.check(vertex)?])
    }

    /// Hop count from the source of the last BFS, `None` if never reached.
    pub fn distance_of(&self, vertex: usize) -> Result<Option<usize>, GraphError> {
        Ok(self.traversal.distance[self.check(vertex)?])
    }

    pub fn parent_of(&self, vertex: usize) -> Result<Option<usize>, GraphError> {
        Ok(self.traversal.parent[self.check(vertex)?])
    }

    pub fn discover_time_of(&self, vertex: usize) -> Result<Option<usize>, GraphError> {
        Ok(self.traversal.discover_time[self.check(vertex)?])
    }

    pub fn finish_time_of(&self, vertex: usize) -> Result<Option<usize>, GraphError> {
        Ok(self.traversal.finish_time[self.check(vertex)?])
    }

    pub fn record(&self, vertex: usize) -> Result<VertexRecord, GraphError> {
        let vertex = self.check(vertex)?;
        Ok(VertexRecord {
            vertex,
            state: self.traversal.state[vertex],
            distance: self.traversal.distance[vertex],
            parent: self.traversal.parent[vertex],
            discover_time: self.traversal.discover_time[vertex],
            finish_time: self.traversal.finish_time[vertex],
        })
    }

    /// Returns an Iterator over the records of all vertices in id order.
    pub fn records(&self) -> impl Iterator<Item = VertexRecord> + '_ {
        self.vertices().filter_map(|v| self.record(v).ok())
    }

    /// Forget everything the previous traversals wrote.
    pub fn reset_state(&mut self) {
        debug!("Resetting traversal state of {} vertices", self.vertex_count);
        self.traversal.reset();
    }

    /// Path from the root of `target`'s traversal tree to `target`.
    ///
    /// Returns `Ok(None)` if `target` was not reached by any traversal.
    pub fn path_to(&self, target: usize) -> Result<Option<Vec<usize>>, GraphError> {
        let target = self.check(target)?;
        if self.traversal.is_unvisited(target) {
            return Ok(None);
        }

        let mut path = vec![target];
        let mut node = target;
        while let Some(parent) = self.traversal.parent[node] {
            // Stale parents from earlier runs may form a cycle.
            if path.len() >= self.vertex_count {
                debug!("parent pointers of vertex {} form a cycle", target);
                return Ok(None);
            }
            path.push(parent);
            node = parent;
        }

        path.reverse();

        Ok(Some(path))
    }

    /// Adjacency lists and traversal state, borrowed separately so an
    /// algorithm can hold cursors while writing state.
    pub(crate) fn split_mut(&mut self) -> (&[AdjacencyList], &mut TraversalState) {
        (&self.adjacency, &mut self.traversal)
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.vertices() {
            if self.adjacency[v].is_empty() {
                writeln!(f, "{}:", v)?;
            } else {
                writeln!(f, "{}: {}", v, self.adjacency[v])?;
            }
        }
        Ok(())
    }
}
