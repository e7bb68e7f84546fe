use log::debug;

use crate::{Graph, GraphError, input::edgelist::EdgeList, types::EdgeKind};

pub struct Uninitialized {}

pub struct FromEdgeList {
    edges: EdgeList,
    vertex_count: Option<usize>,
    kind: EdgeKind,
}

#[derive(Debug)]
pub struct GraphBuilder<State> {
    state: State,
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            state: Uninitialized {},
        }
    }

    pub fn edge_list(self, edges: EdgeList) -> GraphBuilder<FromEdgeList> {
        GraphBuilder {
            state: FromEdgeList {
                vertex_count: edges.vertex_count(),
                edges,
                kind: EdgeKind::default(),
            },
        }
    }
}

impl GraphBuilder<FromEdgeList> {
    /// Overrides the vertex count. Defaults to the count pinned in the edge
    /// list, else to its largest vertex id.
    pub fn vertex_count(mut self, vertex_count: usize) -> Self {
        self.state.vertex_count = Some(vertex_count);
        self
    }

    pub fn kind(mut self, kind: EdgeKind) -> Self {
        self.state.kind = kind;
        self
    }

    /// Inserts the edges in list order.
    pub fn build(self) -> Result<Graph, GraphError> {
        let FromEdgeList {
            edges,
            vertex_count,
            kind,
        } = self.state;

        let mut graph = Graph::new(vertex_count.unwrap_or(edges.max_vertex_id()))?;
        edges
            .edges()
            .try_for_each(|(u, v)| graph.add_edge(u, v, kind))?;

        debug!(
            "Built graph from {} {:?} edges",
            graph.num_edges(),
            kind
        );

        Ok(graph)
    }
}
