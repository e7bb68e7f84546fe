use log::{debug, trace};
use tracing::instrument;

use crate::{
    Graph,
    graph::{adjacency::Cursor, state::TraversalState},
    types::VertexState,
};

/// Depth-first search over all vertices, writing discovery/finish times
/// and a DFS forest.
pub trait Dfs {
    /// Starts a DFS tree at every still unvisited vertex in ascending id
    /// order, `1..=n`. The clock restarts at 0 on every call; the vertex
    /// states do not.
    fn dfs(&mut self);
}

impl Dfs for Graph {
    #[instrument(skip(self))]
    fn dfs(&mut self) {
        let vertex_count = self.num_vertices();
        let (adjacency, traversal) = self.split_mut();

        traversal.reset_clock();

        // Each frame is a vertex on the current DFS path and its position
        // in the vertex's adjacency list.
        let mut stack: Vec<(usize, Cursor<'_>)> = Vec::new();
        let mut trees: usize = 0;

        for root in 1..=vertex_count {
            if !traversal.is_unvisited(root) {
                continue;
            }

            trees += 1;
            discover(traversal, root);
            stack.push((root, adjacency[root].cursor()));

            while let Some((vertex, neighbors)) = stack.last_mut() {
                let vertex = *vertex;
                let next = neighbors.next();

                match next {
                    Some(y) if traversal.is_unvisited(y) => {
                        traversal.parent[y] = Some(vertex);
                        discover(traversal, y);
                        stack.push((y, adjacency[y].cursor()));
                    }
                    Some(_) => {}
                    None => {
                        traversal.state[vertex] = VertexState::Finished;
                        traversal.finish_time[vertex] = Some(traversal.tick());
                        stack.pop();
                    }
                }
            }
        }

        debug!("DFS finished with {} trees", trees);
    }
}

fn discover(traversal: &mut TraversalState, vertex: usize) {
    traversal.state[vertex] = VertexState::Discovered;
    traversal.discover_time[vertex] = Some(traversal.tick());
    trace!("discovered vertex {}", vertex);
}

#[cfg(test)]
mod test {
    use super::Dfs;
    use crate::{Graph, algorithms::Bfs, types::VertexState};

    fn times(graph: &Graph, v: usize) -> (usize, usize) {
        (
            graph.discover_time_of(v).unwrap().unwrap(),
            graph.finish_time_of(v).unwrap().unwrap(),
        )
    }

    #[test]
    fn dfs_timestamps() {
        let mut graph = Graph::new(4).unwrap();
        graph.add_directed_edge(1, 2).unwrap();
        graph.add_directed_edge(1, 3).unwrap();
        graph.add_directed_edge(2, 4).unwrap();

        graph.dfs();

        assert_eq!(times(&graph, 1), (1, 8));
        assert_eq!(times(&graph, 2), (2, 5));
        assert_eq!(times(&graph, 4), (3, 4));
        assert_eq!(times(&graph, 3), (6, 7));
        assert_eq!(graph.parent_of(4), Ok(Some(2)));
        assert_eq!(graph.parent_of(3), Ok(Some(1)));
        assert_eq!(graph.parent_of(1), Ok(None));
    }

    #[test]
    fn dfs_visits_last_vertex_as_root() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_directed_edge(1, 2).unwrap();

        graph.dfs();

        assert_eq!(graph.state_of(3), Ok(VertexState::Finished));
        assert_eq!(times(&graph, 3), (5, 6));
        assert_eq!(graph.parent_of(3), Ok(None));
    }

    #[test]
    fn dfs_forest_roots_ascending() {
        let mut graph = Graph::new(5).unwrap();
        graph.add_directed_edge(3, 1).unwrap();
        graph.add_directed_edge(5, 4).unwrap();

        graph.dfs();

        // 1 is a root on its own, 3 is visited later and finds 1 finished.
        assert_eq!(times(&graph, 1), (1, 2));
        assert_eq!(graph.parent_of(1), Ok(None));
        assert_eq!(times(&graph, 2), (3, 4));
        assert_eq!(times(&graph, 3), (5, 6));
        assert_eq!(times(&graph, 4), (7, 8));
        assert_eq!(times(&graph, 5), (9, 10));
    }

    #[test]
    fn dfs_self_loop_and_cycle() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_directed_edge(1, 1).unwrap();
        graph.add_directed_edge(1, 2).unwrap();
        graph.add_directed_edge(2, 3).unwrap();
        graph.add_directed_edge(3, 1).unwrap();

        graph.dfs();

        assert_eq!(times(&graph, 1), (1, 6));
        assert_eq!(times(&graph, 2), (2, 5));
        assert_eq!(times(&graph, 3), (3, 4));
    }

    #[test]
    fn dfs_clock_restarts() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_undirected_edge(1, 2).unwrap();

        graph.dfs();
        graph.reset_state();
        graph.dfs();

        assert_eq!(times(&graph, 1), (1, 4));
        assert_eq!(times(&graph, 2), (2, 3));
    }

    #[test]
    fn dfs_after_bfs_skips_visited() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_directed_edge(1, 2).unwrap();

        graph.bfs(1).unwrap();
        graph.dfs();

        assert_eq!(graph.discover_time_of(1), Ok(None));
        assert_eq!(graph.discover_time_of(2), Ok(None));
        assert_eq!(times(&graph, 3), (1, 2));
    }

    #[test]
    fn dfs_deep_chain() {
        let n = 200_000;
        let mut graph = Graph::new(n).unwrap();
        (1..n).for_each(|v| graph.add_directed_edge(v, v + 1).unwrap());

        graph.dfs();

        assert_eq!(times(&graph, 1), (1, 2 * n));
        assert_eq!(times(&graph, n), (n, n + 1));
        assert_eq!(graph.path_to(n).unwrap().map(|p| p.len()), Some(n));
    }
}
