use std::collections::VecDeque;

use log::{debug, trace};
use tracing::instrument;

use crate::{Graph, GraphError, types::VertexState};

/// Breadth-first search writing hop distances and a shortest-path tree.
pub trait Bfs {
    /// Runs BFS from `source` on top of the state left by earlier
    /// traversals. Vertices not reached keep their previous values.
    fn bfs(&mut self, source: usize) -> Result<(), GraphError>;
}

impl Bfs for Graph {
    #[instrument(skip(self))]
    fn bfs(&mut self, source: usize) -> Result<(), GraphError> {
        let source = self.check(source)?;
        let (adjacency, traversal) = self.split_mut();

        debug!("BFS from vertex {}", source);

        traversal.state[source] = VertexState::Discovered;
        traversal.distance[source] = Some(0);

        let mut queue = VecDeque::from([source]);
        let mut reached: usize = 1;

        while let Some(x) = queue.pop_front() {
            let mut neighbors = adjacency[x].cursor();

            while let Some(y) = neighbors.current() {
                if traversal.is_unvisited(y) {
                    traversal.state[y] = VertexState::Discovered;
                    traversal.distance[y] = traversal.distance[x].map(|d| d + 1);
                    traversal.parent[y] = Some(x);
                    trace!("discovered vertex {} via {}", y, x);

                    queue.push_back(y);
                    reached += 1;
                }
                neighbors.advance();
            }

            traversal.state[x] = VertexState::Finished;
        }

        debug!("BFS from vertex {} reached {} vertices", source, reached);

        Ok(())
    }
}
