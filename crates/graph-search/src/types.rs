use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Visitation state of a vertex during a traversal.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexState {
    #[default]
    Unvisited,
    Discovered,
    Finished,
}

impl Display for VertexState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unvisited => "unvisited",
            Self::Discovered => "discovered",
            Self::Finished => "finished",
        };
        f.write_str(name)
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default)]
pub enum EdgeKind {
    #[default]
    Directed,
    Undirected,
}

/// Traversal bookkeeping of a single vertex, as left by the last BFS/DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub vertex: usize,
    pub state: VertexState,
    pub distance: Option<usize>,
    pub parent: Option<usize>,
    pub discover_time: Option<usize>,
    pub finish_time: Option<usize>,
}

impl Display for VertexRecord {
    /// Unset values are printed as `-1`, a missing parent as `0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let signed = |v: Option<usize>| v.map_or(-1, |v| v as i64);
        write!(
            f,
            "{}: state={} distance={} parent={} discover={} finish={}",
            self.vertex,
            self.state,
            signed(self.distance),
            self.parent.unwrap_or(0),
            signed(self.discover_time),
            signed(self.finish_time),
        )
    }
}
