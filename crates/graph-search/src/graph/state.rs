use crate::types::VertexState;

/// Per-vertex traversal bookkeeping, indexed by vertex id. Slot 0 is unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TraversalState {
    pub(crate) state: Vec<VertexState>,
    pub(crate) distance: Vec<Option<usize>>,
    pub(crate) parent: Vec<Option<usize>>,
    pub(crate) discover_time: Vec<Option<usize>>,
    pub(crate) finish_time: Vec<Option<usize>>,
    clock: usize,
}

impl TraversalState {
    pub(crate) fn new(slots: usize) -> Self {
        Self {
            state: vec![VertexState::Unvisited; slots],
            distance: vec![None; slots],
            parent: vec![None; slots],
            discover_time: vec![None; slots],
            finish_time: vec![None; slots],
            clock: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.state.fill(VertexState::Unvisited);
        self.distance.fill(None);
        self.parent.fill(None);
        self.discover_time.fill(None);
        self.finish_time.fill(None);
        self.clock = 0;
    }

    pub(crate) fn reset_clock(&mut self) {
        self.clock = 0;
    }

    /// Advances the visitation clock and returns the new value.
    pub(crate) fn tick(&mut self) -> usize {
        self.clock += 1;
        self.clock
    }

    pub(crate) fn is_unvisited(&self, vertex: usize) -> bool {
        self.state[vertex] == VertexState::Unvisited
    }
}
