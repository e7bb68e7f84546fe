use std::{fmt::Display, iter::Copied, slice::Iter};

use serde::{Deserialize, Serialize};

/// Neighbors of a single vertex, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyList {
    neighbors: Vec<usize>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vertex: usize) {
        self.neighbors.push(vertex);
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.neighbors
    }

    pub fn iter(&self) -> Copied<Iter<'_, usize>> {
        self.neighbors.iter().copied()
    }

    /// Returns a cursor positioned at the first neighbor.
    ///
    /// The list cannot be appended to while the cursor is alive.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            list: self,
            position: 0,
        }
    }
}

impl Display for AdjacencyList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut neighbors = self.iter();
        if let Some(first) = neighbors.next() {
            write!(f, "{}", first)?;
        }
        neighbors.try_for_each(|n| write!(f, " {}", n))
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = usize;
    type IntoIter = Copied<Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Restartable forward cursor over an [`AdjacencyList`].
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    list: &'a AdjacencyList,
    position: usize,
}

impl Cursor<'_> {
    /// Moves the cursor back to the first neighbor.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn is_off_end(&self) -> bool {
        self.position >= self.list.len()
    }

    /// The neighbor under the cursor, `None` once off the end.
    pub fn current(&self) -> Option<usize> {
        self.list.neighbors.get(self.position).copied()
    }

    pub fn advance(&mut self) {
        if !self.is_off_end() {
            self.position += 1;
        }
    }
}

impl Iterator for Cursor<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current()?;
        self.advance();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len() - self.position;
        (remaining, Some(remaining))
    }
}
