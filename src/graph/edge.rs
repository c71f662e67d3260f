//! Edge identifier implementation.
//!
//! This module provides the [`EdgeId`] type, a strongly-typed identifier for edges
//! within a [`Graph`](crate::Graph). Edge ids are positions in the graph's input edge
//! list, so they also carry the "original order" used for stable tie-breaking.

use std::fmt;

use serde::Serialize;

/// A strongly-typed identifier for edges within a graph.
///
/// `EdgeId` wraps the 0-based position of the edge in the input edge list. An undirected
/// edge keeps a single id even though adjacency construction exposes it from both endpoints,
/// which is what lets every algorithm annotate (classify, accept, reject) each input edge
/// exactly once.
///
/// # Examples
///
/// ```rust
/// use algostep::EdgeId;
///
/// let edge = EdgeId::new(5);
/// assert_eq!(edge.index(), 5);
/// assert_eq!(format!("{edge}"), "e5");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw edge index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_roundtrip_index() {
        let edge = EdgeId::new(17);
        assert_eq!(edge.index(), 17);
        assert_eq!(usize::from(edge), 17);
        assert_eq!(EdgeId::from(17usize), edge);
    }

    #[test]
    fn test_edge_id_ordering_follows_input_order() {
        let mut edges = vec![EdgeId::new(2), EdgeId::new(0), EdgeId::new(1)];
        edges.sort();
        assert_eq!(edges, vec![EdgeId::new(0), EdgeId::new(1), EdgeId::new(2)]);
    }

    #[test]
    fn test_edge_id_formatting() {
        let edge = EdgeId::new(3);
        assert_eq!(format!("{edge:?}"), "EdgeId(3)");
        assert_eq!(format!("{edge}"), "e3");
    }
}
