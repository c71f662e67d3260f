//! Vertex identifier implementation.
//!
//! This module provides the [`VertexId`] type, a strongly-typed identifier for vertices
//! within a [`Graph`](crate::Graph). The newtype wrapper keeps vertex indices from being
//! confused with edge indices, discovery times, or other integer counters that every
//! algorithm in this crate juggles side by side.

use std::fmt;

use serde::Serialize;

/// A strongly-typed identifier for vertices within a graph.
///
/// `VertexId` wraps a dense, 0-based `usize` index. Ids are stable for the lifetime of a
/// [`Graph`](crate::Graph) and are used to index every per-vertex array of a run (snapshots,
/// union-find parents, in-degree tables, distances).
///
/// # Examples
///
/// ```rust
/// use algostep::VertexId;
///
/// let a = VertexId::new(0);
/// let b = VertexId::new(1);
///
/// assert_ne!(a, b);
/// assert!(a < b);
/// assert_eq!(b.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex identifier.
    ///
    /// The index can be used to index into vectors storing per-vertex data.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    /// Compact display form, used in log output when no label is at hand.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_id_new() {
        let vertex = VertexId::new(42);
        assert_eq!(vertex.index(), 42);
    }

    #[test]
    fn test_vertex_id_ordering() {
        let mut vertices = vec![VertexId::new(3), VertexId::new(1), VertexId::new(2)];
        vertices.sort();
        assert_eq!(
            vertices,
            vec![VertexId::new(1), VertexId::new(2), VertexId::new(3)]
        );
    }

    #[test]
    fn test_vertex_id_hash() {
        let mut set: HashSet<VertexId> = HashSet::new();
        set.insert(VertexId::new(1));
        set.insert(VertexId::new(2));
        set.insert(VertexId::new(1));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_vertex_id_conversions() {
        let vertex: VertexId = 123usize.into();
        assert_eq!(vertex.index(), 123);

        let raw: usize = VertexId::new(789).into();
        assert_eq!(raw, 789);
    }

    #[test]
    fn test_vertex_id_formatting() {
        let vertex = VertexId::new(42);
        assert_eq!(format!("{vertex:?}"), "VertexId(42)");
        assert_eq!(format!("{vertex}"), "v42");
    }
}
