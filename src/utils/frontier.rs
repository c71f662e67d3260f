//! Indexed binary min-heap with decrease-key.
//!
//! Dijkstra's relaxation loop needs a priority structure whose keys can be lowered in place.
//! [`Frontier`] keeps a binary heap of `(key, vertex)` pairs together with a position index,
//! so `decrease_key` is `O(log n)` and membership checks are `O(1)`. Ties on the key are broken
//! by ascending vertex id, which keeps extraction order deterministic.

use crate::graph::VertexId;

/// A min-priority queue over vertices keyed by `K`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier<K> {
    heap: Vec<(K, VertexId)>,
    position: Vec<Option<usize>>,
}

impl<K: Ord + Copy> Frontier<K> {
    /// Creates an empty frontier able to hold vertices `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
        }
    }

    /// Returns the number of queued vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no vertex is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` if `vertex` is currently queued.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.position
            .get(vertex.index())
            .is_some_and(Option::is_some)
    }

    /// Returns the current key of a queued vertex.
    #[must_use]
    pub fn key(&self, vertex: VertexId) -> Option<K> {
        let slot = (*self.position.get(vertex.index())?)?;
        Some(self.heap[slot].0)
    }

    /// Queues `vertex` with `key`. If the vertex is already queued this behaves like
    /// [`decrease_key`](Self::decrease_key).
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is outside the capacity given to [`new`](Self::new).
    pub fn push(&mut self, vertex: VertexId, key: K) {
        if self.contains(vertex) {
            self.decrease_key(vertex, key);
            return;
        }
        let slot = self.heap.len();
        self.heap.push((key, vertex));
        self.position[vertex.index()] = Some(slot);
        self.sift_up(slot);
    }

    /// Lowers the key of a queued vertex.
    ///
    /// Returns `false` if the vertex is not queued or `key` is not lower than its current key.
    pub fn decrease_key(&mut self, vertex: VertexId, key: K) -> bool {
        let Some(slot) = self.position.get(vertex.index()).copied().flatten() else {
            return false;
        };
        if key >= self.heap[slot].0 {
            return false;
        }
        self.heap[slot].0 = key;
        self.sift_up(slot);
        true
    }

    /// Removes and returns the vertex with the smallest key.
    pub fn pop(&mut self) -> Option<(VertexId, K)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (key, vertex) = self.heap.pop()?;
        self.position[vertex.index()] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((vertex, key))
    }

    /// Returns the queued entries ordered by `(key, vertex)`, for snapshots.
    #[must_use]
    pub fn entries(&self) -> Vec<(VertexId, K)> {
        let mut entries: Vec<(K, VertexId)> = self.heap.clone();
        entries.sort();
        entries.into_iter().map(|(key, vertex)| (vertex, key)).collect()
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot] >= self.heap[parent] {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a].1.index()] = Some(a);
        self.position[self.heap[b].1.index()] = Some(b);
    }
}
