//! Indexable binary min-heap ordered by an injected comparator.
//!
//! Alongside the array-backed heap the queue keeps a membership set
//! mirroring the heap contents, so containment checks are O(1) and Prim's
//! algorithm can skip already-queued frontier edges cheaply.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use common_error::{queue_err, GroveError, GroveResult};

/// A priority queue that orders its elements by a comparator supplied at
/// construction time.
///
/// Elements are value types: membership is decided by value equality
/// (`Eq`/`Hash`), never by the comparator, and an element appears at most
/// once. "Decrease-key" is modelled by [`PriorityQueue::replace`], which
/// substitutes an element outright instead of mutating it in place.
///
/// The heap is 0-based: children of index `i` live at `2i + 1` and
/// `2i + 2`, its parent at `(i - 1) / 2`.
pub struct PriorityQueue<E, F> {
    heap: Vec<E>,
    elements: HashSet<E>,
    compare: F,
}

impl<E, F> PriorityQueue<E, F>
where
    E: Clone + Eq + Hash,
    F: Fn(&E, &E) -> Ordering,
{
    /// Create an empty queue ordered by `compare`.
    pub fn with_comparator(compare: F) -> Self {
        Self {
            heap: Vec::new(),
            elements: HashSet::new(),
            compare,
        }
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Get the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the queue contains an element. O(1).
    pub fn contains(&self, e: &E) -> bool {
        self.elements.contains(e)
    }

    /// Add an element to the queue. O(log n).
    ///
    /// Rejects an element that is already present.
    pub fn push(&mut self, e: E) -> GroveResult<()> {
        if self.contains(&e) {
            queue_err!("the element is already in the queue");
        }
        self.elements.insert(e.clone());
        self.heap.push(e);
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Get the element with the highest priority (the minimum) without
    /// removing it.
    pub fn top(&self) -> GroveResult<&E> {
        self.heap.first().ok_or(GroveError::EmptyQueue)
    }

    /// Remove and return the element with the highest priority. O(log n).
    pub fn pop(&mut self) -> GroveResult<E> {
        if self.heap.is_empty() {
            return Err(GroveError::EmptyQueue);
        }
        let removed = self.heap.swap_remove(0);
        self.elements.remove(&removed);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(removed)
    }

    /// Remove an arbitrary element from the queue.
    ///
    /// Locating the element is an O(n) linear scan — the deliberate cost of
    /// keeping elements immutable; the fix-up after the swap is O(log n).
    /// The element moved into the vacated slot arrived from the
    /// unconstrained last position, so exactly one of sift-up (it outranks
    /// its new parent) or sift-down restores the invariant.
    pub fn remove(&mut self, e: &E) -> GroveResult<()> {
        if !self.contains(e) {
            queue_err!("the element is not in the queue");
        }
        let index = match self.heap.iter().position(|x| x == e) {
            Some(index) => index,
            None => queue_err!("the element is not in the queue"),
        };
        self.elements.remove(e);
        if index == self.heap.len() - 1 {
            self.heap.pop();
            return Ok(());
        }
        self.heap.swap_remove(index);
        if index > 0
            && (self.compare)(&self.heap[index], &self.heap[(index - 1) / 2]) == Ordering::Less
        {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(())
    }

    /// Replace an element with another, re-establishing its priority.
    ///
    /// This models decrease-key for value-type elements. Fails (non-fatally)
    /// when `old` is not in the queue.
    pub fn replace(&mut self, old: &E, new: E) -> GroveResult<()> {
        if !self.contains(old) {
            queue_err!("the element to replace is not in the queue");
        }
        self.remove(old)?;
        self.push(new)
    }

    /// Iterate over the elements in heap order (not sorted order).
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.heap.iter()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if (self.compare)(&self.heap[i], &self.heap[parent]) == Ordering::Less {
                self.heap.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < self.heap.len()
                && (self.compare)(&self.heap[left], &self.heap[smallest]) == Ordering::Less
            {
                smallest = left;
            }
            if right < self.heap.len()
                && (self.compare)(&self.heap[right], &self.heap[smallest]) == Ordering::Less
            {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<E> PriorityQueue<E, fn(&E, &E) -> Ordering>
where
    E: Clone + Ord + Hash,
{
    /// Create an empty queue ordered by the element type's natural order.
    pub fn natural() -> Self {
        Self::with_comparator(E::cmp as fn(&E, &E) -> Ordering)
    }
}

impl<E: fmt::Debug, F> fmt::Debug for PriorityQueue<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}
