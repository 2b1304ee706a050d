use crate::error::Error;
use crate::Priority;
use core::fmt::{Debug, Formatter};
use core::iter::FromIterator;
use log::trace;

/// A single item in a `MaxHeap`: a priority and the payload that travels with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<T> {
    priority: Priority,
    payload: T,
}

impl<T> Entry<T> {
    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }

    pub fn into_parts(self) -> (Priority, T) {
        (self.priority, self.payload)
    }
}

pub fn left(parent: usize) -> usize {
    parent * 2 + 1
}

pub fn right(parent: usize) -> usize {
    parent * 2 + 2
}

/// Only defined for `child > 0`; the root has no parent.
pub fn parent(child: usize) -> usize {
    (child - 1) / 2
}

/// Binary max-heap stored in a single `Vec`, ordered by an integer priority.
///
/// The item at index `i` has children at `left(i)` and `right(i)`. Every item's
/// priority is greater than or equal to the priorities of its children, so the
/// maximum is always at index 0. Items with equal priority come out in no
/// particular order.
pub struct MaxHeap<T> {
    heap: Vec<Entry<T>>,
}

impl<T> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MaxHeap<T> {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns the entry with the greatest priority, without removing it.
    pub fn peek(&self) -> Option<&Entry<T>> {
        self.heap.first()
    }

    /// Inserts an item into the partially-sorted heap.
    pub fn insert(&mut self, priority: Priority, payload: T) {
        let index = self.heap.len();
        self.heap.push(Entry { priority, payload });
        self.sift_up(index);
        trace!("insert: priority {} -> len {}", priority, self.heap.len());
        self.debug_check();
    }

    /// Removes the entry with the greatest priority.
    ///
    /// Returns `Error::EmptyQueue` if the heap is empty; callers that want to avoid
    /// the error should test `is_empty()` first.
    pub fn extract_max(&mut self) -> Result<Entry<T>, Error> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last_index = self.heap.len() - 1;
        self.heap.swap(0, last_index);
        let result = self.heap.pop().ok_or(Error::EmptyQueue)?;
        self.sift_down(0);
        trace!(
            "extract_max: priority {} -> len {}",
            result.priority,
            self.heap.len()
        );
        self.debug_check();
        Ok(result)
    }

    /// Moves the entry at `index` toward the root while it outranks its parent.
    /// Equal priorities stop the walk.
    fn sift_up(&mut self, index: usize) {
        let mut i = index;
        while i > 0 {
            let parent = parent(i);
            if self.heap[i].priority <= self.heap[parent].priority {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    /// Moves the entry at `index` toward the leaves while either child outranks it.
    /// When both children have the same priority, the left child is taken.
    fn sift_down(&mut self, index: usize) {
        let len = self.heap.len();
        let mut i = index;
        loop {
            let left = left(i);
            if left >= len {
                break;
            }
            let mut child = left;
            let right = right(i);
            if right < len && self.heap[right].priority > self.heap[left].priority {
                child = right;
            }
            if self.heap[child].priority <= self.heap[i].priority {
                break;
            }
            self.heap.swap(i, child);
            i = child;
        }
    }

    /// Asserts that every entry's priority is no greater than its parent's.
    pub fn check(&self) {
        for i in 1..self.heap.len() {
            assert!(
                self.heap[parent(i)].priority >= self.heap[i].priority,
                "heap property violated at index {}",
                i
            );
        }
    }

    #[inline]
    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            self.check();
        }
    }

    /// The backing sequence, in array order.
    pub fn as_slice(&self) -> &[Entry<T>] {
        &self.heap
    }
}

impl<T> Extend<(Priority, T)> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = (Priority, T)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.heap.reserve(iter.size_hint().0);
        for (priority, payload) in iter {
            self.insert(priority, payload);
        }
    }
}

impl<T> FromIterator<(Priority, T)> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = (Priority, T)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Debug> Debug for MaxHeap<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q: ")?;
        for entry in self.heap.iter() {
            write!(fmt, "{}:{:?} ", entry.priority, entry.payload)?;
        }
        Ok(())
    }
}
