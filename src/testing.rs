use crate::max_heap::MaxHeap;
use crate::Priority;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Extracts every entry from the heap, checking the heap property after each step.
pub fn drain_priorities<T>(heap: &mut MaxHeap<T>) -> Vec<Priority> {
    let mut out = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        let entry = heap.extract_max().unwrap();
        heap.check();
        out.push(entry.priority());
    }
    out
}
