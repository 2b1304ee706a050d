use maxpq::{Error, MaxHeap, Priority};
use proptest::prelude::*;
use std::collections::BinaryHeap;

#[derive(Debug, Clone)]
enum Operation {
    Insert(Priority),
    ExtractMax,
}

fn assert_heap_property<T>(heap: &MaxHeap<T>) {
    let entries = heap.as_slice();
    for i in 1..entries.len() {
        assert!(
            entries[i].priority() <= entries[(i - 1) / 2].priority(),
            "heap property violated at index {}",
            i
        );
    }
}

proptest! {
    #[test]
    fn matches_std_binary_heap(ops in proptest::collection::vec(
        prop_oneof![
            any::<i64>().prop_map(Operation::Insert),
            Just(Operation::ExtractMax),
        ],
        0..200
    )) {
        let mut std_heap = BinaryHeap::new();
        let mut heap = MaxHeap::new();
        let mut inserted = 0usize;
        let mut extracted = 0usize;

        for op in ops {
            match op {
                Operation::Insert(p) => {
                    std_heap.push(p);
                    heap.insert(p, inserted);
                    inserted += 1;
                }
                Operation::ExtractMax => match std_heap.pop() {
                    Some(expected) => {
                        let entry = heap.extract_max().unwrap();
                        assert_eq!(entry.priority(), expected, "extracted priority mismatch");
                        extracted += 1;
                    }
                    None => {
                        assert!(matches!(heap.extract_max(), Err(Error::EmptyQueue)));
                    }
                },
            }
            assert_heap_property(&heap);
            assert_eq!(heap.len(), inserted - extracted, "length mismatch");
            assert_eq!(heap.is_empty(), inserted == extracted);
            assert_eq!(heap.peek().map(|e| e.priority()), std_heap.peek().copied());
        }
    }

    #[test]
    fn drains_sorted_descending(values in proptest::collection::vec(0i64..=1_000_000_000, 0..300)) {
        let mut heap: MaxHeap<()> = values.iter().map(|&p| (p, ())).collect();
        let mut out = Vec::with_capacity(values.len());
        while let Ok(entry) = heap.extract_max() {
            out.push(entry.priority());
        }

        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(out, expected);
        assert!(heap.is_empty());
    }

    #[test]
    fn payloads_stay_with_priorities(values in proptest::collection::vec(-50i64..50, 1..100)) {
        let mut heap = MaxHeap::new();
        for &p in values.iter() {
            heap.insert(p, p.to_string());
        }
        while let Ok(entry) = heap.extract_max() {
            let (priority, payload) = entry.into_parts();
            assert_eq!(payload, priority.to_string());
        }
    }
}
