//! Property-based tests using proptest
//!
//! Random operation sequences are replayed against a sorted `Vec` model, and the heap property
//! is checked after every step.

use minheap::{MaxHeap, MinHeap};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i16),
    Pop,
    Remove(i16),
    Peek,
    Contains(i16),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    // small values so removes and contains hit duplicates often
    prop_oneof![
        6 => (-20i16..20).prop_map(Op::Push),
        3 => Just(Op::Pop),
        3 => (-20i16..20).prop_map(Op::Remove),
        1 => Just(Op::Peek),
        1 => (-20i16..20).prop_map(Op::Contains),
        1 => Just(Op::Clear),
    ]
}

fn sorted(mut v: Vec<i32>) -> Vec<i32> {
    v.sort_unstable();
    v
}

proptest! {
    #[test]
    fn operations_match_sorted_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut heap = MinHeap::new();
        let mut model: Vec<i16> = Vec::new();

        for op in ops {
            let len = heap.len();
            match op {
                Op::Push(x) => {
                    heap.push(x);
                    model.push(x);
                    model.sort_unstable();
                    prop_assert_eq!(heap.len(), len + 1);
                }
                Op::Pop => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(heap.pop(), expected);
                    prop_assert_eq!(heap.len(), model.len());
                }
                Op::Remove(x) => {
                    let found = model.iter().position(|&y| y == x);
                    let min = heap.peek().copied();
                    prop_assert_eq!(heap.remove(&x), found.is_some());
                    match found {
                        Some(i) => {
                            model.remove(i);
                            prop_assert_eq!(heap.len(), len - 1);
                        }
                        None => {
                            prop_assert_eq!(heap.len(), len);
                            prop_assert_eq!(heap.peek().copied(), min);
                        }
                    }
                }
                Op::Peek => {
                    prop_assert_eq!(heap.peek(), model.first());
                    prop_assert_eq!(heap.len(), len);
                }
                Op::Contains(x) => {
                    prop_assert_eq!(heap.contains(&x), model.contains(&x));
                    prop_assert_eq!(heap.len(), len);
                }
                Op::Clear => {
                    heap.clear();
                    model.clear();
                    prop_assert!(heap.is_empty());
                }
            }

            prop_assert!(heap.validate().is_ok());
            prop_assert_eq!(heap.peek(), model.first());
        }
    }

    #[test]
    fn polling_yields_sorted_order(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut heap = MinHeap::new();
        for &x in &values {
            heap.push(x);
        }

        let mut polled = Vec::with_capacity(values.len());
        for _ in 0..values.len() {
            match heap.pop() {
                Some(x) => polled.push(x),
                None => break,
            }
        }

        prop_assert!(heap.is_empty());
        prop_assert_eq!(heap.pop(), None);
        prop_assert_eq!(polled, sorted(values));
    }

    #[test]
    fn heapify_ignores_input_order(
        (values, shuffled) in prop::collection::vec(-50i32..50, 0..200)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = MinHeap::from_vec(values.clone());
        let b = MinHeap::from_vec(shuffled);

        prop_assert!(a.validate().is_ok());
        prop_assert!(b.validate().is_ok());
        prop_assert_eq!(a.into_sorted_vec(), sorted(values.clone()));
        prop_assert_eq!(b.into_sorted_vec(), sorted(values));
    }

    #[test]
    fn every_present_element_can_be_removed(
        (values, order) in prop::collection::vec(-30i32..30, 1..100)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let mut heap = MinHeap::from_vec(values);

        for x in order {
            let len = heap.len();
            prop_assert!(heap.remove(&x));
            prop_assert_eq!(heap.len(), len - 1);
            prop_assert!(heap.validate().is_ok());
        }

        prop_assert!(heap.is_empty());
        prop_assert!(!heap.remove(&0));
    }

    #[test]
    fn max_heap_mirrors_min_heap(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut expected = sorted(values.clone());
        expected.reverse();

        let heap = MaxHeap::from_vec(values);
        prop_assert!(heap.validate().is_ok());
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }
}
