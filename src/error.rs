use thiserror::Error;

/// A parent/child pair found out of order by [`BinaryHeap::validate`](crate::BinaryHeap::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("heap property violated: child at index {child} orders before its parent at index {parent}")]
pub struct HeapViolation {
    pub parent: usize,
    pub child: usize,
}
