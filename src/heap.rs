use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::error::HeapViolation;
use crate::order::{NaturalOrder, Reversed, TotalOrder};

/// An array-backed binary heap. The element that orders first under `O` sits at the root.
///
/// The storage is a complete binary tree laid out level by level: the children of index `i`
/// are `2i + 1` and `2i + 2`, its parent is `(i - 1) / 2`. Every parent orders no later
/// than its children once a public method returns.
#[derive(Clone, Debug)]
pub struct BinaryHeap<O: TotalOrder> {
    order: O,
    data: Vec<O::Elem>,
}

pub type MinHeap<T> = BinaryHeap<NaturalOrder<T>>;
pub type MaxHeap<T> = BinaryHeap<Reversed<NaturalOrder<T>>>;

impl<O: TotalOrder + Default> BinaryHeap<O> {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        Self::with_order(O::default())
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, O::default())
    }

    /// O(n)
    #[inline]
    pub fn from_vec(data: Vec<O::Elem>) -> Self {
        Self::from_vec_with_order(data, O::default())
    }
}

impl<O: TotalOrder> BinaryHeap<O> {
    /// O(1)
    #[inline]
    pub fn with_order(order: O) -> Self {
        Self {
            order,
            data: Vec::new(),
        }
    }

    /// O(1)
    #[inline]
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            order,
            data: Vec::with_capacity(capacity),
        }
    }

    /// Takes ownership of `data` and rearranges it into a heap in place.
    ///
    /// O(n): only the first half of the array has children, and most of those sit near the
    /// bottom where a sift-down is short.
    pub fn from_vec_with_order(data: Vec<O::Elem>, order: O) -> Self {
        let mut heap = Self { order, data };
        heap.heapify();
        heap.check_invariant();
        heap
    }

    #[inline]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// O(1)
    #[inline]
    pub fn peek(&self) -> Option<&O::Elem> {
        self.data.first()
    }

    /// O(log n)
    pub fn push(&mut self, value: O::Elem) {
        self.data.push(value);
        self.sift_up(self.len() - 1);
        self.check_invariant();
    }

    /// O(log n)
    pub fn pop(&mut self) -> Option<O::Elem> {
        if self.is_empty() {
            return None;
        }

        let res = self.remove_at(0);
        self.check_invariant();

        Some(res)
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        log::debug!("clearing heap of {} elements", self.len());
        self.data.clear();
    }

    /// Iterates in storage order, which is not sorted.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, O::Elem> {
        self.data.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[O::Elem] {
        &self.data
    }

    /// The storage, in heap order.
    #[inline]
    pub fn into_vec(self) -> Vec<O::Elem> {
        self.data
    }

    /// The elements in the order `pop` would return them.
    ///
    /// O(n log n)
    pub fn into_sorted_vec(self) -> Vec<O::Elem> {
        self.into_iter_sorted().collect()
    }

    /// Consumes the heap, popping one element per step.
    #[inline]
    pub fn into_iter_sorted(self) -> IntoIterSorted<O> {
        IntoIterSorted { heap: self }
    }

    /// Checks every parent/child pair and reports the first one out of order.
    ///
    /// O(n)
    pub fn validate(&self) -> Result<(), HeapViolation> {
        for child in 1..self.len() {
            let parent = (child - 1) / 2;
            if self.order.lt(&self.data[child], &self.data[parent]) {
                return Err(HeapViolation { parent, child });
            }
        }
        Ok(())
    }

    #[inline]
    fn check_invariant(&self) {
        if cfg!(feature = "invariant-checks") {
            if let Err(violation) = self.validate() {
                panic!("{}", violation);
            }
        }
    }

    /// O(n)
    fn heapify(&mut self) {
        let len = self.len();
        for node in (0..len / 2).rev() {
            self.sift_down(node);
        }
        log::trace!("heapified {} elements with {} sift-downs", len, len / 2);
    }

    /// Removes the element at `index`, filling the hole with the last element.
    ///
    /// The filler came from the bottom of a different subtree, so it can be out of order with
    /// its new children or with its new parent, never both. Sift it down first and, if it did
    /// not move, sift it up.
    ///
    /// O(log n)
    fn remove_at(&mut self, index: usize) -> O::Elem {
        let res = self.data.swap_remove(index);
        if index == self.len() {
            return res;
        }

        let sunk = self.sift_down(index);
        if sunk == index {
            let swum = self.sift_up(index);
            log::trace!("remove_at({}): filler sifted up to {}", index, swum);
        } else {
            log::trace!("remove_at({}): filler sifted down to {}", index, sunk);
        }

        res
    }

    /// Returns the node's final position.
    ///
    /// O(log n)
    fn sift_up(&mut self, mut node: usize) -> usize {
        while node != 0 {
            let parent = (node - 1) / 2;

            if self.order.lt(&self.data[node], &self.data[parent]) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }

        node
    }

    /// Returns the node's final position.
    ///
    /// O(log n)
    fn sift_down(&mut self, mut node: usize) -> usize {
        let len = self.len();
        loop {
            let left = 2 * node + 1;
            if len <= left {
                break;
            }

            // right only wins when strictly smaller, so ties go left
            let right = left + 1;
            let min = if right < len && self.order.lt(&self.data[right], &self.data[left]) {
                right
            } else {
                left
            };

            if self.order.le(&self.data[node], &self.data[min]) {
                break;
            }

            self.data.swap(node, min);
            node = min;
        }

        node
    }
}

impl<O: TotalOrder> BinaryHeap<O>
where
    O::Elem: PartialEq,
{
    /// O(n)
    pub fn contains(&self, value: &O::Elem) -> bool {
        self.data.iter().any(|x| x == value)
    }

    /// Removes the first element equal to `value` in storage order. Returns whether one was
    /// found; a miss leaves the heap untouched.
    ///
    /// O(n) to find, O(log n) to repair.
    pub fn remove(&mut self, value: &O::Elem) -> bool {
        match self.data.iter().position(|x| x == value) {
            Some(index) => {
                self.remove_at(index);
                self.check_invariant();
                true
            }
            None => false,
        }
    }
}

impl<O: TotalOrder + Default> Default for BinaryHeap<O> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<O: TotalOrder + Default> From<Vec<O::Elem>> for BinaryHeap<O> {
    #[inline]
    fn from(data: Vec<O::Elem>) -> Self {
        Self::from_vec(data)
    }
}

impl<O: TotalOrder + Default> std::iter::FromIterator<O::Elem> for BinaryHeap<O> {
    fn from_iter<Iter: IntoIterator<Item = O::Elem>>(iter: Iter) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<O: TotalOrder> Extend<O::Elem> for BinaryHeap<O> {
    fn extend<Iter: IntoIterator<Item = O::Elem>>(&mut self, iter: Iter) {
        let iter = iter.into_iter();
        match iter.size_hint() {
            (_, Some(len)) => self.reserve(len),
            (len, None) => self.reserve(len),
        }

        for x in iter {
            self.push(x);
        }
    }
}

impl<'a, O: TotalOrder> IntoIterator for &'a BinaryHeap<O> {
    type Item = &'a O::Elem;
    type IntoIter = slice::Iter<'a, O::Elem>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returned by [`BinaryHeap::into_iter_sorted`].
pub struct IntoIterSorted<O: TotalOrder> {
    heap: BinaryHeap<O>,
}

impl<O: TotalOrder + Clone> Clone for IntoIterSorted<O>
where
    O::Elem: Clone,
{
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
        }
    }
}

impl<O: TotalOrder + fmt::Debug> fmt::Debug for IntoIterSorted<O>
where
    O::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIterSorted").field(&self.heap).finish()
    }
}

impl<O: TotalOrder> Iterator for IntoIterSorted<O> {
    type Item = O::Elem;

    #[inline]
    fn next(&mut self) -> Option<O::Elem> {
        self.heap.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<O: TotalOrder> ExactSizeIterator for IntoIterSorted<O> {}
impl<O: TotalOrder> FusedIterator for IntoIterSorted<O> {}
