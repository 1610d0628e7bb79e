use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use ordered_float::OrderedFloat;

/// A total order over `Self::Elem`, captured by value inside a heap.
///
/// `compare` must be antisymmetric, transitive and total. Elements that compare `Equal` are
/// interchangeable as far as the heap is concerned.
pub trait TotalOrder {
    type Elem;

    fn compare(&self, lhs: &Self::Elem, rhs: &Self::Elem) -> Ordering;

    #[inline]
    fn lt(&self, lhs: &Self::Elem, rhs: &Self::Elem) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }

    #[inline]
    fn le(&self, lhs: &Self::Elem, rhs: &Self::Elem) -> bool {
        self.compare(lhs, rhs) != Ordering::Greater
    }
}

/// `T`'s own `Ord`.
#[derive(Clone, Copy, Debug)]
pub struct NaturalOrder<T>(PhantomData<T>);

impl<T> Default for NaturalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NaturalOrder<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Ord> TotalOrder for NaturalOrder<T> {
    type Elem = T;

    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }

    #[inline]
    fn lt(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }

    #[inline]
    fn le(&self, lhs: &T, rhs: &T) -> bool {
        lhs <= rhs
    }
}

/// Flips the inner order, so a min-heap over it pops the greatest element first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<O>(pub O);

impl<O: TotalOrder> TotalOrder for Reversed<O> {
    type Elem = O::Elem;

    #[inline]
    fn compare(&self, lhs: &O::Elem, rhs: &O::Elem) -> Ordering {
        self.0.compare(rhs, lhs)
    }
}

/// Floats ordered the way `OrderedFloat` orders them: `-0.0 == 0.0` and NaN above everything.
#[derive(Clone, Copy, Debug)]
pub struct FloatOrder<F>(PhantomData<F>);

impl<F> Default for FloatOrder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FloatOrder<F> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<F: num::Float> TotalOrder for FloatOrder<F> {
    type Elem = F;

    #[inline]
    fn compare(&self, lhs: &F, rhs: &F) -> Ordering {
        OrderedFloat(*lhs).cmp(&OrderedFloat(*rhs))
    }
}

/// Orders with a comparison closure.
pub struct ByFn<T, F> {
    cmp: F,
    _elem: PhantomData<fn(&T)>,
}

impl<T, F: Fn(&T, &T) -> Ordering> ByFn<T, F> {
    #[inline]
    pub fn new(cmp: F) -> Self {
        Self {
            cmp,
            _elem: PhantomData,
        }
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> TotalOrder for ByFn<T, F> {
    type Elem = T;

    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.cmp)(lhs, rhs)
    }
}

impl<T, F: Clone> Clone for ByFn<T, F> {
    fn clone(&self) -> Self {
        Self {
            cmp: self.cmp.clone(),
            _elem: PhantomData,
        }
    }
}

impl<T, F> fmt::Debug for ByFn<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByFn").finish_non_exhaustive()
    }
}

/// Orders by a key pulled out of each element. The key is recomputed on every comparison.
pub struct ByKey<T, K, F> {
    key: F,
    _elem: PhantomData<fn(&T) -> K>,
}

impl<T, K: Ord, F: Fn(&T) -> K> ByKey<T, K, F> {
    #[inline]
    pub fn new(key: F) -> Self {
        Self {
            key,
            _elem: PhantomData,
        }
    }
}

impl<T, K: Ord, F: Fn(&T) -> K> TotalOrder for ByKey<T, K, F> {
    type Elem = T;

    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.key)(lhs).cmp(&(self.key)(rhs))
    }
}

impl<T, K, F: Clone> Clone for ByKey<T, K, F> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _elem: PhantomData,
        }
    }
}

impl<T, K, F> fmt::Debug for ByKey<T, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}
