//! Single-slot memoization keyed on input identity
//!
//! A [`MemoSlot`] remembers the inputs of the last computation and its
//! output. A lookup hits only when every input is the *same* input as
//! last time: shared tables and props objects compare by `Arc` pointer,
//! scalar ids compare by value. Structural equality is never consulted,
//! so two equal but separately allocated props objects always miss.

use postview_types::{ChannelId, FileId, PostId, UserId};
use std::sync::Arc;

/// Identity comparison for selector inputs
pub trait SameInput {
    /// True if `other` is the same input as `self`
    fn same_as(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SameInput for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

macro_rules! same_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SameInput for $ty {
                fn same_as(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

same_by_value!(PostId, ChannelId, UserId, FileId, String, u64, bool);

impl<T: SameInput> SameInput for Option<T> {
    fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_as(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: SameInput, B: SameInput> SameInput for (A, B) {
    fn same_as(&self, other: &Self) -> bool {
        self.0.same_as(&other.0) && self.1.same_as(&other.1)
    }
}

impl<A: SameInput, B: SameInput, C: SameInput> SameInput for (A, B, C) {
    fn same_as(&self, other: &Self) -> bool {
        self.0.same_as(&other.0) && self.1.same_as(&other.1) && self.2.same_as(&other.2)
    }
}

/// The remembered (inputs, output) pair
#[derive(Debug, Clone)]
pub struct MemoEntry<I, V: ?Sized> {
    /// Inputs of the last computation. Holding the `Arc`s keeps their
    /// allocations alive, so a pointer match can never be a recycled address.
    pub inputs: I,

    pub value: Arc<V>,
}

/// A one-entry cache
#[derive(Debug)]
pub struct MemoSlot<I, V: ?Sized> {
    entry: Option<MemoEntry<I, V>>,
}

impl<I: SameInput, V: ?Sized> MemoSlot<I, V> {
    /// Create an empty slot
    pub fn new() -> Self {
        MemoSlot { entry: None }
    }

    /// Get the cached value if `inputs` are the same inputs as last time
    pub fn get(&self, inputs: &I) -> Option<Arc<V>> {
        self.entry
            .as_ref()
            .filter(|entry| entry.inputs.same_as(inputs))
            .map(|entry| Arc::clone(&entry.value))
    }

    /// Replace the slot contents
    pub fn store(&mut self, inputs: I, value: Arc<V>) {
        self.entry = Some(MemoEntry { inputs, value });
    }

    /// Return the cached value or compute, store, and return a new one.
    ///
    /// The boolean is true on a hit.
    pub fn get_or_compute<F>(&mut self, inputs: I, compute: F) -> (Arc<V>, bool)
    where
        F: FnOnce(&I) -> Arc<V>,
    {
        if let Some(value) = self.get(&inputs) {
            return (value, true);
        }

        let value = compute(&inputs);
        self.store(inputs, Arc::clone(&value));
        (value, false)
    }

    /// Drop the cached entry
    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

impl<I: SameInput, V: ?Sized> Default for MemoSlot<I, V> {
    fn default() -> Self {
        Self::new()
    }
}
