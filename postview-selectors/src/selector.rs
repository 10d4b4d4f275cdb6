//! Selector traits and the memoized selector instance
//!
//! A derived view is described by a [`View`]: which inputs it reads from
//! the snapshot and props, and a pure function from those inputs to the
//! output. [`Memoized`] wraps a view with one [`MemoSlot`], and
//! [`make_selector`] hands out a fresh, independent instance per call.

use crate::error::Result;
use crate::memo::{MemoSlot, SameInput};
use crate::metrics::{MetricsRegistry, MetricsSnapshot, SelectorMetrics};
use postview_types::State;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

/// A derived view over the normalized store
pub trait View: 'static {
    /// What the caller passes alongside the snapshot
    type Props: ?Sized;

    /// Everything the computation depends on, compared by identity
    type Inputs: SameInput;

    /// The derived value
    type Output;

    /// Pick the inputs out of the snapshot and props
    fn inputs(state: &State, props: &Self::Props) -> Result<Self::Inputs>;

    /// Compute the view from its inputs. Must be pure.
    fn compute(inputs: &Self::Inputs) -> Self::Output;

    /// Name for logs and metrics
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Anything that derives a value from a snapshot and props
pub trait Selector {
    type Props: ?Sized;
    type Output;

    fn select(&mut self, state: &State, props: &Self::Props) -> Result<Arc<Self::Output>>;
}

/// A selector instance owning exactly one cache slot
pub struct Memoized<V: View> {
    slot: MemoSlot<V::Inputs, V::Output>,
    metrics: Arc<SelectorMetrics>,
    _view: PhantomData<fn() -> V>,
}

impl<V: View> Memoized<V> {
    /// Create an instance with an empty slot and private counters
    pub fn new() -> Self {
        Self::with_metrics(Arc::new(SelectorMetrics::new(V::name())))
    }

    /// Create an instance that reports into the given counters
    pub fn with_metrics(metrics: Arc<SelectorMetrics>) -> Self {
        Memoized {
            slot: MemoSlot::new(),
            metrics,
            _view: PhantomData,
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Forget the cached result
    pub fn clear(&mut self) {
        self.slot.clear();
    }
}

impl<V: View> Selector for Memoized<V> {
    type Props = V::Props;
    type Output = V::Output;

    fn select(&mut self, state: &State, props: &V::Props) -> Result<Arc<V::Output>> {
        let inputs = V::inputs(state, props)?;

        if let Some(value) = self.slot.get(&inputs) {
            tracing::trace!(selector = V::name(), "cache hit");
            self.metrics.record_hit();
            return Ok(value);
        }

        let started = Instant::now();
        let value = Arc::new(V::compute(&inputs));
        let elapsed = started.elapsed();

        tracing::debug!(
            selector = V::name(),
            elapsed_us = elapsed.as_micros() as u64,
            "recomputed view"
        );
        self.metrics.record_miss(elapsed);
        self.slot.store(inputs, Arc::clone(&value));

        Ok(value)
    }
}

impl<V: View> Default for Memoized<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: View> fmt::Debug for Memoized<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("view", &V::name())
            .field("cached", &!self.slot.is_empty())
            .field("metrics", &self.metrics.snapshot())
            .finish()
    }
}

/// Create a new, independently cached selector for a view
pub fn make_selector<V: View>() -> Memoized<V> {
    Memoized::new()
}

/// Like [`make_selector`], with counters shared through `registry`
pub fn make_selector_in<V: View>(registry: &MetricsRegistry) -> Memoized<V> {
    Memoized::with_metrics(registry.metrics_for(V::name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SelectorError, StateSections};
    use postview_types::{EntityChange, Post, PostId};
    use std::collections::HashMap;

    /// Counts posts in the store
    struct CountPosts;

    impl View for CountPosts {
        type Props = ();
        type Inputs = Arc<HashMap<PostId, Post>>;
        type Output = usize;

        fn inputs(state: &State, _props: &()) -> Result<Self::Inputs> {
            Ok(Arc::clone(&state.posts_section()?.posts))
        }

        fn compute(posts: &Self::Inputs) -> usize {
            posts.len()
        }

        fn name() -> &'static str {
            "count_posts"
        }
    }

    #[test]
    fn test_memoization() {
        let state = State::empty().apply(&EntityChange::PostReceived(Post::new("a", "1")));
        let mut selector = make_selector::<CountPosts>();

        let first = selector.select(&state, &()).unwrap();
        let second = selector.select(&state, &()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let metrics = selector.metrics();
        assert_eq!(metrics.hits, 1);
        assert_eq!(metrics.misses, 1);
    }

    #[test]
    fn test_new_snapshot_recomputes() {
        let state = State::empty().apply(&EntityChange::PostReceived(Post::new("a", "1")));
        let mut selector = make_selector::<CountPosts>();
        assert_eq!(*selector.select(&state, &()).unwrap(), 1);

        let next = state.apply(&EntityChange::PostReceived(Post::new("b", "1")));
        assert_eq!(*selector.select(&next, &()).unwrap(), 2);
        assert_eq!(selector.metrics().misses, 2);
    }

    #[test]
    fn test_clear_forces_recompute() {
        let state = State::empty();
        let mut selector = make_selector::<CountPosts>();

        let first = selector.select(&state, &()).unwrap();
        selector.clear();
        let second = selector.select(&state, &()).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_malformed_state_propagates() {
        let mut selector = make_selector::<CountPosts>();
        let err = selector.select(&State::default(), &()).unwrap_err();
        assert_eq!(err, SelectorError::MalformedState { section: "posts" });
        assert_eq!(selector.metrics().misses, 0);
    }

    #[test]
    fn test_registry_aggregates_instances() {
        let registry = MetricsRegistry::new();
        let state = State::empty();

        let mut a = make_selector_in::<CountPosts>(&registry);
        let mut b = make_selector_in::<CountPosts>(&registry);
        a.select(&state, &()).unwrap();
        a.select(&state, &()).unwrap();
        b.select(&state, &()).unwrap();

        let snapshots = registry.snapshots();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].hits, 1);
        assert_eq!(snapshots[0].misses, 2);
    }
}
