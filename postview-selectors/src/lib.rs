//! Postview selector engine
//!
//! This crate computes derived views over a normalized chat store:
//! conversation threads, per-post reaction lists, the profiles behind
//! those reactions, and per-post file listings. Views are exposed as
//! **selectors**, memoized function objects that return the exact same
//! `Arc` when called again with unchanged inputs.
//!
//! # Architecture
//!
//! - A [`View`] names the inputs it reads (tables of the snapshot plus the
//!   caller's props) and a pure function from those inputs to its output.
//! - [`Memoized`] wraps a view with a single [`MemoSlot`]. The slot hits
//!   only when every input is *identical* to last time: tables and props
//!   objects compare by `Arc` pointer, scalar ids by value.
//! - Factories (`make_get_*`) hand out a new instance with an empty slot
//!   on every call, so two call sites rendering two different threads
//!   never evict each other.
//!
//! The store itself is external. Snapshots are immutable and every change
//! produces new `Arc`s for the tables it touches, which is what makes
//! pointer comparison a sound cache key.
//!
//! # Example
//!
//! ```rust,ignore
//! use postview_selectors::prelude::*;
//! use std::sync::Arc;
//!
//! let state = State::from_file("snapshot.json")?;
//! let mut get_thread = make_get_posts_for_thread();
//!
//! let props = ThreadProps::new("town-square", "root-post");
//! let thread = get_thread.select(&state, &props)?;
//!
//! // Same snapshot, same props object: same Arc, no recomputation
//! assert!(Arc::ptr_eq(&thread, &get_thread.select(&state, &props)?));
//! ```

#![warn(missing_debug_implementations)]

pub mod error;
pub mod memo;
pub mod metrics;
pub mod selector;
pub mod views;

pub use error::{Result, SelectorError, StateSections};
pub use memo::{MemoEntry, MemoSlot, SameInput};
pub use metrics::{MetricsRegistry, MetricsSnapshot, SelectorMetrics};
pub use selector::{make_selector, make_selector_in, Memoized, Selector, View};
pub use views::ThreadProps;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Result, SelectorError};
    pub use crate::metrics::MetricsRegistry;
    pub use crate::selector::{make_selector, make_selector_in, Selector};
    pub use crate::views::{
        get_current_user, get_current_user_id, get_post, get_reactions_for_post,
        make_get_files_for_post, make_get_posts_for_thread, make_get_profiles_for_reactions,
        make_get_reactions_for_post, FilesForPost, PostsForThread, ProfilesForReactions,
        ReactionsForPost, ThreadProps,
    };
    pub use postview_types::{
        ChannelId, EntityChange, FileId, FileInfo, Post, PostId, Profile, Reaction, State, UserId,
    };
}
