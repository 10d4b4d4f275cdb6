//! Derived views over the normalized store
//!
//! Each view comes in two forms: a pure function over the tables it reads,
//! and a `make_get_*` factory returning a memoized selector instance.

pub mod files;
pub mod lookups;
pub mod profiles;
pub mod reactions;
pub mod thread;

pub use files::{files_for_post, make_get_files_for_post, FilesForPost, FilesForPostSelector};
pub use lookups::{get_current_user, get_current_user_id, get_post};
pub use profiles::{
    make_get_profiles_for_reactions, profiles_for_reactions, ProfilesForReactions,
    ProfilesForReactionsSelector,
};
pub use reactions::{
    get_reactions_for_post, make_get_reactions_for_post, reactions_for_post, ReactionsForPost,
    ReactionsForPostSelector,
};
pub use thread::{
    make_get_posts_for_thread, posts_for_thread, PostsForThread, PostsForThreadSelector,
    ThreadProps,
};
