//! Shared types for postview
//!
//! This crate provides the entity records held by the normalized store
//! (posts, reactions, profiles, file infos), their identifiers, and the
//! immutable [`State`] snapshot the selectors read from.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod change;
pub mod entities;
pub mod state;

pub use change::EntityChange;
pub use entities::{FileInfo, Post, Profile, Reaction};
pub use state::{
    ChannelIndex, Entities, FileIndex, FileTable, FilesState, PostTable, PostsState, ProfileTable,
    ReactionMap, ReactionTable, SnapshotError, State, UsersState,
};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Post identifier, globally unique
    PostId
);

string_id!(
    /// Channel identifier
    ChannelId
);

string_id!(
    /// User identifier, also the key of the profile table
    UserId
);

string_id!(
    /// File info identifier
    FileId
);
