//! Normalized store snapshots
//!
//! A [`State`] is an immutable snapshot of the entity tables. Every table
//! sits behind an `Arc`, and a change to the store produces a new snapshot
//! with new `Arc`s for the touched tables only. Selectors rely on this:
//! an unchanged `Arc` pointer means unchanged content.

use crate::entities::{FileInfo, Post, Profile, Reaction};
use crate::{ChannelId, FileId, PostId, UserId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while loading a snapshot from disk or JSON
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse snapshot JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Reactions of one post, keyed by `user_id-emoji_name` in insertion order
pub type ReactionMap = IndexMap<String, Reaction>;

pub type PostTable = HashMap<PostId, Post>;

/// Display order of post ids per channel
pub type ChannelIndex = HashMap<ChannelId, Vec<PostId>>;

pub type ReactionTable = HashMap<PostId, ReactionMap>;

pub type ProfileTable = HashMap<UserId, Profile>;

pub type FileTable = HashMap<FileId, FileInfo>;

/// Ordered file ids per post
pub type FileIndex = HashMap<PostId, Vec<FileId>>;

/// A complete store snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub entities: Entities,
}

/// Top-level entity sections
///
/// A section is `None` when the snapshot omits it entirely, which the
/// selectors treat as a malformed snapshot rather than an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<Arc<PostsState>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Arc<UsersState>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Arc<FilesState>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsState {
    pub posts: Arc<PostTable>,

    #[serde(default)]
    pub posts_in_channel: Arc<ChannelIndex>,

    #[serde(default)]
    pub reactions: Arc<ReactionTable>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user_id: Option<UserId>,

    pub profiles: Arc<ProfileTable>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesState {
    pub files: Arc<FileTable>,

    #[serde(default)]
    pub file_ids_by_post_id: Arc<FileIndex>,
}

impl State {
    /// Create a snapshot with every section present and empty
    pub fn empty() -> Self {
        State {
            entities: Entities {
                posts: Some(Arc::new(PostsState::default())),
                users: Some(Arc::new(UsersState::default())),
                files: Some(Arc::new(FilesState::default())),
            },
        }
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a snapshot from an already parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Load a snapshot from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn posts(&self) -> Option<&Arc<PostsState>> {
        self.entities.posts.as_ref()
    }

    pub fn users(&self) -> Option<&Arc<UsersState>> {
        self.entities.users.as_ref()
    }

    pub fn files(&self) -> Option<&Arc<FilesState>> {
        self.entities.files.as_ref()
    }
}
