//! Entity records
//!
//! Every record has a small typed core (the fields the selectors inspect)
//! and an open `extra` map that carries the rest of the payload through
//! untouched.

use crate::{ChannelId, FileId, PostId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A post in a channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,

    pub channel_id: ChannelId,

    /// Root of the thread this post replies to. `None` or empty means the
    /// post is a root itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_id: Option<PostId>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    pub fn new(id: impl Into<PostId>, channel_id: impl Into<ChannelId>) -> Self {
        Post {
            id: id.into(),
            channel_id: channel_id.into(),
            root_id: None,
            extra: Map::new(),
        }
    }

    /// Builder-style helper for replies
    pub fn reply_to(mut self, root_id: impl Into<PostId>) -> Self {
        self.root_id = Some(root_id.into());
        self
    }

    /// The thread root this post points at, with an empty id treated as absent
    pub fn thread_root(&self) -> Option<&PostId> {
        self.root_id.as_ref().filter(|id| !id.is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.thread_root().is_none()
    }

    /// True if this post belongs to the thread rooted at `root_id`
    pub fn in_thread(&self, root_id: &PostId) -> bool {
        &self.id == root_id || self.thread_root() == Some(root_id)
    }
}

/// A reaction left by a user on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub user_id: UserId,

    pub emoji_name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Reaction {
    pub fn new(user_id: impl Into<UserId>, emoji_name: impl Into<String>) -> Self {
        Reaction {
            user_id: user_id.into(),
            emoji_name: emoji_name.into(),
            extra: Map::new(),
        }
    }

    /// Composite key under which the reaction is stored for its post
    pub fn key(&self) -> String {
        reaction_key(&self.user_id, &self.emoji_name)
    }
}

/// Build the `user_id-emoji_name` key used by the per-post reaction map
pub fn reaction_key(user_id: &UserId, emoji_name: &str) -> String {
    format!("{}-{}", user_id, emoji_name)
}

/// A user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    pub fn new(id: impl Into<UserId>) -> Self {
        Profile {
            id: id.into(),
            extra: Map::new(),
        }
    }

    /// Builder-style helper for payload fields
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(name.to_string(), value.into());
        self
    }

    /// Read a string payload field such as `username`
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.extra.get(name).and_then(Value::as_str)
    }
}

/// Metadata for a file attached to a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub id: FileId,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileInfo {
    pub fn new(id: impl Into<FileId>) -> Self {
        FileInfo {
            id: id.into(),
            extra: Map::new(),
        }
    }

    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.extra.get(name).and_then(Value::as_str)
    }
}
