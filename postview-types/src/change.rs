//! Snapshot transitions
//!
//! [`State::apply`] turns one entity change into a new snapshot. Tables the
//! change does not touch are shared with the previous snapshot by `Arc`, so
//! selectors reading only those tables keep hitting their caches.

use crate::entities::{reaction_key, FileInfo, Post, Profile, Reaction};
use crate::state::{FilesState, PostsState, State};
use crate::{PostId, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A change to the normalized store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EntityChange {
    /// A post was created or replaced
    PostReceived(Post),

    /// A reaction was added, replacing any reaction with the same key
    ReactionReceived { post_id: PostId, reaction: Reaction },

    /// A reaction was removed
    ReactionRemoved {
        post_id: PostId,
        user_id: UserId,
        emoji_name: String,
    },

    /// A profile was created or replaced
    ProfileReceived(Profile),

    /// The file infos attached to a post were fetched
    FilesReceivedForPost { post_id: PostId, files: Vec<FileInfo> },
}

impl State {
    /// Produce the snapshot that results from applying `change`
    pub fn apply(&self, change: &EntityChange) -> State {
        let mut next = self.clone();

        match change {
            EntityChange::PostReceived(post) => {
                let current = self.posts().map(|p| p.as_ref().clone()).unwrap_or_default();
                next.entities.posts = Some(Arc::new(receive_post(current, post)));
            }
            EntityChange::ReactionReceived { post_id, reaction } => {
                let mut current = self.posts().map(|p| p.as_ref().clone()).unwrap_or_default();
                let mut reactions = current.reactions.as_ref().clone();
                reactions
                    .entry(post_id.clone())
                    .or_default()
                    .insert(reaction.key(), reaction.clone());
                current.reactions = Arc::new(reactions);
                next.entities.posts = Some(Arc::new(current));
            }
            EntityChange::ReactionRemoved {
                post_id,
                user_id,
                emoji_name,
            } => {
                let key = reaction_key(user_id, emoji_name);
                let present = self
                    .posts()
                    .and_then(|p| p.reactions.get(post_id))
                    .is_some_and(|map| map.contains_key(&key));

                // Nothing to remove means nothing changes, not even the Arcs.
                if present {
                    let mut current = self.posts().map(|p| p.as_ref().clone()).unwrap_or_default();
                    let mut reactions = current.reactions.as_ref().clone();
                    if let Some(map) = reactions.get_mut(post_id) {
                        map.shift_remove(&key);
                        if map.is_empty() {
                            reactions.remove(post_id);
                        }
                    }
                    current.reactions = Arc::new(reactions);
                    next.entities.posts = Some(Arc::new(current));
                }
            }
            EntityChange::ProfileReceived(profile) => {
                let mut current = self.users().map(|u| u.as_ref().clone()).unwrap_or_default();
                let mut profiles = current.profiles.as_ref().clone();
                profiles.insert(profile.id.clone(), profile.clone());
                current.profiles = Arc::new(profiles);
                next.entities.users = Some(Arc::new(current));
            }
            EntityChange::FilesReceivedForPost { post_id, files } => {
                next.entities.files = Some(Arc::new(receive_files(
                    self.files().map(|f| f.as_ref().clone()).unwrap_or_default(),
                    post_id,
                    files,
                )));
            }
        }

        next
    }
}

fn receive_post(mut current: PostsState, post: &Post) -> PostsState {
    let mut posts = current.posts.as_ref().clone();
    posts.insert(post.id.clone(), post.clone());
    current.posts = Arc::new(posts);

    let listed = current
        .posts_in_channel
        .get(&post.channel_id)
        .is_some_and(|ids| ids.contains(&post.id));

    // Edits keep their position, and the index Arc, untouched.
    if !listed {
        let mut index = current.posts_in_channel.as_ref().clone();
        index
            .entry(post.channel_id.clone())
            .or_default()
            .push(post.id.clone());
        current.posts_in_channel = Arc::new(index);
    }

    current
}

fn receive_files(mut current: FilesState, post_id: &PostId, files: &[FileInfo]) -> FilesState {
    let mut by_id = current.files.as_ref().clone();
    for file in files {
        by_id.insert(file.id.clone(), file.clone());
    }
    current.files = Arc::new(by_id);

    let mut by_post = current.file_ids_by_post_id.as_ref().clone();
    by_post.insert(post_id.clone(), files.iter().map(|f| f.id.clone()).collect());
    current.file_ids_by_post_id = Arc::new(by_post);

    current
}
