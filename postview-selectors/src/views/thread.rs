//! Thread reconstruction
//!
//! A thread is its root post plus every post whose `root_id` points at
//! the root. Order comes from the channel's post index, so the root is
//! not necessarily first.

use crate::error::{Result, StateSections};
use crate::selector::{make_selector, Memoized, View};
use postview_types::{ChannelId, ChannelIndex, Post, PostId, PostTable, State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which thread to reconstruct
///
/// Selectors compare props by `Arc` identity: pass the same `Arc` to get
/// the cached thread back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadProps {
    pub channel_id: ChannelId,
    pub root_id: PostId,
}

impl ThreadProps {
    pub fn new(channel_id: impl Into<ChannelId>, root_id: impl Into<PostId>) -> Arc<Self> {
        Arc::new(ThreadProps {
            channel_id: channel_id.into(),
            root_id: root_id.into(),
        })
    }
}

/// Collect the posts of thread `root_id` in channel index order
///
/// An unknown channel or a root that is not in the post table yields an
/// empty thread. Index entries are not deduplicated.
pub fn posts_for_thread(
    posts: &PostTable,
    index: &ChannelIndex,
    channel_id: &ChannelId,
    root_id: &PostId,
) -> Vec<Post> {
    let Some(post_ids) = index.get(channel_id) else {
        return Vec::new();
    };

    // Replies to a deleted root are dropped along with it.
    if !posts.contains_key(root_id) {
        return Vec::new();
    }

    let mut thread = Vec::new();
    for id in post_ids {
        match posts.get(id) {
            Some(post) if post.in_thread(root_id) => thread.push(post.clone()),
            Some(_) => {}
            None => {
                tracing::warn!(post_id = %id, channel_id = %channel_id, "channel index lists an unknown post");
            }
        }
    }

    thread
}

/// View: `(state, ThreadProps)` → posts of the thread
#[derive(Debug)]
pub struct PostsForThread;

impl View for PostsForThread {
    type Props = Arc<ThreadProps>;
    type Inputs = (Arc<PostTable>, Arc<ChannelIndex>, Arc<ThreadProps>);
    type Output = Vec<Post>;

    fn inputs(state: &State, props: &Arc<ThreadProps>) -> Result<Self::Inputs> {
        let posts = state.posts_section()?;
        Ok((
            Arc::clone(&posts.posts),
            Arc::clone(&posts.posts_in_channel),
            Arc::clone(props),
        ))
    }

    fn compute((posts, index, props): &Self::Inputs) -> Vec<Post> {
        posts_for_thread(posts, index, &props.channel_id, &props.root_id)
    }

    fn name() -> &'static str {
        "posts_for_thread"
    }
}

pub type PostsForThreadSelector = Memoized<PostsForThread>;

/// Create a thread selector with its own cache slot
pub fn make_get_posts_for_thread() -> PostsForThreadSelector {
    make_selector()
}
