//! Print the posts of one thread.

use crate::snapshot::load_snapshot;
use anyhow::Result;
use postview_selectors::prelude::*;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
pub struct ThreadResponse<'a> {
    pub channel_id: &'a ChannelId,
    pub root_id: &'a PostId,
    pub posts: &'a [Post],
}

pub fn show_thread(
    config_path: &Path,
    snapshot: Option<&Path>,
    channel: &str,
    root: &str,
    json: bool,
) -> Result<()> {
    let (config, state) = load_snapshot(config_path, snapshot)?;

    let props = ThreadProps::new(channel, root);
    let mut get_thread = make_get_posts_for_thread();
    let posts = get_thread.select(&state, &props)?;

    if json || config.output.json {
        let payload = ThreadResponse {
            channel_id: &props.channel_id,
            root_id: &props.root_id,
            posts: &posts,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if posts.is_empty() {
        println!("No posts found for thread '{}' in channel '{}'", root, channel);
        return Ok(());
    }

    println!("Thread {} in channel {} ({} posts):", root, channel, posts.len());
    for post in posts.iter() {
        let marker = if post.id == props.root_id { "*" } else { "-" };
        let message = post
            .extra
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("");
        if message.is_empty() {
            println!("{} {}", marker, post.id);
        } else {
            println!("{} {}: {}", marker, post.id, message);
        }
    }

    Ok(())
}
