//! Exercise every view against the snapshot and report cache metrics.

use crate::snapshot::load_snapshot;
use anyhow::Result;
use postview_selectors::prelude::*;
use postview_selectors::StateSections;
use std::path::Path;

/// How many times each selector is invoked with unchanged inputs
const PASSES: usize = 2;

pub fn show_stats(config_path: &Path, snapshot: Option<&Path>, json: bool) -> Result<()> {
    let (config, state) = load_snapshot(config_path, snapshot)?;
    let registry = MetricsRegistry::new();
    let posts = state.posts_section()?;

    let mut channels: Vec<_> = posts.posts_in_channel.iter().collect();
    channels.sort_by(|a, b| a.0.cmp(b.0));

    for (channel_id, post_ids) in channels {
        let roots = post_ids
            .iter()
            .filter(|id| posts.posts.get(*id).is_some_and(Post::is_root));

        for root_id in roots {
            // One instance per thread, as a renderer would hold one per view
            let mut get_thread = make_selector_in::<PostsForThread>(&registry);
            let props = ThreadProps::new(channel_id.clone(), root_id.clone());
            for _ in 0..PASSES {
                get_thread.select(&state, &props)?;
            }
        }
    }

    let mut reacted: Vec<_> = posts.reactions.keys().collect();
    reacted.sort();
    for post_id in reacted {
        let mut get_reactions = make_selector_in::<ReactionsForPost>(&registry);
        let mut get_profiles = make_selector_in::<ProfilesForReactions>(&registry);
        for _ in 0..PASSES {
            let reactions = get_reactions.select(&state, post_id)?;
            get_profiles.select(&state, &reactions)?;
        }
    }

    if let Some(files) = state.files() {
        let mut with_files: Vec<_> = files.file_ids_by_post_id.keys().collect();
        with_files.sort();
        for post_id in with_files {
            let mut get_files = make_selector_in::<FilesForPost>(&registry);
            for _ in 0..PASSES {
                get_files.select(&state, post_id)?;
            }
        }
    }

    let snapshots = registry.snapshots();
    if json || config.output.json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
    } else if snapshots.is_empty() {
        println!("Nothing to compute: the snapshot has no threads, reactions or files");
    } else {
        for snapshot in &snapshots {
            print!("{}", snapshot);
        }
    }

    Ok(())
}
