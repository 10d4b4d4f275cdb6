//! Loading the store snapshot that read-only commands operate on.

use crate::config::Config;
use anyhow::{bail, Context, Result};
use postview_types::State;
use std::path::Path;

/// Load config and snapshot. `--snapshot` wins over the configured path.
pub fn load_snapshot(config_path: &Path, snapshot_override: Option<&Path>) -> Result<(Config, State)> {
    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;

    let path = match snapshot_override {
        Some(path) => path.to_path_buf(),
        None => match config.snapshot_path() {
            Some(path) => path,
            None => bail!(
                "No snapshot configured: pass --snapshot or set `snapshot` in {}",
                config_path.display()
            ),
        },
    };

    let state =
        State::from_file(&path).with_context(|| format!("Failed to load snapshot {:?}", path))?;

    if let Some(posts) = state.posts() {
        tracing::debug!(
            posts = posts.posts.len(),
            channels = posts.posts_in_channel.len(),
            "loaded snapshot from {}",
            path.display()
        );
    }

    Ok((config, state))
}
