//! Print the files attached to a post.

use crate::snapshot::load_snapshot;
use anyhow::Result;
use postview_selectors::prelude::*;
use std::path::Path;

pub fn show_files(config_path: &Path, snapshot: Option<&Path>, post: &str, json: bool) -> Result<()> {
    let (config, state) = load_snapshot(config_path, snapshot)?;

    let mut get_files = make_get_files_for_post();
    let files = get_files.select(&state, &PostId::new(post))?;

    if json || config.output.json {
        println!("{}", serde_json::to_string_pretty(files.as_slice())?);
    } else if files.is_empty() {
        println!("No files found for post '{}'", post);
    } else {
        println!("Files on {}:", post);
        for file in files.iter() {
            match file.field_str("name") {
                Some(name) => println!("- {} ({})", name, file.id),
                None => println!("- {}", file.id),
            }
        }
    }

    Ok(())
}
