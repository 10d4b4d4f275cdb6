//! Print the reactions of a post, optionally with who left them.

use crate::snapshot::load_snapshot;
use anyhow::Result;
use postview_selectors::prelude::*;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
pub struct ReactionsResponse<'a> {
    pub post_id: &'a PostId,
    pub reactions: &'a [Reaction],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<&'a [Profile]>,
}

pub fn show_reactions(
    config_path: &Path,
    snapshot: Option<&Path>,
    post: &str,
    with_profiles: bool,
    json: bool,
) -> Result<()> {
    let (config, state) = load_snapshot(config_path, snapshot)?;
    let post_id = PostId::new(post);

    let mut get_reactions = make_get_reactions_for_post();
    let reactions = get_reactions.select(&state, &post_id)?;

    let profiles = if with_profiles {
        let mut get_profiles = make_get_profiles_for_reactions();
        Some(get_profiles.select(&state, &reactions)?)
    } else {
        None
    };

    if json || config.output.json {
        let payload = ReactionsResponse {
            post_id: &post_id,
            reactions: &reactions,
            profiles: profiles.as_deref().map(Vec::as_slice),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if reactions.is_empty() {
        println!("No reactions found for post '{}'", post);
        return Ok(());
    }

    println!("Reactions on {}:", post);
    for reaction in reactions.iter() {
        println!("- :{}: {}", reaction.emoji_name, reaction.user_id);
    }

    if let Some(profiles) = profiles {
        let label = &config.output.profile_label;
        println!("\nReacted:");
        for profile in profiles.iter() {
            println!(
                "- {}",
                profile.field_str(label).unwrap_or(profile.id.as_str())
            );
        }
    }

    Ok(())
}
