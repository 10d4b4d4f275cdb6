//! Profiles of the users behind a list of reactions

use crate::error::{Result, StateSections};
use crate::selector::{make_selector, Memoized, View};
use postview_types::{Profile, ProfileTable, Reaction, State};
use std::sync::Arc;

/// Profiles of the reacting users, aligned with `reactions`
///
/// A reaction whose user has no profile is skipped so the rest of the
/// list can still render.
pub fn profiles_for_reactions(profiles: &ProfileTable, reactions: &[Reaction]) -> Vec<Profile> {
    reactions
        .iter()
        .filter_map(|reaction| {
            let profile = profiles.get(&reaction.user_id);
            if profile.is_none() {
                tracing::warn!(
                    user_id = %reaction.user_id,
                    emoji_name = %reaction.emoji_name,
                    "reaction references an unknown user"
                );
            }
            profile.cloned()
        })
        .collect()
}

/// View: `(state, reactions)` → profiles of the reacting users
#[derive(Debug)]
pub struct ProfilesForReactions;

impl View for ProfilesForReactions {
    type Props = Arc<Vec<Reaction>>;
    type Inputs = (Arc<ProfileTable>, Arc<Vec<Reaction>>);
    type Output = Vec<Profile>;

    fn inputs(state: &State, reactions: &Arc<Vec<Reaction>>) -> Result<Self::Inputs> {
        Ok((
            Arc::clone(&state.users_section()?.profiles),
            Arc::clone(reactions),
        ))
    }

    fn compute((profiles, reactions): &Self::Inputs) -> Vec<Profile> {
        profiles_for_reactions(profiles, reactions)
    }

    fn name() -> &'static str {
        "profiles_for_reactions"
    }
}

pub type ProfilesForReactionsSelector = Memoized<ProfilesForReactions>;

/// Create a profile selector with its own cache slot
pub fn make_get_profiles_for_reactions() -> ProfilesForReactionsSelector {
    make_selector()
}
