//! Reactions attached to a post

use crate::error::{Result, StateSections};
use crate::selector::{make_selector, Memoized, View};
use postview_types::{PostId, Reaction, ReactionTable, State};
use std::sync::Arc;

/// Reactions of `post_id` in the order they were added
pub fn reactions_for_post(reactions: &ReactionTable, post_id: &PostId) -> Vec<Reaction> {
    reactions
        .get(post_id)
        .map(|by_key| by_key.values().cloned().collect())
        .unwrap_or_default()
}

/// Unmemoized lookup, for one-off reads
pub fn get_reactions_for_post(state: &State, post_id: &PostId) -> Result<Vec<Reaction>> {
    Ok(reactions_for_post(&state.posts_section()?.reactions, post_id))
}

/// View: `(state, post id)` → reactions of the post
#[derive(Debug)]
pub struct ReactionsForPost;

impl View for ReactionsForPost {
    type Props = PostId;
    type Inputs = (Arc<ReactionTable>, PostId);
    type Output = Vec<Reaction>;

    fn inputs(state: &State, post_id: &PostId) -> Result<Self::Inputs> {
        Ok((Arc::clone(&state.posts_section()?.reactions), post_id.clone()))
    }

    fn compute((reactions, post_id): &Self::Inputs) -> Vec<Reaction> {
        reactions_for_post(reactions, post_id)
    }

    fn name() -> &'static str {
        "reactions_for_post"
    }
}

pub type ReactionsForPostSelector = Memoized<ReactionsForPost>;

/// Create a reaction selector with its own cache slot
pub fn make_get_reactions_for_post() -> ReactionsForPostSelector {
    make_selector()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Selector;
    use postview_types::{EntityChange, Post, UserId};

    fn state_with(reactions: &[(&str, &str, &str)]) -> State {
        reactions
            .iter()
            .fold(State::empty(), |state, (post, user, emoji)| {
                state.apply(&EntityChange::ReactionReceived {
                    post_id: PostId::new(*post),
                    reaction: Reaction::new(*user, *emoji),
                })
            })
    }

    #[test]
    fn test_reactions_for_post() {
        let state = state_with(&[("a", "u1", "+1")]);

        let reactions = get_reactions_for_post(&state, &PostId::new("a")).unwrap();
        assert_eq!(reactions, vec![Reaction::new("u1", "+1")]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let state = state_with(&[
            ("a", "u3", "zzz"),
            ("a", "u1", "aaa"),
            ("a", "u2", "mmm"),
        ]);

        let users: Vec<_> = get_reactions_for_post(&state, &PostId::new("a"))
            .unwrap()
            .into_iter()
            .map(|r| r.user_id)
            .collect();
        assert_eq!(
            users,
            vec![UserId::new("u3"), UserId::new("u1"), UserId::new("u2")]
        );
    }

    #[test]
    fn test_post_without_reactions() {
        let state = state_with(&[("a", "u1", "+1")]);
        assert!(get_reactions_for_post(&state, &PostId::new("b"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_memoized_by_post_id_value() {
        let state = state_with(&[("a", "u1", "+1")]);
        let mut selector = make_get_reactions_for_post();

        let first = selector.select(&state, &PostId::new("a")).unwrap();
        let second = selector.select(&state, &PostId::new("a")).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let other = selector.select(&state, &PostId::new("b")).unwrap();
        assert!(other.is_empty());
        assert_eq!(selector.metrics().misses, 2);
    }

    #[test]
    fn test_reaction_change_invalidates() {
        let state = state_with(&[("a", "u1", "+1")]);
        let mut selector = make_get_reactions_for_post();
        let first = selector.select(&state, &PostId::new("a")).unwrap();

        // A new post leaves the reaction table untouched
        let next = state.apply(&EntityChange::PostReceived(Post::new("b", "1")));
        assert!(Arc::ptr_eq(&first, &selector.select(&next, &PostId::new("a")).unwrap()));

        let next = next.apply(&EntityChange::ReactionReceived {
            post_id: PostId::new("a"),
            reaction: Reaction::new("u2", "smile"),
        });
        assert_eq!(selector.select(&next, &PostId::new("a")).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_posts_section() {
        assert!(get_reactions_for_post(&State::default(), &PostId::new("a")).is_err());
    }
}
