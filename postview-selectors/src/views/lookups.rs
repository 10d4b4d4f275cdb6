//! Plain lookups that borrow straight from the snapshot

use crate::error::{Result, StateSections};
use postview_types::{Post, PostId, Profile, State, UserId};

pub fn get_post<'a>(state: &'a State, post_id: &PostId) -> Result<Option<&'a Post>> {
    Ok(state.posts_section()?.posts.get(post_id))
}

pub fn get_current_user_id(state: &State) -> Result<Option<&UserId>> {
    Ok(state.users_section()?.current_user_id.as_ref())
}

/// Profile of the signed-in user, if both the id and the profile are known
pub fn get_current_user(state: &State) -> Result<Option<&Profile>> {
    let users = state.users_section()?;
    Ok(users
        .current_user_id
        .as_ref()
        .and_then(|id| users.profiles.get(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_state() -> State {
        State::from_value(json!({
            "entities": {
                "users": {
                    "currentUserId": "u1",
                    "profiles": {"u1": {"id": "u1", "username": "alice"}}
                },
                "posts": {"posts": {"a": {"id": "a", "channel_id": "1"}}}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_get_post() {
        let state = test_state();
        assert_eq!(
            get_post(&state, &PostId::new("a")).unwrap().map(|p| p.id.as_str()),
            Some("a")
        );
        assert!(get_post(&state, &PostId::new("z")).unwrap().is_none());
    }

    #[test]
    fn test_current_user() {
        let state = test_state();
        assert_eq!(
            get_current_user_id(&state).unwrap(),
            Some(&UserId::new("u1"))
        );
        assert_eq!(
            get_current_user(&state)
                .unwrap()
                .and_then(|p| p.field_str("username")),
            Some("alice")
        );
    }

    #[test]
    fn test_signed_out() {
        let state = State::empty();
        assert!(get_current_user_id(&state).unwrap().is_none());
        assert!(get_current_user(&state).unwrap().is_none());
    }

    #[test]
    fn test_missing_sections() {
        assert!(get_post(&State::default(), &PostId::new("a")).is_err());
        assert!(get_current_user(&State::default()).is_err());
    }
}
