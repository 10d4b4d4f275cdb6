//! Selector errors
//!
//! Absent data (unknown channel, post, user) is never an error; selectors
//! return empty or partial views for it. The only fault is a snapshot
//! that lacks a whole top-level section, which means whoever built the
//! snapshot is broken.

use postview_types::{FilesState, PostsState, State, UsersState};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Malformed state: snapshot has no `entities.{section}` section")]
    MalformedState { section: &'static str },
}

pub type Result<T> = std::result::Result<T, SelectorError>;

/// Section accessors that fail loudly on malformed snapshots
pub trait StateSections {
    fn posts_section(&self) -> Result<&Arc<PostsState>>;
    fn users_section(&self) -> Result<&Arc<UsersState>>;
    fn files_section(&self) -> Result<&Arc<FilesState>>;
}

impl StateSections for State {
    fn posts_section(&self) -> Result<&Arc<PostsState>> {
        self.posts()
            .ok_or(SelectorError::MalformedState { section: "posts" })
    }

    fn users_section(&self) -> Result<&Arc<UsersState>> {
        self.users()
            .ok_or(SelectorError::MalformedState { section: "users" })
    }

    fn files_section(&self) -> Result<&Arc<FilesState>> {
        self.files()
            .ok_or(SelectorError::MalformedState { section: "files" })
    }
}
