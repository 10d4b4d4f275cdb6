//! File infos attached to a post

use crate::error::{Result, StateSections};
use crate::selector::{make_selector, Memoized, View};
use postview_types::{FileIndex, FileInfo, FileTable, PostId, State};
use std::sync::Arc;

/// File infos of `post_id` in attachment order, skipping ids with no info
pub fn files_for_post(files: &FileTable, by_post: &FileIndex, post_id: &PostId) -> Vec<FileInfo> {
    let Some(file_ids) = by_post.get(post_id) else {
        return Vec::new();
    };

    file_ids
        .iter()
        .filter_map(|id| files.get(id).cloned())
        .collect()
}

/// View: `(state, post id)` → file infos of the post
#[derive(Debug)]
pub struct FilesForPost;

impl View for FilesForPost {
    type Props = PostId;
    type Inputs = (Arc<FileTable>, Arc<FileIndex>, PostId);
    type Output = Vec<FileInfo>;

    fn inputs(state: &State, post_id: &PostId) -> Result<Self::Inputs> {
        let files = state.files_section()?;
        Ok((
            Arc::clone(&files.files),
            Arc::clone(&files.file_ids_by_post_id),
            post_id.clone(),
        ))
    }

    fn compute((files, by_post, post_id): &Self::Inputs) -> Vec<FileInfo> {
        files_for_post(files, by_post, post_id)
    }

    fn name() -> &'static str {
        "files_for_post"
    }
}

pub type FilesForPostSelector = Memoized<FilesForPost>;

/// Create a file selector with its own cache slot
pub fn make_get_files_for_post() -> FilesForPostSelector {
    make_selector()
}
