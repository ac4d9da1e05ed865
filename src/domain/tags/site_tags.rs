//! Site-wide tag accumulation

use crate::error::{Result, TagPagesError};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Tags declared by a single post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTags {
    pub path: PathBuf,
    pub tags: Vec<String>,
    /// The front matter has a `tags:` line, even if it lists nothing
    pub has_tags_key: bool,
}

impl PostTags {
    pub fn new(path: PathBuf, tags: Vec<String>) -> Self {
        let has_tags_key = !tags.is_empty();
        PostTags {
            path,
            tags,
            has_tags_key,
        }
    }

    /// Post whose `tags:` line is present but empty
    pub fn empty_tags_key(path: PathBuf) -> Self {
        PostTags {
            path,
            tags: Vec::new(),
            has_tags_key: true,
        }
    }
}

/// Union of the tags of every post. Case-sensitive, duplicates collapse.
pub fn collect_site_tags(posts: &[PostTags]) -> BTreeSet<String> {
    posts
        .iter()
        .flat_map(|post| post.tags.iter().cloned())
        .collect()
}

/// Reject tags that cannot be used as a single directory name under the output root.
pub fn validate_tag(tag: &str, post: &Path) -> Result<()> {
    let invalid = tag.is_empty()
        || tag == "."
        || tag == ".."
        || tag.contains('/')
        || tag.contains('\\')
        || tag.contains('\0');

    if invalid {
        return Err(TagPagesError::InvalidTag {
            tag: tag.to_string(),
            post: post.to_path_buf(),
        });
    }

    Ok(())
}
