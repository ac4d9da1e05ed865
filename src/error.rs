//! Error types for tagpages

use crate::infrastructure::config::CONFIG_KEYS;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tag page generator
#[derive(Debug, Error)]
pub enum TagPagesError {
    #[error("Posts directory not found: {0}")]
    PostsDirectoryNotFound(PathBuf),

    #[error("Invalid tag '{tag}' in {}", .post.display())]
    InvalidTag { tag: String, post: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TagPagesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagPagesError::PostsDirectoryNotFound(_) => 2,
            TagPagesError::InvalidTag { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagPagesError::PostsDirectoryNotFound(path) => {
                format!(
                    "Posts directory not found: {}\n\n\
                    Suggestions:\n\
                    • Run tagpages from the root of your site\n\
                    • Point it at your posts with --posts-dir <DIR>\n\
                    • Set posts_dir in _tagpages.toml",
                    path.display()
                )
            }
            TagPagesError::InvalidTag { tag, post } => {
                format!(
                    "Invalid tag '{}' in {}\n\n\
                    Tags become directory names, so they cannot be '.', '..'\n\
                    or contain path separators.",
                    tag,
                    post.display()
                )
            }
            TagPagesError::Config(msg) => {
                if msg.contains("unknown field") {
                    format!(
                        "{}\n\nValid keys: {}",
                        msg,
                        CONFIG_KEYS.join(", ")
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagPagesError
pub type Result<T> = std::result::Result<T, TagPagesError>;
