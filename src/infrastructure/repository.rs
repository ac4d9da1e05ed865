//! File system repository

use crate::domain::TagPage;
use crate::error::{Result, TagPagesError};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for site operations
pub trait SiteRepository {
    /// Directory scanned for posts
    fn posts_dir(&self) -> &Path;

    /// Root directory of the generated tag pages
    fn output_dir(&self) -> &Path;

    /// List post files directly inside the posts directory, sorted by path
    fn list_posts(&self) -> Result<Vec<PathBuf>>;

    /// Read the full content of a post
    fn read_post(&self, path: &Path) -> Result<String>;

    /// Create the tag directory if needed and overwrite its index page
    fn write_tag_page(&self, page: &TagPage) -> Result<PathBuf>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub posts_dir: PathBuf,
    pub extension: String,
    pub output_dir: PathBuf,
    /// Fail instead of treating a missing posts directory as empty
    pub require_posts_dir: bool,
}

impl FileSystemRepository {
    /// Create a new repository
    pub fn new(posts_dir: PathBuf, extension: &str, output_dir: PathBuf) -> Self {
        FileSystemRepository {
            posts_dir,
            extension: extension.trim_start_matches('.').to_string(),
            output_dir,
            require_posts_dir: false,
        }
    }

    /// Make a missing posts directory an error
    pub fn with_required_posts_dir(mut self, required: bool) -> Self {
        self.require_posts_dir = required;
        self
    }

    fn is_post(&self, path: &Path) -> bool {
        // Hidden files are skipped, like a shell glob would
        let visible = path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|name| !name.starts_with('.'));

        visible && path.extension() == Some(OsStr::new(&self.extension))
    }
}

impl SiteRepository for FileSystemRepository {
    fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn list_posts(&self) -> Result<Vec<PathBuf>> {
        if !self.posts_dir.is_dir() {
            if self.require_posts_dir {
                return Err(TagPagesError::PostsDirectoryNotFound(self.posts_dir.clone()));
            }
            log::warn!(
                "posts directory {} not found, no posts to scan",
                self.posts_dir.display()
            );
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut posts = Vec::new();
        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() && self.is_post(entry.path()) {
                posts.push(entry.into_path());
            }
        }

        Ok(posts)
    }

    fn read_post(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(TagPagesError::Io)
    }

    fn write_tag_page(&self, page: &TagPage) -> Result<PathBuf> {
        fs::create_dir_all(page.dir(&self.output_dir))?;

        let path = page.path(&self.output_dir);
        fs::write(&path, page.render())?;
        Ok(path)
    }
}
